//! Hooks into the hull computation.

/// Notified when a hull computation starts and ends.
///
/// Both methods default to doing nothing.
pub trait HullObserver {
    /// Called before the pivot is searched, with the number of input points.
    fn on_start(&mut self, _num_points: usize) {}

    /// Called once the hull is complete, with its number of vertices.
    fn on_end(&mut self, _num_hull_points: usize) {}
}

/// Observer that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl HullObserver for NoopObserver {}

/// Observer that emits the start and end markers as `trace` logs.
#[cfg(feature = "logging")]
#[derive(Copy, Clone, Debug, Default)]
pub struct LogObserver;

#[cfg(feature = "logging")]
impl HullObserver for LogObserver {
    fn on_start(&mut self, num_points: usize) {
        log::trace!("hull2d (graham scan): start, {num_points} points");
    }

    fn on_end(&mut self, num_hull_points: usize) {
        log::trace!("hull2d (graham scan): end, {num_hull_points} hull points");
    }
}
