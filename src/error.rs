use core::fmt;

/// Errors returned by the hull computation.
///
/// They are wrapped into an [`anyhow::Error`]; use `downcast_ref::<HullError>()` to match on them.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum HullError {
    /// The input point set was empty.
    EmptyInput,
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "Needs at least 1 point to compute a convex hull"),
        }
    }
}

impl core::error::Error for HullError {}
