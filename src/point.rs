use core::fmt;
use core::ops::{Add, Mul, Sub};

/// A fixed-precision coordinate type.
///
/// Every coordinate type names a `Wide` type in which products of two
/// coordinate deltas, and sums of two such products, cannot overflow.
pub trait Coord: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync {
    /// Intermediate type for deltas, products and signed areas.
    type Wide: Copy
        + Ord
        + Default
        + fmt::Debug
        + fmt::Display
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>;

    fn widen(self) -> Self::Wide;

    /// Lossy conversion, only used for the angle of a delta.
    fn wide_to_f64(w: Self::Wide) -> f64;
}

macro_rules! impl_coord {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl Coord for $t {
                type Wide = $wide;

                #[inline]
                fn widen(self) -> $wide {
                    self as $wide
                }

                #[inline]
                fn wide_to_f64(w: $wide) -> f64 {
                    w as f64
                }
            }
        )*
    };
}

// i64 coordinates are only supported for |c| < 2^61, beyond that the signed area overflows i128.
impl_coord!(i8 => i32, i16 => i64, i32 => i128, i64 => i128);

/// A point in the plane.
///
/// Points are plain values: two points are the same point iff their coordinates are equal.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Point<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> Point<T> {
    /// Componentwise `self - other` in the wide type.
    #[inline]
    pub fn delta(&self, other: &Self) -> (T::Wide, T::Wide) {
        (
            self.x.widen() - other.x.widen(),
            self.y.widen() - other.y.widen(),
        )
    }

    /// Squared euclidean distance, exact in the wide type.
    #[inline]
    pub fn dist_sq(&self, other: &Self) -> T::Wide {
        let (dx, dy) = self.delta(other);
        dx * dx + dy * dy
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for [T; 2] {
    fn from(p: Point<T>) -> Self {
        [p.x, p.y]
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Convert a slice of coordinate pairs into points.
pub fn points_from_coords<T: Copy>(coords: &[[T; 2]]) -> Vec<Point<T>> {
    coords.iter().map(|&c| Point::from(c)).collect()
}
