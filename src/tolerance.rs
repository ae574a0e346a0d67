use num_traits::{Float, Signed};

/// The absolute deviation used when no other is given.
const DEFAULT_ABSOLUTE: f64 = 1e-14;

/// A value that is always positive.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Positive<T>(T);

impl<T> From<T> for Positive<T>
where
    T: Signed,
{
    fn from(value: T) -> Self {
        Self(value.abs())
    }
}

impl<T> Positive<T> {
    /// Returns the inner value of self.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// The acceptable deviation between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// The maximum allowed difference between two values, relative to their magnitude.
    pub relative: Positive<T>,
    /// Used to compare values near zero.
    pub absolute: Positive<T>,
}

impl<T> Default for Tolerance<T>
where
    T: Float,
{
    fn default() -> Self {
        Self {
            relative: Positive(T::zero()),
            absolute: Positive(T::from(DEFAULT_ABSOLUTE).unwrap_or_else(T::epsilon)),
        }
    }
}

impl<T> Tolerance<T>
where
    T: Float + Signed,
{
    /// Returns a tolerance accepting any absolute deviation up to the given one.
    pub fn new(absolute: T) -> Self {
        Self {
            relative: Positive(T::zero()),
            absolute: absolute.into(),
        }
    }
}

/// A value whose equality depends on a tolerance.
pub trait IsClose {
    type Tolerance;

    /// Returns true if, and only if, self and rhs are close enough given a tolerance;
    /// otherwise returns false.
    fn is_close(&self, rhs: &Self, tolerance: &Self::Tolerance) -> bool;
}

impl<T> IsClose for T
where
    T: Float,
{
    type Tolerance = Tolerance<T>;

    fn is_close(&self, rhs: &Self, tolerance: &Self::Tolerance) -> bool {
        (*self - *rhs).abs()
            <= Self::max(
                tolerance.relative.0 * Self::max(self.abs(), rhs.abs()),
                tolerance.absolute.0,
            )
    }
}

/// Returns true if, and only if, value lies in the closed interval delimited by the given
/// bounds, no matter their order.
pub(crate) fn between<T>(value: T, bound: T, other: T) -> bool
where
    T: Float,
{
    bound.min(other) <= value && value <= bound.max(other)
}
