use std::ops::{Mul, Sub};

use super::{Point, Segment};

/// The 2x2 cross product of two direction vectors.
///
/// Its sign tells the turn from the first vector to the second: positive for counter-clockwise,
/// negative for clockwise and zero when both are parallel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Determinant<T>(T);

impl<T> From<[&Point<T>; 3]> for Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Returns the cross product of `AB` and `AC`, twice the signed area of the triangle `ABC`.
    fn from([a, b, c]: [&Point<T>; 3]) -> Self {
        Self((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
    }
}

impl<T> Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Returns the cross product of the direction vectors of both [`Segment`]s.
    pub(crate) fn new(a: &Segment<'_, T>, b: &Segment<'_, T>) -> Self {
        Self((a.to.x - a.from.x) * (b.to.y - b.from.y) - (b.to.x - b.from.x) * (a.to.y - a.from.y))
    }
}

impl<T> Determinant<T> {
    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}
