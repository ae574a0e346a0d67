use num_traits::Float;

use crate::{
    Error, IsClose, Result, Role, Tolerance,
    cartesian::{Point, Segment, determinant::Determinant},
};

/// The location of a point relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The point is enclosed by the polygon.
    Inside,
    /// The point is not enclosed by the polygon.
    Outside,
    /// The point lies on one of the edges of the polygon.
    OnBoundary,
}

/// A simple polygon in the plain.
#[derive(Debug, Clone)]
pub struct Polygon<T> {
    /// The ordered list of vertices describing the polygon.
    pub vertices: Vec<Point<T>>,
}

impl<T, P> From<Vec<P>> for Polygon<T>
where
    P: Into<Point<T>>,
{
    fn from(vertices: Vec<P>) -> Self {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T> PartialEq for Polygon<T>
where
    T: Clone + PartialEq,
{
    /// Two polygons are equal if, and only if, they have the same vertices describing the same
    /// boundary.
    fn eq(&self, other: &Self) -> bool {
        let len = self.vertices.len();
        if len != other.vertices.len() {
            return false;
        }

        let mut double = other.vertices.clone();
        double.extend_from_slice(&other.vertices);

        (0..len).any(|padding| double[padding..padding + len] == self.vertices)
    }
}

impl<T> IntoIterator for Polygon<T> {
    type Item = Point<T>;
    type IntoIter = std::vec::IntoIter<Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<T> Polygon<T> {
    /// Returns the amount of vertices in the polygon.
    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns this polygon with the reversed winding.
    pub fn reversed(mut self) -> Self {
        self.vertices.reverse();
        self
    }

    /// Returns an ordered iterator over all the vertices of the polygon.
    ///
    /// By definition, a polygon is a closed shape, hence the latest point of the iterator equals
    /// the very first.
    fn closed_vertices(&self) -> impl Iterator<Item = &Point<T>> {
        self.vertices.iter().chain(self.vertices.first())
    }

    /// Returns an ordered iterator over all the [`Segment`]s of this polygon.
    pub fn edges(&self) -> impl Iterator<Item = Segment<'_, T>> {
        self.closed_vertices()
            .zip(self.closed_vertices().skip(1))
            .map(Segment::from)
    }
}

impl<T> Polygon<T>
where
    T: Float,
{
    /// Returns the signed area enclosed by the polygon, positive when counter-clockwise.
    pub fn signed_area(&self) -> T {
        signed_area(&self.vertices)
    }

    /// Returns true if, and only if, the polygon winds counter-clockwise.
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > T::zero()
    }

    /// Returns the [`Position`] of the given point relative to this polygon.
    pub fn position(&self, point: &Point<T>, tolerance: &Tolerance<T>) -> Position {
        position(self.edges(), point, tolerance)
    }

    /// Makes sure the polygon is a ring of at least three distinct, finite vertices.
    pub(crate) fn validate(&self, role: Role, tolerance: &Tolerance<T>) -> Result<()> {
        if self.vertices.len() < 3 {
            return Err(Error::TooFewVertices {
                role,
                count: self.vertices.len(),
            });
        }

        if let Some(position) = self.vertices.iter().position(|point| !point.is_finite()) {
            return Err(Error::NonFiniteCoordinate { role, position });
        }

        if let Some(position) = self
            .edges()
            .position(|edge| edge.from.is_close(edge.to, tolerance))
        {
            return Err(Error::ZeroLengthEdge { role, position });
        }

        Ok(())
    }
}

/// Returns the signed area enclosed by the ring described by the given points.
pub(crate) fn signed_area<T>(points: &[Point<T>]) -> T
where
    T: Float,
{
    let Some(origin) = points.first() else {
        return T::zero();
    };

    let double = points
        .iter()
        .zip(points.iter().skip(1))
        .fold(T::zero(), |area, (from, to)| {
            area + Determinant::from([origin, from, to]).into_inner()
        });

    double / (T::one() + T::one())
}

/// Returns the [`Position`] of the given point relative to the ring described by the given
/// edges.
///
/// Points on any edge are on the boundary; otherwise the odd-even rule decides.
pub(crate) fn position<'a, T>(
    edges: impl Iterator<Item = Segment<'a, T>>,
    point: &Point<T>,
    tolerance: &Tolerance<T>,
) -> Position
where
    T: 'a + Float,
{
    let mut odd = false;
    for edge in edges {
        if edge.contains(point, tolerance) {
            return Position::OnBoundary;
        }

        let (from, to) = (edge.from, edge.to);
        if (from.y < point.y && to.y >= point.y || to.y < point.y && from.y >= point.y)
            && (from.x <= point.x || to.x <= point.x)
        {
            odd ^= from.x + (point.y - from.y) / (to.y - from.y) * (to.x - from.x) < point.x;
        }
    }

    if odd {
        Position::Inside
    } else {
        Position::Outside
    }
}
