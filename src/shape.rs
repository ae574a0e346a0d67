use num_traits::Float;

use crate::cartesian::{Point, Polygon, signed_area};

/// A closed area delimited by an outer contour, minus the area of its holes.
///
/// Contours never repeat their first point at the end. Holes wind in the opposite direction of
/// the outer contour.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape<T> {
    /// The boundary enclosing the whole shape.
    pub(crate) outer: Vec<Point<T>>,
    /// The boundaries of the areas excluded from the shape.
    pub(crate) holes: Vec<Vec<Point<T>>>,
}

impl<T> From<Polygon<T>> for Shape<T> {
    fn from(polygon: Polygon<T>) -> Self {
        Self::new(polygon.vertices)
    }
}

impl<T> Shape<T> {
    /// Returns a shape with no holes.
    pub fn new(outer: Vec<Point<T>>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Returns this shape with the given hole.
    pub fn with_hole(mut self, hole: Vec<Point<T>>) -> Self {
        self.holes.push(hole);
        self
    }

    /// Returns the vertices of the outer contour.
    pub fn outer(&self) -> &[Point<T>] {
        &self.outer
    }

    /// Returns the contour of every hole.
    pub fn holes(&self) -> &[Vec<Point<T>>] {
        &self.holes
    }

    /// Returns the outer contour as a [`Polygon`].
    pub fn outer_polygon(&self) -> Polygon<T>
    where
        T: Clone,
    {
        Polygon {
            vertices: self.outer.clone(),
        }
    }
}

impl<T> Shape<T>
where
    T: Float,
{
    /// Returns the area enclosed by the outer contour and not by any hole.
    pub fn area(&self) -> T {
        self.holes
            .iter()
            .fold(signed_area(&self.outer).abs(), |area, hole| {
                area - signed_area(hole).abs()
            })
    }
}
