//! Boolean operations on simple polygons following the Greiner-Hormann clipping algorithm,
//! extended to handle degenerate configurations: vertices lying on the opposite boundary and
//! edges overlapping each other.
//!
//! ```
//! use greiner::{Tolerance, cartesian::Polygon};
//!
//! let horizontal: Polygon<f64> = vec![[-2., -1.], [2., -1.], [2., 1.], [-2., 1.]].into();
//! let vertical: Polygon<f64> = vec![[-1., -2.], [1., -2.], [1., 2.], [-1., 2.]].into();
//!
//! let cross = horizontal.or(vertical, Tolerance::default()).unwrap();
//! assert_eq!(cross.len(), 1);
//! assert_eq!(cross[0].outer().len(), 12);
//! ```

mod clipper;
mod error;
mod graph;
mod shape;
mod tolerance;

pub mod cartesian;

pub use self::clipper::{Clipper, Unknown};
pub use self::error::{Error, Result};
pub use self::graph::Role;
pub use self::shape::Shape;
pub use self::tolerance::{IsClose, Positive, Tolerance};

use num_traits::Float;

use self::cartesian::Polygon;

/// A boolean operation between a source and a clip polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The area enclosed by both polygons.
    Intersection,
    /// The area enclosed by any of the polygons.
    Union,
    /// The area enclosed by the source and not by the clip.
    Difference,
}

impl Operation {
    /// Returns the operation traversing the source and the clip in the given directions.
    pub fn from_directions(source_forwards: bool, clip_forwards: bool) -> Result<Self> {
        match (source_forwards, clip_forwards) {
            (true, true) => Ok(Self::Intersection),
            (false, false) => Ok(Self::Union),
            (false, true) => Ok(Self::Difference),
            (true, false) => Err(Error::InvalidOperation {
                source_forwards,
                clip_forwards,
            }),
        }
    }

    /// Returns whether the source and the clip are traversed forwards when entering the
    /// opposite polygon.
    pub fn directions(&self) -> (bool, bool) {
        match self {
            Self::Intersection => (true, true),
            Self::Union => (false, false),
            Self::Difference => (false, true),
        }
    }
}

impl<T> Polygon<T>
where
    T: Float,
{
    /// Returns the union of self and rhs.
    pub fn or(self, rhs: Self, tolerance: Tolerance<T>) -> Result<Vec<Shape<T>>> {
        self.operate(rhs, tolerance, Operation::Union)
    }

    /// Returns the difference of rhs on self.
    pub fn not(self, rhs: Self, tolerance: Tolerance<T>) -> Result<Vec<Shape<T>>> {
        self.operate(rhs, tolerance, Operation::Difference)
    }

    /// Returns the intersection of self and rhs.
    pub fn and(self, rhs: Self, tolerance: Tolerance<T>) -> Result<Vec<Shape<T>>> {
        self.operate(rhs, tolerance, Operation::Intersection)
    }

    fn operate(
        self,
        rhs: Self,
        tolerance: Tolerance<T>,
        operation: Operation,
    ) -> Result<Vec<Shape<T>>> {
        Clipper::default()
            .with_tolerance(tolerance)
            .with_subject(self)
            .with_clip(rhs)
            .execute(operation)
    }
}

/// Clips the source polygon with the clip one, performing the boolean operation selected by
/// the given traversal directions with the default [`Tolerance`].
///
/// Traversing both polygons forwards computes their intersection, both backwards their union,
/// and only the clip forwards the difference of the clip on the source. Any other combination
/// fails with [`Error::InvalidOperation`].
pub fn clip<T>(
    source: &Polygon<T>,
    clip: &Polygon<T>,
    source_forwards: bool,
    clip_forwards: bool,
) -> Result<Vec<Shape<T>>>
where
    T: Float,
{
    let operation = Operation::from_directions(source_forwards, clip_forwards)?;

    Clipper::default()
        .with_subject(source.clone())
        .with_clip(clip.clone())
        .execute(operation)
}

#[cfg(test)]
mod tests {
    use crate::{Error, Operation};

    #[test]
    fn operation_from_directions() {
        struct Test {
            name: &'static str,
            directions: (bool, bool),
            want: Result<Operation, Error>,
        }

        vec![
            Test {
                name: "both forwards",
                directions: (true, true),
                want: Ok(Operation::Intersection),
            },
            Test {
                name: "both backwards",
                directions: (false, false),
                want: Ok(Operation::Union),
            },
            Test {
                name: "clip forwards only",
                directions: (false, true),
                want: Ok(Operation::Difference),
            },
            Test {
                name: "source forwards only",
                directions: (true, false),
                want: Err(Error::InvalidOperation {
                    source_forwards: true,
                    clip_forwards: false,
                }),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let (source_forwards, clip_forwards) = test.directions;
            let got = Operation::from_directions(source_forwards, clip_forwards);

            assert_eq!(got, test.want, "{}", test.name);
            if let Ok(operation) = got {
                assert_eq!(operation.directions(), test.directions, "{}", test.name);
            }
        });
    }

    #[test]
    fn invalid_operation_message() {
        let error = Error::InvalidOperation {
            source_forwards: true,
            clip_forwards: false,
        };

        assert_eq!(
            error.to_string(),
            "no boolean operation traverses the subject forwards and the clip backwards"
        );
    }
}
