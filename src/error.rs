use thiserror::Error;

use crate::Role;

/// Errors that can occur while clipping two polygons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Traversing the subject forwards and the clip backwards is not a boolean operation.
    #[error(
        "no boolean operation traverses the subject {} and the clip {}",
        direction(.source_forwards),
        direction(.clip_forwards)
    )]
    InvalidOperation {
        source_forwards: bool,
        clip_forwards: bool,
    },

    /// The polygon cannot enclose any area.
    #[error("the {role} polygon has {count} vertices, at least 3 are required")]
    TooFewVertices { role: Role, count: usize },

    /// Two consecutive vertices of the polygon are at the same location.
    #[error("the {role} polygon has a zero-length edge starting at vertex {position}")]
    ZeroLengthEdge { role: Role, position: usize },

    /// A coordinate is either NaN or infinite.
    #[error("the {role} polygon has a non-finite coordinate at vertex {position}")]
    NonFiniteCoordinate { role: Role, position: usize },

    /// The traversal of the result did not close its contours.
    #[error("the result traversal did not close after {steps} steps")]
    TraversalDiverged { steps: usize },
}

fn direction(forwards: &bool) -> &'static str {
    if *forwards { "forwards" } else { "backwards" }
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
