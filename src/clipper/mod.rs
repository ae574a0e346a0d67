mod fallback;
mod intersect;
mod label;
mod search;
mod state;
mod traverse;

use num_traits::Float;

use self::fallback::Relation;
use self::state::State;

use crate::{
    Operation, Result, Role, Shape, Tolerance,
    cartesian::{Polygon, Position},
    graph::Graph,
};

/// Marker for yet undefined generic parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unknown;

/// Implements the clipping algorithm.
///
/// ```
/// use greiner::{Clipper, Operation, Tolerance, cartesian::Polygon};
///
/// let subject: Polygon<f64> = vec![[0., 0.], [2., 0.], [2., 2.], [0., 2.]].into();
/// let clip: Polygon<f64> = vec![[1., 1.], [3., 1.], [3., 3.], [1., 3.]].into();
///
/// let shapes = Clipper::default()
///     .with_tolerance(Tolerance::default())
///     .with_subject(subject)
///     .with_clip(clip)
///     .execute(Operation::Intersection)
///     .unwrap();
///
/// assert_eq!(shapes.len(), 1);
/// assert_eq!(shapes[0].area(), 1.);
/// ```
#[derive(Debug, Clone)]
pub struct Clipper<Sub, Clip, Tol> {
    subject: Sub,
    clip: Clip,
    tolerance: Tol,
}

impl Default for Clipper<Unknown, Unknown, Unknown> {
    fn default() -> Self {
        Self {
            subject: Unknown,
            clip: Unknown,
            tolerance: Unknown,
        }
    }
}

impl<Clip, Tol> Clipper<Unknown, Clip, Tol> {
    /// Sets the polygon being clipped.
    pub fn with_subject<T>(
        self,
        subject: impl Into<Polygon<T>>,
    ) -> Clipper<Polygon<T>, Clip, Tol> {
        Clipper {
            subject: subject.into(),
            clip: self.clip,
            tolerance: self.tolerance,
        }
    }
}

impl<Sub, Tol> Clipper<Sub, Unknown, Tol> {
    /// Sets the polygon clipping the subject.
    pub fn with_clip<T>(self, clip: impl Into<Polygon<T>>) -> Clipper<Sub, Polygon<T>, Tol> {
        Clipper {
            subject: self.subject,
            clip: clip.into(),
            tolerance: self.tolerance,
        }
    }
}

impl<Sub, Clip> Clipper<Sub, Clip, Unknown> {
    /// Sets the [`Tolerance`] deciding when two values are close enough to be equal.
    pub fn with_tolerance<Tol>(self, tolerance: Tol) -> Clipper<Sub, Clip, Tol> {
        Clipper {
            subject: self.subject,
            clip: self.clip,
            tolerance,
        }
    }
}

impl<T> Clipper<Polygon<T>, Polygon<T>, Unknown>
where
    T: Float,
{
    /// Performs the given operation with the default [`Tolerance`].
    pub fn execute(self, operation: Operation) -> Result<Vec<Shape<T>>> {
        self.with_tolerance(Tolerance::default()).execute(operation)
    }
}

impl<T> Clipper<Polygon<T>, Polygon<T>, Tolerance<T>>
where
    T: Float,
{
    /// Performs the given operation and returns the resulting [`Shape`]s, if any.
    pub fn execute(self, operation: Operation) -> Result<Vec<Shape<T>>> {
        self.subject.validate(Role::Subject, &self.tolerance)?;
        self.clip.validate(Role::Clip, &self.tolerance)?;

        let mut graph = Graph::builder()
            .with_subject(&self.subject)
            .with_clip(&self.clip)
            .build();

        let mut state = State::new(graph.len());
        let crossings = intersect::find_intersections(&mut graph, &mut state, &self.tolerance);
        log::debug!("{crossings} intersections found performing the {operation:?}");

        let (source_forwards, clip_forwards) = operation.directions();
        let directions = [source_forwards, clip_forwards];
        let output = directions.map(|forwards| {
            if forwards {
                Position::Inside
            } else {
                Position::Outside
            }
        });

        label::set_positions(&graph, &mut state, &self.tolerance);
        label::set_labels(&graph, &mut state, output, &self.tolerance);

        let contours = traverse::contours(&graph, &mut state, directions, &self.tolerance)?;
        if !contours.is_empty() {
            return Ok(contours.into_iter().map(Shape::new).collect());
        }

        let relation = Relation::new(&graph, &state, &self.tolerance);
        log::debug!("no contour left, resolving the {operation:?} as {relation:?}");

        Ok(fallback::shapes(&mut graph, relation, operation))
    }
}
