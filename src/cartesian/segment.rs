use num_traits::Float;

use crate::{
    IsClose, Tolerance,
    cartesian::{Point, determinant::Determinant},
    tolerance::between,
};

/// The straight line between two endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a, T> {
    /// The first point in the segment.
    pub from: &'a Point<T>,
    /// The last point in the segment.
    pub to: &'a Point<T>,
}

impl<'a, T> From<(&'a Point<T>, &'a Point<T>)> for Segment<'a, T> {
    fn from((from, to): (&'a Point<T>, &'a Point<T>)) -> Self {
        Self { from, to }
    }
}

/// Which endpoints of a pair of segments lie on the other segment of the pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OnLine {
    /// The first endpoint of the source segment lies on the clip segment.
    pub source_from: bool,
    /// The last endpoint of the source segment lies on the clip segment.
    pub source_to: bool,
    /// The first endpoint of the clip segment lies on the source segment.
    pub clip_from: bool,
    /// The last endpoint of the clip segment lies on the source segment.
    pub clip_to: bool,
}

impl OnLine {
    /// Returns true if, and only if, any endpoint lies on the other segment.
    pub fn any(&self) -> bool {
        self.source_from || self.source_to || self.clip_from || self.clip_to
    }
}

/// The relation between a source and a clip [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing<T> {
    /// The common point, meaningful only for valid or degenerate crossings.
    pub point: Point<T>,
    /// The parameter of the common point along the source segment.
    pub to_source: T,
    /// The parameter of the common point along the clip segment.
    pub to_clip: T,
    /// The endpoints lying on the opposite segment.
    pub on_line: OnLine,
    valid: bool,
}

impl<T> Crossing<T> {
    /// Returns true if, and only if, the segments cross at a point interior to both of them.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns true if, and only if, an endpoint of one segment touches the other one.
    pub fn is_degenerate(&self) -> bool {
        self.on_line.any()
    }
}

impl<T> Segment<'_, T>
where
    T: Float,
{
    /// Returns the distance between the two endpoints of the segment.
    pub fn length(&self) -> T {
        self.from.distance(self.to)
    }

    /// Returns the middle point of this segment.
    pub fn midpoint(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point {
            x: (self.from.x + self.to.x) / two,
            y: (self.from.y + self.to.y) / two,
        }
    }

    /// Returns true if, and only if, the given point lies on the closed segment.
    pub fn contains(&self, point: &Point<T>, tolerance: &Tolerance<T>) -> bool {
        let within = |value: T, bound: T, other: T| {
            between(value, bound, other)
                || value.is_close(&bound, tolerance)
                || value.is_close(&other, tolerance)
        };

        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;

        // Axis aligned segments would divide by zero below.
        if dx.is_close(&T::zero(), tolerance) {
            return point.x.is_close(&self.from.x, tolerance)
                && within(point.y, self.from.y, self.to.y);
        }

        if dy.is_close(&T::zero(), tolerance) {
            return point.y.is_close(&self.from.y, tolerance)
                && within(point.x, self.from.x, self.to.x);
        }

        let tx = (point.x - self.from.x) / dx;
        let ty = (point.y - self.from.y) / dy;

        tx.is_close(&ty, tolerance)
            && within(point.x, self.from.x, self.to.x)
            && within(point.y, self.from.y, self.to.y)
    }

    /// Being the given point on this segment, returns its parameter in the range `[0, 1]`.
    pub fn parameter(&self, point: &Point<T>, tolerance: &Tolerance<T>) -> T {
        if self.from.is_close(point, tolerance) {
            return T::zero();
        }

        if self.to.is_close(point, tolerance) {
            return T::one();
        }

        let dx = self.to.x - self.from.x;
        if dx.is_close(&T::zero(), tolerance) {
            return (point.y - self.from.y) / (self.to.y - self.from.y);
        }

        (point.x - self.from.x) / dx
    }

    /// Returns the ratio between the distance from the first endpoint to the given point and
    /// the length of the segment.
    pub fn distance_ratio(&self, point: &Point<T>) -> T {
        self.from.distance(point) / self.length()
    }

    /// Classifies the relation between self, as the source segment, and the given clip segment.
    pub fn classify(&self, clip: &Segment<'_, T>, tolerance: &Tolerance<T>) -> Crossing<T> {
        let on_line = OnLine {
            source_from: clip.contains(self.from, tolerance),
            source_to: clip.contains(self.to, tolerance),
            clip_from: self.contains(clip.from, tolerance),
            clip_to: self.contains(clip.to, tolerance),
        };

        let determinant = Determinant::new(self, clip).into_inner();
        if determinant.is_zero() {
            // Parallel or collinear segments have no transversal crossing.
            return self.collinear_crossing(clip, on_line, tolerance);
        }

        let snap = |parameter: T| {
            if parameter.is_close(&T::zero(), tolerance) {
                T::zero()
            } else if parameter.is_close(&T::one(), tolerance) {
                T::one()
            } else {
                parameter
            }
        };

        let to_source = snap(
            ((clip.to.x - clip.from.x) * (self.from.y - clip.from.y)
                - (clip.to.y - clip.from.y) * (self.from.x - clip.from.x))
                / determinant,
        );

        let to_clip = snap(
            ((self.to.x - self.from.x) * (self.from.y - clip.from.y)
                - (self.to.y - self.from.y) * (self.from.x - clip.from.x))
                / determinant,
        );

        let inside = |parameter: T| T::zero() < parameter && parameter < T::one();

        Crossing {
            point: Point {
                x: self.from.x + to_source * (self.to.x - self.from.x),
                y: self.from.y + to_source * (self.to.y - self.from.y),
            },
            to_source,
            to_clip,
            on_line,
            valid: inside(to_source) && inside(to_clip),
        }
    }

    /// Being zero the determinant of self and clip, returns the crossing located at the first
    /// endpoint lying on the opposite segment, if any.
    fn collinear_crossing(
        &self,
        clip: &Segment<'_, T>,
        on_line: OnLine,
        tolerance: &Tolerance<T>,
    ) -> Crossing<T> {
        let (point, to_source, to_clip) = if on_line.source_from {
            (*self.from, T::zero(), clip.parameter(self.from, tolerance))
        } else if on_line.source_to {
            (*self.to, T::one(), clip.parameter(self.to, tolerance))
        } else if on_line.clip_from {
            (*clip.from, self.parameter(clip.from, tolerance), T::zero())
        } else if on_line.clip_to {
            (*clip.to, self.parameter(clip.to, tolerance), T::one())
        } else {
            (
                Point {
                    x: T::zero(),
                    y: T::zero(),
                },
                T::zero(),
                T::zero(),
            )
        };

        Crossing {
            point,
            to_source,
            to_clip,
            on_line,
            valid: false,
        }
    }
}
