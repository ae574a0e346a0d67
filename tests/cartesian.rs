use std::time::SystemTime;

use greiner::{
    Error, Shape, Tolerance,
    cartesian::{Point, Polygon},
    clip,
};
use rand::Rng;

fn polygon(vertices: Vec<[f64; 2]>) -> Polygon<f64> {
    vertices.into()
}

fn points(vertices: Vec<[f64; 2]>) -> Vec<Point<f64>> {
    vertices.into_iter().map(Point::from).collect()
}

/// Returns true if, and only if, both contours describe the same ring, no matter their starting
/// vertex nor their direction.
fn same_ring(a: &[Point<f64>], b: &[Point<f64>]) -> bool {
    let a = Polygon::from(a.to_vec());
    let b = Polygon::from(b.to_vec());
    a == b || a == b.reversed()
}

fn same_shapes(got: &[Shape<f64>], want: &[Shape<f64>]) -> bool {
    got.len() == want.len()
        && got.iter().all(|a| {
            want.iter().any(|b| {
                same_ring(a.outer(), b.outer())
                    && a.holes().len() == b.holes().len()
                    && a
                        .holes()
                        .iter()
                        .all(|hole| b.holes().iter().any(|other| same_ring(hole, other)))
            })
        })
}

fn random_star(rng: &mut impl Rng, total_vertices: usize) -> Polygon<f64> {
    let center = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
    let mut angles = (0..total_vertices)
        .map(|_| rng.random_range(0.0..std::f64::consts::TAU))
        .collect::<Vec<f64>>();

    angles.sort_by(f64::total_cmp);
    angles.dedup();

    angles
        .into_iter()
        .map(|angle| {
            let radius = rng.random_range(0.5..1.0);
            [
                center[0] + radius * angle.cos(),
                center[1] + radius * angle.sin(),
            ]
        })
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn squares_sharing_an_edge() {
    let left = polygon(vec![[0., 0.], [1., 0.], [1., 1.], [0., 1.]]);
    let right = polygon(vec![[1., 0.], [2., 0.], [2., 1.], [1., 1.]]);

    assert_eq!(clip(&left, &right, true, true), Ok(vec![]));

    let Ok(union) = clip(&left, &right, false, false) else {
        panic!("union should succeed");
    };

    assert_eq!(union.len(), 1);
    assert!(same_ring(
        union[0].outer(),
        &points(vec![[1., 0.], [0., 0.], [0., 1.], [1., 1.], [2., 1.], [2., 0.]])
    ));
    assert_eq!(union[0].area(), 2.);

    let Ok(difference) = clip(&left, &right, false, true) else {
        panic!("difference should succeed");
    };

    assert_eq!(difference.len(), 1);
    assert!(same_ring(difference[0].outer(), &left.vertices));
}

#[test]
fn crossing_rectangles() {
    let horizontal = polygon(vec![[-2., -1.], [2., -1.], [2., 1.], [-2., 1.]]);
    let vertical = polygon(vec![[-1., -2.], [1., -2.], [1., 2.], [-1., 2.]]);

    struct Test {
        name: &'static str,
        directions: (bool, bool),
        want: Vec<Shape<f64>>,
    }

    vec![
        Test {
            name: "union",
            directions: (false, false),
            want: vec![Shape::new(points(vec![
                [-1., -1.],
                [-2., -1.],
                [-2., 1.],
                [-1., 1.],
                [-1., 2.],
                [1., 2.],
                [1., 1.],
                [2., 1.],
                [2., -1.],
                [1., -1.],
                [1., -2.],
                [-1., -2.],
            ]))],
        },
        Test {
            name: "intersection",
            directions: (true, true),
            want: vec![Shape::new(points(vec![
                [-1., -1.],
                [1., -1.],
                [1., 1.],
                [-1., 1.],
            ]))],
        },
    ]
    .into_iter()
    .for_each(|test| {
        let (source_forwards, clip_forwards) = test.directions;
        let got = clip(&horizontal, &vertical, source_forwards, clip_forwards);
        assert_eq!(got, Ok(test.want), "{}", test.name);
    });

    let Ok(difference) = clip(&horizontal, &vertical, false, true) else {
        panic!("difference should succeed");
    };

    assert!(same_shapes(
        &difference,
        &[
            Shape::new(points(vec![[-1., -1.], [-2., -1.], [-2., 1.], [-1., 1.]])),
            Shape::new(points(vec![[1., 1.], [2., 1.], [2., -1.], [1., -1.]])),
        ]
    ));
}

#[test]
fn triangle_touching_its_container() {
    let square = polygon(vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]]);
    let triangle = polygon(vec![[2., 0.], [1., 2.], [3., 2.]]);

    assert_eq!(
        clip(&square, &triangle, true, true),
        Ok(vec![Shape::from(triangle.clone())])
    );
    assert_eq!(
        clip(&triangle, &square, true, true),
        Ok(vec![Shape::from(triangle)])
    );
}

#[test]
fn containment_law() {
    let outer = polygon(vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]]);
    let inner = polygon(vec![[1., 1.], [3., 1.], [2., 3.]]);

    assert_eq!(
        clip(&inner, &outer, true, true),
        Ok(vec![Shape::from(inner.clone())])
    );
    assert_eq!(
        clip(&inner, &outer, false, false),
        Ok(vec![Shape::from(outer.clone())])
    );
    assert_eq!(clip(&inner, &outer, false, true), Ok(vec![]));

    let Ok(difference) = clip(&outer, &inner, false, true) else {
        panic!("difference should succeed");
    };

    assert!(same_shapes(
        &difference,
        &[Shape::from(outer.clone()).with_hole(inner.vertices.clone())]
    ));
    assert_eq!(
        difference[0].outer_polygon().is_counter_clockwise(),
        !Polygon::from(difference[0].holes()[0].clone()).is_counter_clockwise(),
        "holes wind opposite to their outer contour"
    );
    assert_eq!(difference[0].area(), 16. - 2.);
}

#[test]
fn disjointness_law() {
    let a = polygon(vec![[0., 0.], [1., 0.], [1., 1.], [0., 1.]]);
    let b = polygon(vec![[3., 3.], [4., 3.], [3.5, 4.]]);

    assert_eq!(clip(&a, &b, true, true), Ok(vec![]));
    assert_eq!(
        clip(&a, &b, false, false),
        Ok(vec![Shape::from(a.clone()), Shape::from(b.clone())])
    );
    assert_eq!(clip(&a, &b, false, true), Ok(vec![Shape::from(a)]));
}

#[test]
fn squares_touching_at_a_corner() {
    let a = polygon(vec![[0., 0.], [1., 0.], [1., 1.], [0., 1.]]);
    let b = polygon(vec![[1., 1.], [2., 1.], [2., 2.], [1., 2.]]);

    assert_eq!(clip(&a, &b, true, true), Ok(vec![]));
    assert_eq!(clip(&a, &b, false, true), Ok(vec![Shape::from(a)]));
}

#[test]
fn operations_are_symmetric() {
    let a = polygon(vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]]);
    let b = polygon(vec![[1., 1.], [5., 1.], [5., 3.], [3., 3.], [3., 5.], [1., 5.]]);

    for directions in [(true, true), (false, false)] {
        let (Ok(ab), Ok(ba)) = (
            clip(&a, &b, directions.0, directions.1),
            clip(&b, &a, directions.0, directions.1),
        ) else {
            panic!("operation {directions:?} should succeed");
        };

        assert!(same_shapes(&ab, &ba), "{directions:?}");
    }
}

#[test]
fn winding_does_not_change_the_result() {
    let a = polygon(vec![[-2., -1.], [2., -1.], [2., 1.], [-2., 1.]]);
    let b = polygon(vec![[-1., -2.], [1., -2.], [1., 2.], [-1., 2.]]);

    for (source_forwards, clip_forwards) in [(true, true), (false, false), (false, true)] {
        let (Ok(ccw), Ok(cw), Ok(mixed)) = (
            clip(&a, &b, source_forwards, clip_forwards),
            clip(
                &a.clone().reversed(),
                &b.clone().reversed(),
                source_forwards,
                clip_forwards,
            ),
            clip(&a.clone().reversed(), &b, source_forwards, clip_forwards),
        ) else {
            panic!("clipping should succeed");
        };

        assert!(same_shapes(&ccw, &cw), "({source_forwards}, {clip_forwards})");
        assert!(same_shapes(&ccw, &mixed), "({source_forwards}, {clip_forwards})");
    }
}

#[test]
fn contours_do_not_repeat_the_first_point() {
    let a = polygon(vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]]);
    let b = polygon(vec![[2., 2.], [6., 2.], [6., 6.], [2., 6.]]);

    for (source_forwards, clip_forwards) in [(true, true), (false, false), (false, true)] {
        let Ok(shapes) = clip(&a, &b, source_forwards, clip_forwards) else {
            panic!("clipping should succeed");
        };

        assert!(!shapes.is_empty());
        shapes.iter().for_each(|shape| {
            assert!(shape.outer().len() > 2);
            assert_ne!(shape.outer().first(), shape.outer().last());
        });
    }
}

#[test]
fn undefined_operation_fails() {
    let a = polygon(vec![[0., 0.], [1., 0.], [1., 1.], [0., 1.]]);

    assert_eq!(
        clip(&a, &a, true, false),
        Err(Error::InvalidOperation {
            source_forwards: true,
            clip_forwards: false,
        })
    );
}

#[test]
fn polygon_operators() {
    let a = polygon(vec![[0., 0.], [2., 0.], [2., 2.], [0., 2.]]);
    let b = polygon(vec![[1., 1.], [3., 1.], [3., 3.], [1., 3.]]);
    let tolerance = Tolerance::default();

    let area = |shapes: Vec<Shape<f64>>| shapes.iter().map(Shape::area).sum::<f64>();

    assert_eq!(a.clone().and(b.clone(), tolerance).map(area), Ok(1.));
    assert_eq!(a.clone().or(b.clone(), tolerance).map(area), Ok(7.));
    assert_eq!(a.not(b, tolerance).map(area), Ok(3.));
}

#[test]
#[ignore]
pub fn cartesian() {
    let mut rng = rand::rng();
    let subject = random_star(&mut rng, 1000);
    let clip = random_star(&mut rng, 1000);

    let start = SystemTime::now();
    let result = subject.and(clip, Tolerance::default());
    let end = SystemTime::now();

    println!(
        "Shapes: {:?}, duration: {} ms",
        result.map(|shapes| shapes.len()),
        end.duration_since(start).unwrap().as_millis()
    );
}
