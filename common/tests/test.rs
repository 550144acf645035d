use common::shapes::*;
use common::vector::Vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rect() -> Aabb {
    Aabb::new(Vector::new(2.0, 2.0), Vector::new(6.0, 4.0))
}

#[test]
fn test_new_and_getters() {
    let aabb = rect();
    assert_eq!(aabb.width(), 4.0);
    assert_eq!(aabb.height(), 2.0);
    assert_eq!(aabb.center(), Vector::new(4.0, 3.0));
    assert_eq!(aabb.extents(), Vector::new(2.0, 1.0));
    assert_eq!(aabb.area(), 12.0);
}

#[test]
#[should_panic(expected = "invalid AABB")]
fn test_new_rejects_inverted_corners() {
    Aabb::new(Vector::new(1.0, 0.0), Vector::new(0.0, 1.0));
}

#[test]
fn test_from_corners_normalizes() {
    let aabb = Aabb::from_corners(Vector::new(3.0, -1.0), Vector::new(-2.0, 5.0));
    assert_eq!(aabb.lo, Vector::new(-2.0, -1.0));
    assert_eq!(aabb.hi, Vector::new(3.0, 5.0));
}

#[test]
fn test_distance() {
    let aabb = rect();
    assert_eq!(aabb.distance2(Vector::new(0.0, 0.0)), 8.0);
    assert_eq!(aabb.distance2(aabb.lo), 0.0);
    assert_eq!(aabb.distance2(Vector::new(3.0, 3.0)), 0.0);
    assert_eq!(aabb.distance2(Vector::new(4.0, 3.0)), 0.0);
    assert_eq!(aabb.distance2(Vector::new(8.0, 5.0)), 5.0);
    assert_eq!(aabb.distance2(Vector::new(1.0, -1.0)), 10.0);
    assert_eq!(aabb.distance2(Vector::new(4.0, 1.0)), 1.0);
    assert_eq!(aabb.distance2(Vector::new(9.0, 3.0)), 9.0);
    assert_eq!(aabb.distance2(Vector::new(5.0, 5.0)), 1.0);
    assert_eq!(aabb.distance2(Vector::new(0.0, 4.0)), 4.0);

    assert_eq!(aabb.distance(Vector::new(0.0, 4.0)), 2.0);
    assert_eq!(aabb.distance(Vector::new(9.0, 3.0)), 3.0);
}

#[test]
fn test_contains() {
    let aabb = rect();
    assert!(aabb.contains(aabb.lo));
    assert!(aabb.contains(aabb.hi));
    assert!(aabb.contains(Vector::new(3.0, 3.0)));
    assert!(!aabb.contains(Vector::new(-1.0, -1.0)));
    assert!(!aabb.contains(Vector::new(213132534.0, -9843574398.0)));
}

#[test]
fn test_intersects() {
    let aabb = rect();
    let zero = Vector::ZERO;

    assert!(!aabb.intersects_circle(&Circle::new(zero, 1.0)));
    assert!(!aabb.intersects_circle(&Circle::new(Vector::new(6.0, 6.0001), 2.0)));
    assert!(aabb.intersects_circle(&Circle::new(Vector::new(6.0, 5.0), 2.0)));

    assert!(!aabb.intersects(&Aabb::new(zero, Vector::new(1.0, 2.0))));
    // Sharing an edge is not an overlap.
    assert!(!aabb.intersects(&Aabb::new(zero, Vector::new(3.0, 2.0))));
    assert!(aabb.intersects(&Aabb::new(zero, Vector::new(3.0, 2.5))));
}

#[test]
fn test_intersects_segment() {
    let aabb = rect();
    let crossing = Segment::new(Vector::new(0.0, 0.0), Vector::new(8.0, 6.0));
    assert!(aabb.intersects_segment(&crossing));

    // Bounding boxes overlap, but the segment passes below the corner.
    let missing = Segment::new(Vector::new(3.0, 0.0), Vector::new(7.0, 2.5));
    assert!(!aabb.intersects_segment(&missing));

    let shape = ShapeEnum::from(crossing);
    assert!(aabb.intersects_shape(&shape));
}

#[test]
fn test_union_contains_both() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);
    for _ in 0..100 {
        let a = Aabb::from_corners(
            Vector::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
            Vector::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
        );
        let b = Aabb::from_corners(
            Vector::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
            Vector::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
        );
        let union = a.union(&b);
        assert!(union.contains_aabb(&a));
        assert!(union.contains_aabb(&b));
        assert!(union.area() >= a.area());
        assert!(union.area() >= b.area());
    }
}

#[test]
fn test_circle_bounding_box() {
    let circle = Circle::new(Vector::new(1.0, 2.0), 3.0);
    assert_eq!(
        circle.bounding_box(),
        Aabb::from_min_max(-2.0, -1.0, 4.0, 5.0)
    );
}

#[test]
fn test_as_shape() {
    let circle = Circle::new(Vector::new(1.0, 1.0), 1.0);
    let found = as_shape(&circle).map(|shape| shape.bounding_box());
    assert_eq!(found, Some(Aabb::from_min_max(0.0, 0.0, 2.0, 2.0)));

    let not_a_shape = String::from("circle");
    assert!(as_shape(&not_a_shape).is_none());
}

#[test]
fn test_vector_rotation() {
    let forward = Vector::polar(0.0);
    assert_eq!(forward, Vector::new(1.0, 0.0));
    assert_eq!(forward.perp(), Vector::new(0.0, 1.0));

    let rotated = forward.rotate_deg(90.0);
    assert!((rotated.x - 0.0).abs() < 1e-6);
    assert!((rotated.y - 1.0).abs() < 1e-6);

    let diagonal = Vector::polar(std::f32::consts::FRAC_PI_4);
    assert!((diagonal.length2() - 1.0).abs() < 1e-6);
    assert!((diagonal.angle() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
}
