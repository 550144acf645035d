use crate::vector::Vector;
use std::any::Any;
use std::fmt::Debug;

pub trait Shape: Debug {
    fn bounding_box(&self) -> Aabb;
    fn as_any(&self) -> &dyn Any;
}

/// Axis-aligned box with `lo <= hi` on both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub lo: Vector,
    pub hi: Vector,
}

impl Aabb {
    pub fn new(lo: Vector, hi: Vector) -> Self {
        assert!(
            lo.x <= hi.x && lo.y <= hi.y,
            "invalid AABB: lo ({}, {}) > hi ({}, {})",
            lo.x,
            lo.y,
            hi.x,
            hi.y
        );
        Self { lo, hi }
    }

    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new(Vector::new(min_x, min_y), Vector::new(max_x, max_y))
    }

    /// Box spanning two arbitrary corners.
    pub fn from_corners(a: Vector, b: Vector) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    pub fn from_center_extents(center: Vector, extents: Vector) -> Self {
        let extents = extents.abs();
        Self {
            lo: center - extents,
            hi: center + extents,
        }
    }

    pub fn width(&self) -> f32 {
        self.hi.x - self.lo.x
    }

    pub fn height(&self) -> f32 {
        self.hi.y - self.lo.y
    }

    pub fn center(&self) -> Vector {
        (self.lo + self.hi) * 0.5
    }

    pub fn extents(&self) -> Vector {
        (self.hi - self.lo) * 0.5
    }

    /// Perimeter of the box, the cost measure for tree insertion.
    pub fn area(&self) -> f32 {
        2.0 * (self.width() + self.height())
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    pub fn contains(&self, point: Vector) -> bool {
        point.x >= self.lo.x && point.x <= self.hi.x && point.y >= self.lo.y && point.y <= self.hi.y
    }

    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        self.lo.x <= other.lo.x
            && self.lo.y <= other.lo.y
            && self.hi.x >= other.hi.x
            && self.hi.y >= other.hi.y
    }

    // Touching edges do not count as an overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.lo.x < other.hi.x
            && self.hi.x > other.lo.x
            && self.lo.y < other.hi.y
            && self.hi.y > other.lo.y
    }

    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        self.distance2(circle.center) < circle.radius * circle.radius
    }

    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        if !self.intersects(&segment.bounding_box()) {
            return false;
        }
        // Separating axis along the segment normal.
        let normal = (segment.b - segment.a).perp();
        let separation = normal.dot(segment.a - self.center()).abs() - normal.abs().dot(self.extents());
        separation <= 0.0
    }

    pub fn intersects_shape(&self, shape: &ShapeEnum) -> bool {
        match shape {
            ShapeEnum::Aabb(aabb) => self.intersects(aabb),
            ShapeEnum::Circle(circle) => self.intersects_circle(circle),
            ShapeEnum::Segment(segment) => self.intersects_segment(segment),
        }
    }

    /// Squared distance from `point` to the closest point of the box; zero inside.
    pub fn distance2(&self, point: Vector) -> f32 {
        let dx = f32::max(f32::max(self.lo.x - point.x, point.x - self.hi.x), 0.0);
        let dy = f32::max(f32::max(self.lo.y - point.y, point.y - self.hi.y), 0.0);
        dx * dx + dy * dy
    }

    pub fn distance(&self, point: Vector) -> f32 {
        self.distance2(point).sqrt()
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self {
            lo: Vector::ZERO,
            hi: Vector::ZERO,
        }
    }
}

impl Shape for Aabb {
    fn bounding_box(&self) -> Aabb {
        *self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Vector,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vector, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vector {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn update(&mut self, center: Vector) {
        self.center = center;
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Vector::ZERO,
            radius: 0.0,
        }
    }
}

impl Shape for Circle {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_center_extents(self.center, Vector::new(self.radius, self.radius))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub a: Vector,
    pub b: Vector,
}

impl Segment {
    pub fn new(a: Vector, b: Vector) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}

impl Shape for Segment {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_corners(self.a, self.b)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeEnum {
    Aabb(Aabb),
    Circle(Circle),
    Segment(Segment),
}

impl Shape for ShapeEnum {
    fn bounding_box(&self) -> Aabb {
        match self {
            ShapeEnum::Aabb(aabb) => aabb.bounding_box(),
            ShapeEnum::Circle(circle) => circle.bounding_box(),
            ShapeEnum::Segment(segment) => segment.bounding_box(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        match self {
            ShapeEnum::Aabb(aabb) => aabb.as_any(),
            ShapeEnum::Circle(circle) => circle.as_any(),
            ShapeEnum::Segment(segment) => segment.as_any(),
        }
    }
}

impl From<Aabb> for ShapeEnum {
    fn from(aabb: Aabb) -> Self {
        ShapeEnum::Aabb(aabb)
    }
}

impl From<Circle> for ShapeEnum {
    fn from(circle: Circle) -> Self {
        ShapeEnum::Circle(circle)
    }
}

impl From<Segment> for ShapeEnum {
    fn from(segment: Segment) -> Self {
        ShapeEnum::Segment(segment)
    }
}

/// Looks up the bounding-box capability of a dynamically typed value.
pub fn as_shape(object: &dyn Any) -> Option<&dyn Shape> {
    if let Some(aabb) = object.downcast_ref::<Aabb>() {
        return Some(aabb);
    }
    if let Some(circle) = object.downcast_ref::<Circle>() {
        return Some(circle);
    }
    if let Some(segment) = object.downcast_ref::<Segment>() {
        return Some(segment);
    }
    if let Some(shape) = object.downcast_ref::<ShapeEnum>() {
        return Some(shape);
    }
    None
}
