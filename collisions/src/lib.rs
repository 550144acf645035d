//! Narrow-phase checks for the shapes stored in a broad phase, backed by parry2d.

use common::shapes::ShapeEnum;
use common::vector::Vector;
use nalgebra::{Isometry2, Point2, Vector2};
use parry2d::query::{self, Ray, RayCast, Unsupported};
use parry2d::shape::SharedShape;

pub struct ShapeWithPosition {
    pub shape: SharedShape,
    pub position: Isometry2<f32>,
}

impl ShapeWithPosition {
    /// Boxes and circles are placed at their center, segments at the origin.
    pub fn from_shape(shape: &ShapeEnum) -> Self {
        match shape {
            ShapeEnum::Aabb(aabb) => {
                let center = aabb.center();
                let extents = aabb.extents();
                ShapeWithPosition {
                    shape: SharedShape::cuboid(extents.x, extents.y),
                    position: Isometry2::translation(center.x, center.y),
                }
            }
            ShapeEnum::Circle(circle) => {
                let center = circle.center();
                ShapeWithPosition {
                    shape: SharedShape::ball(circle.radius()),
                    position: Isometry2::translation(center.x, center.y),
                }
            }
            ShapeEnum::Segment(segment) => ShapeWithPosition {
                shape: SharedShape::segment(to_point(segment.a), to_point(segment.b)),
                position: Isometry2::identity(),
            },
        }
    }

    /// Distance along the ray to the first point of the shape, zero when
    /// `origin` is already inside.
    pub fn cast_ray(&self, origin: Vector, direction: Vector, max_distance: f32) -> Option<f32> {
        let ray = Ray::new(to_point(origin), Vector2::new(direction.x, direction.y));
        self.shape.cast_ray(&self.position, &ray, max_distance, true)
    }

    pub fn intersects(&self, other: &ShapeWithPosition) -> Result<bool, Unsupported> {
        query::intersection_test(
            &self.position,
            &*self.shape,
            &other.position,
            &*other.shape,
        )
    }
}

fn to_point(v: Vector) -> Point2<f32> {
    Point2::new(v.x, v.y)
}

pub fn cast_ray(
    shape: &ShapeEnum,
    origin: Vector,
    direction: Vector,
    max_distance: f32,
) -> Option<f32> {
    ShapeWithPosition::from_shape(shape).cast_ray(origin, direction, max_distance)
}

pub fn intersects(a: &ShapeEnum, b: &ShapeEnum) -> Result<bool, Unsupported> {
    ShapeWithPosition::from_shape(a).intersects(&ShapeWithPosition::from_shape(b))
}

/// Raycast callback that reports the exact hit distance of each candidate's
/// shape, so the broad phase ends up returning the nearest one.
pub fn nearest_hit<T, F>(shape_of: F) -> impl FnMut(&T, Vector, Vector, f32) -> Option<f32>
where
    F: Fn(&T) -> &ShapeEnum,
{
    move |payload: &T, origin: Vector, direction: Vector, max_distance: f32| {
        cast_ray(shape_of(payload), origin, direction, max_distance)
    }
}
