use crate::error::DynamicAabbResult;
use crate::tree::{DynamicAabb, LeafId};
use common::shapes::{Aabb, Shape};
use common::vector::Vector;

/// Callback type for [`BroadPhase::raycast`], see [`DynamicAabb::raycast`].
pub type RaycastCallback<'c, T> = dyn FnMut(&T, Vector, Vector, f32) -> Option<f32> + 'c;

/// Object-safe interface of a broad phase: store boxed payloads, hand back
/// candidates for a shape or a ray.
pub trait BroadPhase<T> {
    fn add(&mut self, payload: T, aabb: Aabb) -> LeafId;
    fn remove(&mut self, id: LeafId) -> DynamicAabbResult<T>;
    fn query_shape(&self, shape: &dyn Shape) -> Vec<&T>;
    fn raycast(
        &self,
        origin: Vector,
        direction: Vector,
        callback: &mut RaycastCallback<'_, T>,
        max_distance: f32,
    ) -> Option<&T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> BroadPhase<T> for DynamicAabb<T> {
    fn add(&mut self, payload: T, aabb: Aabb) -> LeafId {
        DynamicAabb::add(self, payload, aabb)
    }

    fn remove(&mut self, id: LeafId) -> DynamicAabbResult<T> {
        DynamicAabb::remove(self, id)
    }

    fn query_shape(&self, shape: &dyn Shape) -> Vec<&T> {
        DynamicAabb::query_shape(self, shape)
    }

    fn raycast(
        &self,
        origin: Vector,
        direction: Vector,
        callback: &mut RaycastCallback<'_, T>,
        max_distance: f32,
    ) -> Option<&T> {
        DynamicAabb::raycast(self, origin, direction, callback, max_distance)
    }

    fn len(&self) -> usize {
        DynamicAabb::len(self)
    }
}
