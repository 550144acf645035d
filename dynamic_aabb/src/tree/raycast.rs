use super::{DynamicAabb, NodeKind, NodeStack};
use common::shapes::Aabb;
use common::vector::Vector;
use smallvec::smallvec;

impl<T> DynamicAabb<T> {
    /// Walks every leaf whose box may lie on the segment from `origin` along
    /// `direction` for `max_distance`, and lets `callback` decide what a hit is.
    ///
    /// The callback gets the payload, the ray and the current search distance:
    /// - `None` skips the leaf,
    /// - `Some(0.0)` takes the leaf and stops the traversal,
    /// - `Some(d)` with `d > 0` takes the leaf and shortens the search to `d`.
    ///
    /// The last leaf taken is returned. Returning the exact hit distance from
    /// the callback turns this into a nearest-hit search.
    ///
    /// # Panics
    /// Panics if `direction` is not a unit vector.
    pub fn raycast<F>(
        &self,
        origin: Vector,
        direction: Vector,
        mut callback: F,
        max_distance: f32,
    ) -> Option<&T>
    where
        F: FnMut(&T, Vector, Vector, f32) -> Option<f32>,
    {
        let length2 = direction.length2();
        assert!(
            (length2 - 1.0).abs() < self.config.unit_tolerance,
            "raycast direction must be a unit vector (length2: {})",
            length2
        );

        let root = self.root?;

        let v = direction.perp();
        let abs_v = v.abs();
        let mut max_distance = max_distance;
        let mut segment = segment_bounds(origin, direction, max_distance);

        let mut best = None;
        let mut stack: NodeStack = smallvec![root];
        while let Some(index) = stack.pop() {
            let node = self.node(index);
            if !node.aabb.intersects(&segment) {
                continue;
            }
            // Separating axis for segment (Gino, p80): |dot(v, p1 - c)| > dot(|v|, h)
            let c = node.aabb.center();
            let h = node.aabb.extents();
            let separation = v.dot(origin - c).abs() - abs_v.dot(h);
            if separation > 0.0 {
                continue;
            }
            match &node.kind {
                NodeKind::Internal { left, right } => {
                    stack.push(*left);
                    stack.push(*right);
                }
                NodeKind::Leaf { payload, .. } => {
                    let Some(value) = callback(payload, origin, direction, max_distance) else {
                        continue;
                    };
                    best = Some(payload);
                    if value == 0.0 {
                        return best;
                    }
                    if value > 0.0 {
                        max_distance = value;
                        segment = segment_bounds(origin, direction, max_distance);
                    }
                }
                NodeKind::Vacant => {}
            }
        }
        best
    }
}

/// Box around the segment `origin + direction * t` for `t` in `[0, distance]`.
/// Axes the ray does not move along stay at `origin`, even for an infinite distance.
fn segment_bounds(origin: Vector, direction: Vector, distance: f32) -> Aabb {
    let advance = |start: f32, step: f32| {
        if step == 0.0 {
            start
        } else {
            start + step * distance
        }
    };
    let end = Vector::new(advance(origin.x, direction.x), advance(origin.y, direction.y));
    Aabb::from_corners(origin, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_bounds_stay_finite_off_axis() {
        let bounds = segment_bounds(Vector::new(1.0, 2.0), Vector::new(-1.0, 0.0), f32::INFINITY);
        assert_eq!(bounds.lo, Vector::new(f32::NEG_INFINITY, 2.0));
        assert_eq!(bounds.hi, Vector::new(1.0, 2.0));
    }

    #[test]
    fn segment_bounds_follow_direction() {
        let bounds = segment_bounds(Vector::new(0.0, 0.0), Vector::new(0.6, -0.8), 10.0);
        assert_eq!(bounds, Aabb::from_min_max(0.0, -8.0, 6.0, 0.0));
    }
}
