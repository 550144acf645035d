use super::{DynamicAabb, LeafId, NodeKind, NodeStack};
use common::shapes::{Aabb, Shape};
use smallvec::smallvec;

impl<T> DynamicAabb<T> {
    /// Payloads whose stored box overlaps the bounding box of `shape`.
    ///
    /// This is a broad-phase answer: every overlapping leaf is reported, but
    /// the shape itself may still miss some of them.
    pub fn query_shape<S: Shape + ?Sized>(&self, shape: &S) -> Vec<&T> {
        self.query_aabb(&shape.bounding_box())
    }

    pub fn query_aabb(&self, aabb: &Aabb) -> Vec<&T> {
        let mut results = Vec::new();
        self.query_aabb_with(aabb, |_, payload| results.push(payload));
        results
    }

    /// Calls `f` for each leaf whose box overlaps `aabb`, depth first, never
    /// entering a subtree whose box misses it.
    pub fn query_aabb_with<'a, F>(&'a self, aabb: &Aabb, mut f: F)
    where
        F: FnMut(LeafId, &'a T),
    {
        let Some(root) = self.root else {
            return;
        };
        let mut stack: NodeStack = smallvec![root];
        while let Some(index) = stack.pop() {
            let node = self.node(index);
            if !node.aabb.intersects(aabb) {
                continue;
            }
            match &node.kind {
                NodeKind::Leaf { id, payload } => f(*id, payload),
                NodeKind::Internal { left, right } => {
                    stack.push(*left);
                    stack.push(*right);
                }
                NodeKind::Vacant => {}
            }
        }
    }
}
