use super::{DynamicAabb, LeafId, NodeIndex, NodeKind};
use crate::error::{DynamicAabbError, DynamicAabbResult};
use log::{debug, trace};

impl<T> DynamicAabb<T> {
    /// Removes the leaf `id` and hands its payload back.
    ///
    /// The leaf's parent goes away with it and the sibling takes the parent's
    /// place; boxes above are refit until one comes out unchanged.
    pub fn remove(&mut self, id: LeafId) -> DynamicAabbResult<T> {
        let Some(leaf) = self.leaves.remove(&id) else {
            debug!("remove: no live leaf with id {}", id);
            return Err(DynamicAabbError::NotFound { id });
        };

        let parent = self.node(leaf).parent;
        let payload = match self.release(leaf).kind {
            NodeKind::Leaf { payload, .. } => payload,
            _ => unreachable!("leaf table points at a non-leaf node"),
        };

        let Some(parent) = parent else {
            self.root = None;
            self.reset_arena_if_empty();
            trace!("remove: leaf {} was the root", id);
            return Ok(payload);
        };

        let sibling = self.sibling_of(parent, leaf);
        let grandparent = self.release(parent).parent;
        self.node_mut(sibling).parent = grandparent;

        match grandparent {
            None => self.root = Some(sibling),
            Some(grandparent) => {
                self.replace_child(grandparent, parent, sibling);
                self.refit_from(grandparent);
            }
        }
        trace!("remove: leaf {} detached, node {} promoted", id, sibling.get());
        Ok(payload)
    }

    fn sibling_of(&self, parent: NodeIndex, child: NodeIndex) -> NodeIndex {
        match self.node(parent).kind {
            NodeKind::Internal { left, right } if left == child => right,
            NodeKind::Internal { left, .. } => left,
            _ => unreachable!("parent link points at a non-internal node"),
        }
    }

    fn reset_arena_if_empty(&mut self) {
        if self.leaves.is_empty() {
            self.nodes.clear();
            self.free.clear();
        }
    }
}
