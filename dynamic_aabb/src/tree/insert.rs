use super::{DynamicAabb, LeafId, Node, NodeIndex, NodeKind};
use common::shapes::Aabb;
use log::trace;

/// Child of the node being considered as an insertion point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Child {
    pub(crate) aabb: Aabb,
    pub(crate) is_leaf: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Descent {
    /// Pair the new box with the current node.
    Here,
    Left,
    Right,
}

/// Decides where a new `aabb` goes relative to the internal node `parent`.
///
/// Pairing with `parent` costs twice its area. Going down either branch costs
/// the area that branch would grow to, plus twice the growth `parent` suffers
/// anyway; an internal child is credited its current area. Ties go right.
pub(crate) fn choose_descent(parent: &Aabb, left: Child, right: Child, aabb: &Aabb) -> Descent {
    let area = parent.area();
    let combined_area = parent.union(aabb).area();
    let cost_parent = 2.0 * area;
    let cost_descend = 2.0 * (combined_area - area);

    let cost_left = child_cost(left, aabb, cost_descend);
    let cost_right = child_cost(right, aabb, cost_descend);

    if cost_left >= cost_parent && cost_right >= cost_parent {
        Descent::Here
    } else if cost_left < cost_right {
        Descent::Left
    } else {
        Descent::Right
    }
}

fn child_cost(child: Child, aabb: &Aabb, cost_descend: f32) -> f32 {
    let cost = child.aabb.union(aabb).area() + cost_descend;
    if child.is_leaf {
        cost
    } else {
        cost - child.aabb.area()
    }
}

impl<T> DynamicAabb<T> {
    /// Inserts `payload` with its bounding box and returns the new leaf id.
    pub fn add(&mut self, payload: T, aabb: Aabb) -> LeafId {
        let id = self.next_id;
        self.next_id += 1;
        let leaf = self.alloc(Node::leaf(id, payload, aabb));
        self.leaves.insert(id, leaf);

        let Some(root) = self.root else {
            self.root = Some(leaf);
            trace!("add: leaf {} becomes the root", id);
            return id;
        };

        let sibling = self.find_insertion_point(root, &aabb);
        let old_parent = self.node(sibling).parent;
        let combined = self.node(sibling).aabb.union(&aabb);
        let branch = self.alloc(Node::internal(sibling, leaf, combined));
        self.node_mut(branch).parent = old_parent;
        self.node_mut(sibling).parent = Some(branch);
        self.node_mut(leaf).parent = Some(branch);

        match old_parent {
            None => self.root = Some(branch),
            Some(parent) => {
                self.replace_child(parent, sibling, branch);
                self.refit_from(parent);
            }
        }
        trace!("add: leaf {} paired under node {}", id, branch.get());
        id
    }

    fn find_insertion_point(&self, root: NodeIndex, aabb: &Aabb) -> NodeIndex {
        let mut current = root;
        while let NodeKind::Internal { left, right } = self.node(current).kind {
            let descent = choose_descent(
                &self.node(current).aabb,
                self.child(left),
                self.child(right),
                aabb,
            );
            current = match descent {
                Descent::Here => break,
                Descent::Left => left,
                Descent::Right => right,
            };
        }
        current
    }

    fn child(&self, index: NodeIndex) -> Child {
        let node = self.node(index);
        Child {
            aabb: node.aabb,
            is_leaf: !matches!(node.kind, NodeKind::Internal { .. }),
        }
    }
}
