use super::{DynamicAabb, LeafId};
use common::shapes::Aabb;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(u32);

impl NodeIndex {
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    pub(crate) fn get(self) -> usize {
        self.0 as usize
    }
}

pub(crate) enum NodeKind<T> {
    Leaf { id: LeafId, payload: T },
    Internal { left: NodeIndex, right: NodeIndex },
    // Arena slot waiting on the free list.
    Vacant,
}

pub(crate) struct Node<T> {
    pub(crate) aabb: Aabb,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) kind: NodeKind<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(id: LeafId, payload: T, aabb: Aabb) -> Self {
        Self {
            aabb,
            parent: None,
            kind: NodeKind::Leaf { id, payload },
        }
    }

    pub(crate) fn internal(left: NodeIndex, right: NodeIndex, aabb: Aabb) -> Self {
        Self {
            aabb,
            parent: None,
            kind: NodeKind::Internal { left, right },
        }
    }

    fn vacant() -> Self {
        Self {
            aabb: Aabb::default(),
            parent: None,
            kind: NodeKind::Vacant,
        }
    }
}

impl<T> DynamicAabb<T> {
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeIndex {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index.get()] = node;
                index
            }
            None => {
                let index = NodeIndex::new(self.nodes.len());
                self.nodes.push(node);
                index
            }
        }
    }

    /// Takes the node out of the arena and puts its slot on the free list.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Node<T> {
        let node = std::mem::replace(&mut self.nodes[index.get()], Node::vacant());
        self.free.push(index);
        node
    }
}

/// Read-only handle on a node of a [`DynamicAabb`].
pub struct NodeRef<'a, T> {
    tree: &'a DynamicAabb<T>,
    index: NodeIndex,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a DynamicAabb<T>, index: NodeIndex) -> Self {
        Self { tree, index }
    }

    fn node(&self) -> &'a Node<T> {
        self.tree.node(self.index)
    }

    pub fn aabb(&self) -> Aabb {
        self.node().aabb
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node().kind, NodeKind::Leaf { .. })
    }

    pub fn leaf_id(&self) -> Option<LeafId> {
        match self.node().kind {
            NodeKind::Leaf { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<&'a T> {
        match &self.node().kind {
            NodeKind::Leaf { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// `(left, right)` for internal nodes.
    pub fn children(&self) -> Option<(NodeRef<'a, T>, NodeRef<'a, T>)> {
        match self.node().kind {
            NodeKind::Internal { left, right } => Some((
                NodeRef::new(self.tree, left),
                NodeRef::new(self.tree, right),
            )),
            _ => None,
        }
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node()
            .parent
            .map(|index| NodeRef::new(self.tree, index))
    }

    pub fn height(&self) -> usize {
        self.tree.subtree_height(self.index)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T> std::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index.get())
            .field("aabb", &self.aabb())
            .field("leaf_id", &self.leaf_id())
            .finish()
    }
}
