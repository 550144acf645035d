//! Dynamic bounding-volume hierarchy over axis-aligned boxes.
//!
//! Every leaf holds one payload and its box; every internal node has exactly
//! two children and a box equal to the union of theirs. The tree reshapes
//! itself locally on every [`DynamicAabb::add`] and [`DynamicAabb::remove`]
//! and is never rebuilt as a whole.

use common::shapes::{as_shape, Aabb};
use fxhash::FxHashMap;
use log::debug;
use smallvec::{smallvec, SmallVec};
use std::any::Any;
use std::fmt;

mod config;
mod insert;
mod node;
mod query;
mod raycast;
mod remove;

pub use config::Config;
pub use node::NodeRef;

pub(crate) use node::{Node, NodeIndex, NodeKind};

/// Identifier handed out by [`DynamicAabb::add`]. Never reused.
pub type LeafId = u64;

pub(crate) type NodeStack = SmallVec<[NodeIndex; 64]>;

pub struct DynamicAabb<T> {
    root: Option<NodeIndex>,
    nodes: Vec<Node<T>>,
    free: Vec<NodeIndex>,
    leaves: FxHashMap<LeafId, NodeIndex>,
    next_id: LeafId,
    config: Config,
}

impl<T> DynamicAabb<T> {
    pub fn new() -> Self {
        Self::new_with_config(Config::default())
    }

    pub fn new_with_config(config: Config) -> Self {
        let mut leaves = FxHashMap::default();
        leaves.reserve(config.pool_size / 2 + 1);
        DynamicAabb {
            root: None,
            nodes: Vec::with_capacity(config.pool_size),
            free: Vec::new(),
            leaves,
            next_id: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, id: LeafId) -> bool {
        self.leaves.contains_key(&id)
    }

    pub fn get(&self, id: LeafId) -> Option<&T> {
        let index = *self.leaves.get(&id)?;
        match &self.node(index).kind {
            NodeKind::Leaf { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn aabb(&self, id: LeafId) -> Option<Aabb> {
        self.leaves.get(&id).map(|&index| self.node(index).aabb)
    }

    /// All live leaves in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (LeafId, &T, Aabb)> + '_ {
        self.leaves.values().filter_map(move |&index| {
            let node = self.node(index);
            match &node.kind {
                NodeKind::Leaf { id, payload } => Some((*id, payload, node.aabb)),
                _ => None,
            }
        })
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|index| NodeRef::new(self, index))
    }

    pub fn leaf(&self, id: LeafId) -> Option<NodeRef<'_, T>> {
        self.leaves.get(&id).map(|&index| NodeRef::new(self, index))
    }

    /// Number of nodes on the longest root-to-leaf path; zero when empty.
    pub fn height(&self) -> usize {
        match self.root {
            Some(root) => self.subtree_height(root),
            None => 0,
        }
    }

    pub(crate) fn subtree_height(&self, start: NodeIndex) -> usize {
        let mut height = 0;
        let mut stack: SmallVec<[(NodeIndex, usize); 64]> = smallvec![(start, 1)];
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            if let NodeKind::Internal { left, right } = self.node(index).kind {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Drops every leaf. Ids handed out afterwards keep increasing.
    pub fn clear(&mut self) {
        debug!("clearing tree with {} leaves", self.leaves.len());
        self.root = None;
        self.nodes.clear();
        self.free.clear();
        self.leaves.clear();
    }

    /// Bounding-box query for any value that is one of the known shape types.
    pub fn query_any<A: Any>(&self, object: &A) -> crate::DynamicAabbResult<Vec<&T>> {
        match as_shape(object) {
            Some(shape) => Ok(self.query_shape(shape)),
            None => {
                let type_name = std::any::type_name::<A>();
                debug!("query rejected, {} has no bounding box", type_name);
                Err(crate::DynamicAabbError::InvalidArgument { type_name })
            }
        }
    }

    pub(crate) fn node(&self, index: NodeIndex) -> &Node<T> {
        &self.nodes[index.get()]
    }

    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        &mut self.nodes[index.get()]
    }

    /// Recomputes boxes from `start` towards the root, stopping at the first
    /// node whose box does not change.
    pub(crate) fn refit_from(&mut self, start: NodeIndex) {
        let mut current = Some(start);
        while let Some(index) = current {
            let NodeKind::Internal { left, right } = self.node(index).kind else {
                break;
            };
            let refit = self.node(left).aabb.union(&self.node(right).aabb);
            let node = self.node_mut(index);
            if node.aabb == refit {
                break;
            }
            node.aabb = refit;
            current = node.parent;
        }
    }

    pub(crate) fn replace_child(&mut self, parent: NodeIndex, old: NodeIndex, new: NodeIndex) {
        if let NodeKind::Internal { left, right } = &mut self.node_mut(parent).kind {
            if *left == old {
                *left = new;
            } else {
                debug_assert!(*right == old);
                *right = new;
            }
        }
    }
}

impl<T: fmt::Debug> DynamicAabb<T> {
    /// Indented rendering of the tree, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let Some(root) = self.root else {
            return out;
        };
        let mut stack: SmallVec<[(NodeIndex, usize); 64]> = smallvec![(root, 0)];
        while let Some((index, indent)) = stack.pop() {
            let node = self.node(index);
            let aabb = node.aabb;
            let line = match &node.kind {
                NodeKind::Leaf { id, payload } => format!(
                    "Leaf({}, {:?}, ({}, {})-({}, {}))",
                    id, payload, aabb.lo.x, aabb.lo.y, aabb.hi.x, aabb.hi.y
                ),
                NodeKind::Internal { left, right } => {
                    stack.push((*right, indent + 2));
                    stack.push((*left, indent + 2));
                    format!(
                        "Node(({}, {})-({}, {}))",
                        aabb.lo.x, aabb.lo.y, aabb.hi.x, aabb.hi.y
                    )
                }
                NodeKind::Vacant => continue,
            };
            out.push_str(&" ".repeat(indent));
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl<T> Default for DynamicAabb<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DynamicAabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicAabb")
            .field("leaves", &self.leaves.len())
            .field("arena_nodes", &self.nodes.len())
            .field("free_nodes", &self.free.len())
            .field("next_id", &self.next_id)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}
