pub mod broad_phase;
pub mod error;
pub mod tree;

pub use broad_phase::BroadPhase;
pub use common::{shapes, vector};
pub use error::{DynamicAabbError, DynamicAabbResult};
pub use tree::{Config, DynamicAabb, LeafId, NodeRef};
