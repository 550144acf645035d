use crate::tree::LeafId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicAabbError {
    NotFound { id: LeafId },
    InvalidArgument { type_name: &'static str },
}

pub type DynamicAabbResult<T> = Result<T, DynamicAabbError>;

impl fmt::Display for DynamicAabbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicAabbError::NotFound { id } => {
                write!(f, "no live leaf with id {}", id)
            }
            DynamicAabbError::InvalidArgument { type_name } => {
                write!(
                    f,
                    "query object has no bounding box (type: {})",
                    type_name
                )
            }
        }
    }
}

impl std::error::Error for DynamicAabbError {}
