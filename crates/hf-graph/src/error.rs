//! Graph-specific error types.

use hf_core::{HfError, NodeId, PipeId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two nodes share the same model identifier.
    DuplicateNode { key: String },

    /// Two pipes share the same model identifier.
    DuplicatePipe { key: String },

    /// A pipe endpoint names a node that doesn't exist.
    UnknownNodeRef { pipe: String, node: String },

    /// A pipe endpoint ID is out of range.
    InvalidNodeRef { pipe: PipeId, node: NodeId },

    /// Adjacency list is inconsistent (incidence doesn't match its pipe).
    InconsistentAdjacency { pipe: PipeId, node: NodeId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateNode { key } => write!(f, "Duplicate node id '{}'", key),
            GraphError::DuplicatePipe { key } => write!(f, "Duplicate pipe id '{}'", key),
            GraphError::UnknownNodeRef { pipe, node } => {
                write!(f, "Pipe '{}' refers to non-existent node '{}'", pipe, node)
            }
            GraphError::InvalidNodeRef { pipe, node } => {
                write!(f, "Pipe {} refers to out-of-range node {}", pipe, node)
            }
            GraphError::InconsistentAdjacency { pipe, node } => {
                write!(
                    f,
                    "Pipe {} in node {}'s adjacency list but doesn't touch that node",
                    pipe, node
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for HfError {
    fn from(err: GraphError) -> Self {
        HfError::Invariant {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_ends() {
        let err = GraphError::UnknownNodeRef {
            pipe: "p7".into(),
            node: "ghost".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("p7") && msg.contains("ghost"));
    }

    #[test]
    fn converts_to_invariant() {
        let hf: HfError = GraphError::DuplicateNode { key: "n".into() }.into();
        assert!(matches!(hf, HfError::Invariant { .. }));
    }
}
