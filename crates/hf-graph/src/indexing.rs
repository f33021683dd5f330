//! Lookup from model identifiers to compact graph IDs.

use std::collections::HashMap;

use hf_core::NodeId;

/// Maps the string node keys of the model to dense IDs.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyIndex {
    node_ids: HashMap<String, NodeId>,
}

impl KeyIndex {
    /// Register a node key. Returns false if the key was already present.
    pub(crate) fn insert_node(&mut self, key: &str, id: NodeId) -> bool {
        self.node_ids.insert(key.to_string(), id).is_none()
    }

    pub(crate) fn node(&self, key: &str) -> Option<NodeId> {
        self.node_ids.get(key).copied()
    }
}
