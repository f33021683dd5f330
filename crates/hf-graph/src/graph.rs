//! Core graph data structures.

use hf_core::{NodeId, PipeId};

use crate::indexing::KeyIndex;

/// Orientation of a pipe relative to one of its end nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The pipe was defined as leaving this node (`from` == node).
    Forward,
    /// The pipe was defined as arriving at this node.
    Backward,
}

/// A node in the network graph.
///
/// Graph nodes carry topology only; elevations, kinds and pressures live in
/// the model and solver layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub key: String,
}

/// A pipe joining two nodes, oriented as it was defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipe {
    pub id: PipeId,
    pub key: String,
    pub from: NodeId,
    pub to: NodeId,
}

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    pub pipe: PipeId,
    pub neighbor: NodeId,
    pub direction: Direction,
}

/// The graph: a validated, immutable collection of nodes and pipes.
///
/// Adjacency is bidirectional: every pipe appears in the list of both of its
/// end nodes, tagged `Forward` at its `from` end and `Backward` at its `to` end.
/// Within a node, incidences keep pipe definition order.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) pipes: Vec<Pipe>,

    /// node i's incidences are in incidences[offsets[i]..offsets[i+1]].
    pub(crate) offsets: Vec<usize>,
    pub(crate) incidences: Vec<Incidence>,

    pub(crate) keys: KeyIndex,
}

impl NetworkGraph {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    pub fn node_by_key(&self, key: &str) -> Option<NodeId> {
        self.keys.node(key)
    }

    /// All pipes touching `node`, in definition order.
    pub fn incident(&self, node: NodeId) -> &[Incidence] {
        let idx = node.slot();
        if idx >= self.nodes.len() {
            return &[];
        }
        &self.incidences[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Pipes leaving `node` as defined.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Incidence> + '_ {
        self.incident(node)
            .iter()
            .filter(|inc| inc.direction == Direction::Forward)
    }

    /// Pipes arriving at `node` as defined.
    pub fn incoming(&self, node: NodeId) -> impl Iterator<Item = &Incidence> + '_ {
        self.incident(node)
            .iter()
            .filter(|inc| inc.direction == Direction::Backward)
    }
}
