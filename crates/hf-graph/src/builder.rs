//! Incremental graph builder.

use std::collections::HashMap;
use hf_core::{NodeId, PipeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Direction, Incidence, NetworkGraph, Node, Pipe};
use crate::indexing::KeyIndex;
use crate::validate;

/// Builder for constructing a network graph incrementally.
///
/// Use `add_node` and `connect`/`add_pipe` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `NetworkGraph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    pipes: Vec<Pipe>,
    lookup: HashMap<String, NodeId>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph and return its ID.
    pub fn add_node(&mut self, key: impl Into<String>) -> NodeId {
        let key = key.into();
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.lookup.entry(key.clone()).or_insert(id);
        self.nodes.push(Node { id, key });
        id
    }

    /// Add a pipe between two existing node IDs.
    pub fn add_pipe(&mut self, key: impl Into<String>, from: NodeId, to: NodeId) -> PipeId {
        let id = PipeId::from_index(self.pipes.len() as u32);
        self.pipes.push(Pipe {
            id,
            key: key.into(),
            from,
            to,
        });
        id
    }

    /// Add a pipe between two nodes named by their model keys.
    pub fn connect(
        &mut self,
        key: impl Into<String>,
        from_key: &str,
        to_key: &str,
    ) -> GraphResult<PipeId> {
        let key = key.into();
        let resolve = |node: &str| {
            self.lookup
                .get(node)
                .copied()
                .ok_or_else(|| GraphError::UnknownNodeRef {
                    pipe: key.clone(),
                    node: node.to_string(),
                })
        };
        let from = resolve(from_key)?;
        let to = resolve(to_key)?;
        Ok(self.add_pipe(key, from, to))
    }

    /// Build and validate the graph, returning an immutable `NetworkGraph`.
    pub fn build(self) -> GraphResult<NetworkGraph> {
        validate::validate_structure(&self.nodes, &self.pipes)?;

        let (offsets, incidences) = Self::build_adjacency(&self.nodes, &self.pipes);

        validate::validate_adjacency(&self.nodes, &self.pipes, &offsets, &incidences)?;

        let mut keys = KeyIndex::default();
        for node in &self.nodes {
            keys.insert_node(&node.key, node.id);
        }

        Ok(NetworkGraph {
            nodes: self.nodes,
            pipes: self.pipes,
            offsets,
            incidences,
            keys,
        })
    }

    /// Build compact adjacency lists: for each node, its incident pipes in definition order.
    fn build_adjacency(nodes: &[Node], pipes: &[Pipe]) -> (Vec<usize>, Vec<Incidence>) {
        let mut per_node: Vec<Vec<Incidence>> = vec![Vec::new(); nodes.len()];
        for pipe in pipes {
            per_node[pipe.from.slot()].push(Incidence {
                pipe: pipe.id,
                neighbor: pipe.to,
                direction: Direction::Forward,
            });
            per_node[pipe.to.slot()].push(Incidence {
                pipe: pipe.id,
                neighbor: pipe.from,
                direction: Direction::Backward,
            });
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat = Vec::with_capacity(pipes.len() * 2);
        offsets.push(0);
        for list in per_node {
            flat.extend(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node("Node1");
        let n2 = builder.add_node("Node2");
        let p1 = builder.add_pipe("P1", n1, n2);

        assert_eq!(n1.index(), 0);
        assert_eq!(n2.index(), 1);
        assert_eq!(p1.index(), 0);
        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.pipes.len(), 1);
    }

    #[test]
    fn connect_by_key() {
        let mut builder = GraphBuilder::new();
        builder.add_node("a");
        builder.add_node("b");
        let pipe = builder.connect("ab", "a", "b").unwrap();
        assert_eq!(builder.pipes[pipe.slot()].from.index(), 0);
        assert_eq!(builder.pipes[pipe.slot()].to.index(), 1);
    }

    #[test]
    fn connect_unknown_node_fails() {
        let mut builder = GraphBuilder::new();
        builder.add_node("a");
        let err = builder.connect("ax", "a", "x").unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownNodeRef {
                pipe: "ax".into(),
                node: "x".into()
            }
        );
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node("N1");
        let n2 = builder.add_node("N2");
        builder.add_pipe("P1", n1, n2);

        let graph = builder.build().unwrap();
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.pipes().len(), 1);

        let n1_adj = graph.incident(n1);
        assert_eq!(n1_adj.len(), 1);
        assert_eq!(n1_adj[0].direction, Direction::Forward);
        assert_eq!(n1_adj[0].neighbor, n2);

        let n2_adj = graph.incident(n2);
        assert_eq!(n2_adj.len(), 1);
        assert_eq!(n2_adj[0].direction, Direction::Backward);
        assert_eq!(n2_adj[0].neighbor, n1);
    }

    #[test]
    fn duplicate_node_key_rejected_at_build() {
        let mut builder = GraphBuilder::new();
        builder.add_node("same");
        builder.add_node("same");
        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::DuplicateNode { key: "same".into() }
        );
    }
}
