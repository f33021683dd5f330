//! Graph validation logic.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Direction, Incidence, Node, Pipe};

/// Validate the graph structure: keys are unique and every pipe end exists.
pub(crate) fn validate_structure(nodes: &[Node], pipes: &[Pipe]) -> GraphResult<()> {
    let mut node_keys = HashSet::new();
    for node in nodes {
        if !node_keys.insert(node.key.as_str()) {
            return Err(GraphError::DuplicateNode {
                key: node.key.clone(),
            });
        }
    }

    let mut pipe_keys = HashSet::new();
    for pipe in pipes {
        if !pipe_keys.insert(pipe.key.as_str()) {
            return Err(GraphError::DuplicatePipe {
                key: pipe.key.clone(),
            });
        }

        for end in [pipe.from, pipe.to] {
            if end.slot() >= nodes.len() {
                return Err(GraphError::InvalidNodeRef {
                    pipe: pipe.id,
                    node: end,
                });
            }
        }
    }

    Ok(())
}

/// Validate adjacency lists for consistency.
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    pipes: &[Pipe],
    offsets: &[usize],
    incidences: &[Incidence],
) -> GraphResult<()> {
    if offsets.len() != nodes.len() + 1 || incidences.len() != pipes.len() * 2 {
        return Err(GraphError::InconsistentAdjacency {
            pipe: pipes.first().map_or(hf_core::Id::from_index(0), |p| p.id),
            node: nodes.first().map_or(hf_core::Id::from_index(0), |n| n.id),
        });
    }

    for node in nodes {
        let idx = node.id.slot();
        for inc in &incidences[offsets[idx]..offsets[idx + 1]] {
            let pipe = &pipes[inc.pipe.slot()];
            let consistent = match inc.direction {
                Direction::Forward => pipe.from == node.id && pipe.to == inc.neighbor,
                Direction::Backward => pipe.to == node.id && pipe.from == inc.neighbor,
            };
            if !consistent {
                return Err(GraphError::InconsistentAdjacency {
                    pipe: inc.pipe,
                    node: node.id,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::Id;

    fn node(i: u32, key: &str) -> Node {
        Node {
            id: Id::from_index(i),
            key: key.into(),
        }
    }

    #[test]
    fn validate_empty_graph() {
        assert!(validate_structure(&[], &[]).is_ok());
    }

    #[test]
    fn validate_invalid_node_ref() {
        let nodes = vec![node(0, "N1")];
        let pipes = vec![Pipe {
            id: Id::from_index(0),
            key: "P1".into(),
            from: Id::from_index(0),
            to: Id::from_index(99),
        }];

        let result = validate_structure(&nodes, &pipes);
        assert!(matches!(result, Err(GraphError::InvalidNodeRef { .. })));
    }

    #[test]
    fn validate_duplicate_pipe_key() {
        let nodes = vec![node(0, "a"), node(1, "b")];
        let pipe = |i| Pipe {
            id: Id::from_index(i),
            key: "dup".into(),
            from: Id::from_index(0),
            to: Id::from_index(1),
        };
        let result = validate_structure(&nodes, &[pipe(0), pipe(1)]);
        assert_eq!(result, Err(GraphError::DuplicatePipe { key: "dup".into() }));
    }

    #[test]
    fn validate_adjacency_detects_wrong_direction() {
        let nodes = vec![node(0, "a"), node(1, "b")];
        let pipes = vec![Pipe {
            id: Id::from_index(0),
            key: "ab".into(),
            from: Id::from_index(0),
            to: Id::from_index(1),
        }];
        let incidences = vec![
            Incidence {
                pipe: Id::from_index(0),
                neighbor: Id::from_index(1),
                direction: Direction::Backward,
            },
            Incidence {
                pipe: Id::from_index(0),
                neighbor: Id::from_index(0),
                direction: Direction::Backward,
            },
        ];
        let result = validate_adjacency(&nodes, &pipes, &[0, 1, 2], &incidences);
        assert!(result.is_err());
    }
}
