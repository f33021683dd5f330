//! hf-graph: network topology layer for hydroflow.
//!
//! Provides:
//! - Core graph data structures (Node, Pipe, Incidence, NetworkGraph)
//! - Incremental graph builder with validation
//! - Key lookup from model node identifiers to compact graph IDs
//!
//! # Example
//!
//! ```
//! use hf_graph::{Direction, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! let tank = builder.add_node("tank");
//! let pump = builder.add_node("pump");
//! builder.connect("p1", "tank", "pump").unwrap();
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.incident(tank)[0].direction, Direction::Forward);
//! assert_eq!(graph.incident(pump)[0].direction, Direction::Backward);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod indexing;
pub(crate) mod validate;

pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Direction, Incidence, NetworkGraph, Node, Pipe};
