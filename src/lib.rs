//! Graphs over a fixed number of vertices with interchangeable edge storages
//! and deterministic traversal algorithms.
//!
//! Vertices are the integers `0..size`. Edges are kept either in a bit-packed
//! [adjacency matrix](storage::AdjMatrix) or an [adjacency
//! list](storage::AdjList), both implementing the
//! [`GraphStorage`](core::GraphStorage) capability set. Traversals and
//! algorithms are written once against that trait and mark vertices in an
//! explicit, resettable [`ColorTracker`](visit::ColorTracker).
//!
//! # Examples
//!
//! ```
//! use bitgraph::prelude::*;
//!
//! let mut graph = Graph::new_directed(6)?;
//! graph.extend_with_edges([(0, 1), (0, 2), (0, 3), (2, 4), (2, 5)])?;
//!
//! let dfs = graph.traverse().dfs().run()?.collect::<Vec<_>>();
//! assert_eq!(dfs, vec![0, 3, 2, 5, 4, 1]);
//!
//! graph.reset_colors();
//!
//! assert!(graph.is_acyclic());
//! graph.add_edge(1, 0)?;
//! assert!(!graph.is_acyclic());
//! # Ok::<(), bitgraph::core::GraphError>(())
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    pub use crate::{
        core::{GraphError, GraphStorage},
        graph::{Backend, Graph},
        visit::{Color, Visitor},
    };
}
