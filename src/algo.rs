//! Algorithms built on top of the [visitors](crate::visit).
//!
//! All algorithms are written against [`GraphStorage`](crate::core::GraphStorage)
//! only. Those that need a [`ColorTracker`](crate::visit::ColorTracker) take
//! it explicitly and leave it white when they return.

pub mod cycle;
pub mod shortest_path;
pub mod toposort;

pub use cycle::{find_cycle, is_acyclic};
pub use shortest_path::shortest_path;
pub use toposort::{toposort, try_toposort};
