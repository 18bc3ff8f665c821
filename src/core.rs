//! Core vocabulary shared by storages and algorithms.

pub mod error;
pub mod marker;

mod base;

pub use base::*;
pub use error::GraphError;
