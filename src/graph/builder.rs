use std::{fmt, str::FromStr};

use crate::{core::GraphError, storage::AnyStorage};

use super::Graph;

/// Edge storage representation of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Bit-packed adjacency matrix, for dense graphs.
    #[default]
    Matrix,
    /// Adjacency list, for sparse graphs.
    List,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Matrix => "matrix",
            Backend::List => "list",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("matrix") {
            Ok(Backend::Matrix)
        } else if s.eq_ignore_ascii_case("list") {
            Ok(Backend::List)
        } else {
            Err(GraphError::UnknownBackend(s.to_owned()))
        }
    }
}

/// Parameters of a [`Graph`] fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Number of vertices, must be greater than zero.
    pub size: usize,
    pub directed: bool,
    pub backend: Backend,
}

impl GraphConfig {
    /// Undirected graph with matrix backend.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            directed: false,
            backend: Backend::default(),
        }
    }
}

/// Builder for [`Graph`], created by [`Graph::builder`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    pub(super) fn new(size: usize) -> Self {
        Self {
            config: GraphConfig::new(size),
        }
    }

    pub fn directed(self) -> Self {
        self.with_directed(true)
    }

    pub fn undirected(self) -> Self {
        self.with_directed(false)
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.config.directed = directed;
        self
    }

    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn build(self) -> Result<Graph<AnyStorage>, GraphError> {
        Graph::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn backend_from_str() {
        assert_eq!("matrix".parse(), Ok(Backend::Matrix));
        assert_eq!("List".parse(), Ok(Backend::List));
        assert_eq!("MATRIX".parse(), Ok(Backend::Matrix));
        assert_matches!(
            "hash".parse::<Backend>(),
            Err(GraphError::UnknownBackend(name)) if name == "hash"
        );
    }

    #[test]
    fn backend_display() {
        for backend in [Backend::Matrix, Backend::List] {
            assert_eq!(backend.to_string().parse(), Ok(backend));
        }
    }

    #[test]
    fn config_defaults() {
        let config = GraphConfig::new(8);

        assert_eq!(config.size, 8);
        assert!(!config.directed);
        assert_eq!(config.backend, Backend::Matrix);
    }

    #[test]
    fn builder() {
        let builder = Graph::builder(3).directed().backend(Backend::List);

        assert_eq!(
            builder.config(),
            &GraphConfig {
                size: 3,
                directed: true,
                backend: Backend::List
            }
        );
        assert!(!builder.undirected().config().directed);
    }
}
