//! The [`Graph`] encapsulation of an edge storage and its vertex colors.
//!
//! # Examples
//!
//! ```
//! use bitgraph::graph::{Backend, Graph};
//!
//! let mut graph = Graph::builder(6).directed().backend(Backend::List).build()?;
//!
//! graph
//!     .add_edge(0, 1)?
//!     .add_edge(0, 2)?
//!     .add_edge(0, 3)?
//!     .add_edge(2, 4)?
//!     .add_edge(2, 5)?;
//!
//! let bfs = graph.traverse().run()?.collect::<Vec<_>>();
//! assert_eq!(bfs, vec![0, 1, 2, 3, 4, 5]);
//! assert!(graph.is_black(5)?);
//!
//! graph.reset_colors();
//!
//! assert_eq!(graph.path(0, 5)?, vec![0, 2, 5]);
//! assert_eq!(graph.topological_sort(), vec![0, 3, 2, 5, 4, 1]);
//! # Ok::<(), bitgraph::core::GraphError>(())
//! ```

mod builder;

pub use builder::{Backend, GraphBuilder, GraphConfig};

use tracing::{debug, trace};

use crate::{
    algo,
    core::{marker::Direction, GraphError, GraphStorage},
    storage::AnyStorage,
    visit::{Color, ColorTracker, DfsEvents, IntoIter, Traversal, TraversalBuilder, Visitor},
};

/// Graph over a fixed number of vertices owning its edge storage and the
/// [colors](ColorTracker) of its vertices.
///
/// Edge mutations never touch the colors. Traversals leave the colors as
/// they are after the run, so the caller can inspect which vertices were
/// reached and must [reset](Graph::reset_colors) them before traversing
/// again. Algorithms that need a clean state reset the colors themselves.
#[derive(Debug, Clone)]
pub struct Graph<S = AnyStorage> {
    storage: S,
    colors: ColorTracker,
}

impl Graph<AnyStorage> {
    /// Creates a graph without edges.
    ///
    /// Fails if the size is zero.
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        let GraphConfig {
            size,
            directed,
            backend,
        } = config;

        if size == 0 {
            return Err(GraphError::ZeroSize);
        }

        debug!(size, directed, %backend, "creating graph");
        Ok(Self::from_storage(AnyStorage::new(size, directed, backend)))
    }

    pub fn builder(size: usize) -> GraphBuilder {
        GraphBuilder::new(size)
    }

    pub fn new_directed(size: usize) -> Result<Self, GraphError> {
        Self::builder(size).directed().build()
    }

    pub fn new_undirected(size: usize) -> Result<Self, GraphError> {
        Self::builder(size).undirected().build()
    }

    pub fn backend(&self) -> Backend {
        self.storage.backend()
    }
}

impl<S> From<S> for Graph<S>
where
    S: GraphStorage,
{
    fn from(storage: S) -> Self {
        Self::from_storage(storage)
    }
}

impl<S> Graph<S>
where
    S: GraphStorage,
{
    pub fn from_storage(storage: S) -> Self {
        let colors = ColorTracker::new(storage.vertex_count());
        Self { storage, colors }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.storage.vertex_count()
    }

    pub fn is_directed(&self) -> bool {
        self.storage.is_directed()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Adds an edge, a no-op if the edge already exists.
    ///
    /// Returns the graph to allow chaining.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<&mut Self, GraphError> {
        let added = self.storage.add_edge(from, to)?;
        trace!(from, to, added, "add edge");
        Ok(self)
    }

    /// Removes an edge, a no-op if the edge does not exist.
    ///
    /// Returns the graph to allow chaining.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<&mut Self, GraphError> {
        let removed = self.storage.remove_edge(from, to)?;
        trace!(from, to, removed, "remove edge");
        Ok(self)
    }

    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        self.storage.has_edge(from, to)
    }

    /// Adds all edges from the iterator.
    ///
    /// Stops at the first edge with an endpoint out of range. The edges added
    /// before it are kept.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to)?;
        }

        Ok(())
    }

    /// Successors of the vertex, in the storage order.
    pub fn out_edges(&self, from: usize) -> Result<S::NeighborsIter<'_>, GraphError> {
        self.storage.out_edges(from)
    }

    /// Predecessors of the vertex, in the storage order.
    pub fn in_edges(&self, to: usize) -> Result<S::NeighborsIter<'_>, GraphError> {
        self.storage.in_edges(to)
    }

    pub fn edge_count(&self) -> usize {
        self.storage.edge_count()
    }

    pub fn degree_directed(&self, vertex: usize, dir: Direction) -> Result<usize, GraphError> {
        self.storage.degree_directed(vertex, dir)
    }

    /// Removes all edges. The colors are not touched.
    pub fn clear_edges(&mut self) {
        debug!(edges = self.storage.edge_count(), "clearing edges");
        self.storage.clear_edges();
    }

    pub fn colors(&self) -> &ColorTracker {
        &self.colors
    }

    /// Gives direct access to the colors, e.g., to exclude vertices from a
    /// traversal by marking them black.
    pub fn colors_mut(&mut self) -> &mut ColorTracker {
        &mut self.colors
    }

    pub fn color(&self, vertex: usize) -> Result<Color, GraphError> {
        self.colors.color(vertex)
    }

    pub fn is_black(&self, vertex: usize) -> Result<bool, GraphError> {
        self.colors.is_black(vertex)
    }

    /// Turns all vertices white.
    pub fn reset_colors(&mut self) {
        self.colors.reset();
    }

    /// Creates a builder of a lazy traversal using the graph's colors.
    ///
    /// The traversal is breadth-first from vertex `0`, reporting vertices when
    /// visited, unless configured otherwise.
    pub fn traverse(&mut self) -> TraversalBuilder<'_, S> {
        Traversal::on(&self.storage, &mut self.colors)
    }

    /// Lazy depth-first search over all white vertices reporting
    /// [events](crate::visit::DfsEvent), using the graph's colors.
    pub fn dfs_events(&mut self) -> IntoIter<'_, DfsEvents, S> {
        DfsEvents::start_all(&self.storage).into_iter(&self.storage, &mut self.colors)
    }

    /// Returns the shortest path from `from` to `to`, or an empty vector if
    /// there is none.
    ///
    /// See [`shortest_path`](algo::shortest_path). The graph's colors are not
    /// used.
    pub fn path(&self, from: usize, to: usize) -> Result<Vec<usize>, GraphError> {
        algo::shortest_path(&self.storage, from, to)
    }

    /// See [`find_cycle`](algo::find_cycle). The colors are white afterwards.
    pub fn find_cycle(&mut self) -> Option<(usize, usize)> {
        algo::find_cycle(&self.storage, &mut self.colors)
    }

    /// See [`is_acyclic`](algo::is_acyclic). The colors are white afterwards.
    pub fn is_acyclic(&mut self) -> bool {
        algo::is_acyclic(&self.storage, &mut self.colors)
    }

    /// Returns the vertices in a topological order if the graph is acyclic.
    ///
    /// On a cyclic graph, the result is not a valid topological order, check
    /// with [`is_acyclic`](Graph::is_acyclic) first or use
    /// [`try_topological_sort`](Graph::try_topological_sort). The colors are
    /// white afterwards.
    pub fn topological_sort(&mut self) -> Vec<usize> {
        algo::toposort(&self.storage, &mut self.colors)
    }

    /// See [`try_toposort`](algo::try_toposort). The colors are white
    /// afterwards.
    pub fn try_topological_sort(&mut self) -> Result<Vec<usize>, GraphError> {
        algo::try_toposort(&self.storage, &mut self.colors)
    }
}
