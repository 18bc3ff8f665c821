use super::{error::GraphError, marker::Direction};

/// The capability set of an edge storage over a fixed number of vertices.
///
/// Vertices are the integers in `0..vertex_count()`; they are never added or
/// removed after construction. Undirected storages keep every edge
/// symmetric, so `has_edge(a, b) == has_edge(b, a)` holds at all times.
///
/// The order of [`neighbors_directed`](GraphStorage::neighbors_directed) is
/// part of the contract: algorithms are deterministic because of it.
pub trait GraphStorage {
    type NeighborsIter<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Number of edges. An undirected edge counts once.
    fn edge_count(&self) -> usize;

    /// Inserts the edge (and its mirror in undirected storage).
    ///
    /// Returns `true` if the edge was not present before.
    fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError>;

    /// Removes the edge (and its mirror in undirected storage).
    ///
    /// Returns `true` if the edge was present.
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError>;

    fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError>;

    /// Returns the neighbors of the vertex in given direction.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is out of range. Use
    /// [`out_edges`](GraphStorage::out_edges) or
    /// [`in_edges`](GraphStorage::in_edges) for a checked variant.
    fn neighbors_directed(&self, vertex: usize, dir: Direction) -> Self::NeighborsIter<'_>;

    fn clear_edges(&mut self);

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.vertex_count()))
        }
    }

    fn out_edges(&self, from: usize) -> Result<Self::NeighborsIter<'_>, GraphError> {
        self.check_vertex(from)?;
        Ok(self.neighbors_directed(from, Direction::Outgoing))
    }

    fn in_edges(&self, to: usize) -> Result<Self::NeighborsIter<'_>, GraphError> {
        self.check_vertex(to)?;
        Ok(self.neighbors_directed(to, Direction::Incoming))
    }

    fn degree_directed(&self, vertex: usize, dir: Direction) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.neighbors_directed(vertex, dir).count())
    }
}
