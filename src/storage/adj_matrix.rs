use bitvec::{order::Lsb0, slice::IterOnes};

use crate::{
    common::{bit_matrix::ColumnOnes, BitMatrix},
    core::{marker::Direction, GraphError, GraphStorage},
};

/// Dense edge storage packing one row of `size` bits per vertex.
///
/// Undirected edges set both `(from, to)` and `(to, from)` bits, so the
/// matrix is always symmetric for undirected storages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    matrix: BitMatrix,
    directed: bool,
    n_edges: usize,
}

impl AdjMatrix {
    pub fn new(size: usize, directed: bool) -> Self {
        Self {
            matrix: BitMatrix::new(size),
            directed,
            n_edges: 0,
        }
    }

    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    fn check_edge(&self, from: usize, to: usize) -> Result<(usize, usize), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok((
            self.matrix.index(from, to),
            self.matrix.index(to, from),
        ))
    }
}

impl GraphStorage for AdjMatrix {
    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.matrix.size()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError> {
        let (index, mirror) = self.check_edge(from, to)?;

        if self.matrix.set(index) {
            return Ok(false);
        }

        if !self.directed {
            self.matrix.set(mirror);
        }

        self.n_edges += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError> {
        let (index, mirror) = self.check_edge(from, to)?;

        if !self.matrix.clear(index) {
            return Ok(false);
        }

        if !self.directed {
            self.matrix.clear(mirror);
        }

        self.n_edges -= 1;
        Ok(true)
    }

    fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        let (index, _) = self.check_edge(from, to)?;
        Ok(self.matrix.get(index))
    }

    fn neighbors_directed(&self, vertex: usize, dir: Direction) -> Self::NeighborsIter<'_> {
        assert!(vertex < self.vertex_count(), "vertex does not exist");

        // The matrix is symmetric in undirected graphs, scanning the row is
        // cheaper.
        match (dir, self.directed) {
            (Direction::Incoming, true) => NeighborsIter::Column(self.matrix.column_ones(vertex)),
            _ => NeighborsIter::Row(self.matrix.row_ones(vertex)),
        }
    }

    fn clear_edges(&mut self) {
        self.matrix.clear_all();
        self.n_edges = 0;
    }
}

/// Neighbors in ascending order of vertex IDs.
pub enum NeighborsIter<'a> {
    Row(IterOnes<'a, usize, Lsb0>),
    Column(ColumnOnes<'a>),
}

impl Iterator for NeighborsIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            NeighborsIter::Row(ones) => ones.next(),
            NeighborsIter::Column(ones) => ones.next(),
        }
    }
}
