use std::{iter::Copied, slice};

use crate::core::{marker::Direction, GraphError, GraphStorage};

/// Sparse edge storage keeping an ordered neighbor list per vertex.
///
/// Neighbors are reported in the order in which the edges were successfully
/// added. Directed storages maintain a reverse index for incoming neighbors;
/// undirected storages record each edge in the lists of both endpoints
/// (a self-loop just once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList {
    // [outgoing, incoming] per vertex, incoming is unused when undirected.
    edges: Vec<[Vec<usize>; 2]>,
    directed: bool,
    n_edges: usize,
}

impl AdjList {
    pub fn new(size: usize, directed: bool) -> Self {
        Self {
            edges: vec![[Vec::new(), Vec::new()]; size],
            directed,
            n_edges: 0,
        }
    }

    fn list(&self, vertex: usize, dir: Direction) -> &[usize] {
        let dir = if self.directed {
            dir
        } else {
            Direction::Outgoing
        };

        &self.edges[vertex][dir.index()]
    }

    fn connect(&mut self, vertex: usize, dir: Direction, other: usize) {
        self.edges[vertex][dir.index()].push(other);
    }

    fn disconnect(&mut self, vertex: usize, dir: Direction, other: usize) {
        let edges = &mut self.edges[vertex][dir.index()];

        // Keep the remaining neighbors in insertion order.
        if let Some(i) = edges.iter().position(|&v| v == other) {
            edges.remove(i);
        }
    }
}

impl GraphStorage for AdjList {
    type NeighborsIter<'a> = Copied<slice::Iter<'a, usize>>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if self.list(from, Direction::Outgoing).contains(&to) {
            return Ok(false);
        }

        self.connect(from, Direction::Outgoing, to);

        if self.directed {
            self.connect(to, Direction::Incoming, from);
        } else if from != to {
            self.connect(to, Direction::Outgoing, from);
        }

        self.n_edges += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if !self.list(from, Direction::Outgoing).contains(&to) {
            return Ok(false);
        }

        self.disconnect(from, Direction::Outgoing, to);

        if self.directed {
            self.disconnect(to, Direction::Incoming, from);
        } else if from != to {
            self.disconnect(to, Direction::Outgoing, from);
        }

        self.n_edges -= 1;
        Ok(true)
    }

    fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.list(from, Direction::Outgoing).contains(&to))
    }

    fn neighbors_directed(&self, vertex: usize, dir: Direction) -> Self::NeighborsIter<'_> {
        assert!(vertex < self.vertex_count(), "vertex does not exist");
        self.list(vertex, dir).iter().copied()
    }

    fn clear_edges(&mut self) {
        for [outgoing, incoming] in self.edges.iter_mut() {
            outgoing.clear();
            incoming.clear();
        }
        self.n_edges = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::*;

    #[test]
    fn basic_undirected() {
        test_basic(AdjList::new(4, false));
    }

    #[test]
    fn basic_directed() {
        test_basic(AdjList::new(4, true));
    }

    #[test]
    fn neighbors_order_undirected() {
        test_neighbors_order(AdjList::new(6, false));
    }

    #[test]
    fn neighbors_order_directed() {
        test_neighbors_order(AdjList::new(6, true));
    }

    #[test]
    fn self_loop_undirected() {
        test_self_loop(AdjList::new(3, false));
    }

    #[test]
    fn self_loop_directed() {
        test_self_loop(AdjList::new(3, true));
    }

    #[test]
    fn out_of_range_undirected() {
        test_out_of_range(AdjList::new(3, false));
    }

    #[test]
    fn out_of_range_directed() {
        test_out_of_range(AdjList::new(3, true));
    }

    #[test]
    fn insertion_order() {
        let mut storage = AdjList::new(6, true);

        storage.add_edge(0, 5).unwrap();
        storage.add_edge(0, 2).unwrap();
        storage.add_edge(0, 4).unwrap();
        storage.add_edge(0, 5).unwrap();

        assert_eq!(storage.out_edges(0).unwrap().collect::<Vec<_>>(), vec![5, 2, 4]);

        storage.remove_edge(0, 2).unwrap();
        storage.add_edge(0, 2).unwrap();

        assert_eq!(storage.out_edges(0).unwrap().collect::<Vec<_>>(), vec![5, 4, 2]);
    }

    #[test]
    fn reverse_index() {
        let mut storage = AdjList::new(4, true);

        storage.add_edge(3, 1).unwrap();
        storage.add_edge(0, 1).unwrap();
        storage.add_edge(2, 1).unwrap();
        storage.remove_edge(0, 1).unwrap();

        assert_eq!(storage.in_edges(1).unwrap().collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(storage.in_edges(3).unwrap().count(), 0);
    }
}
