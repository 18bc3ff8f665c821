use std::{iter::Copied, slice};

use crate::{
    core::{marker::Direction, GraphError, GraphStorage},
    graph::Backend,
};

use super::{adj_matrix, AdjList, AdjMatrix};

/// Storage whose backend is chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyStorage {
    Matrix(AdjMatrix),
    List(AdjList),
}

impl AnyStorage {
    pub fn new(size: usize, directed: bool, backend: Backend) -> Self {
        match backend {
            Backend::Matrix => AnyStorage::Matrix(AdjMatrix::new(size, directed)),
            Backend::List => AnyStorage::List(AdjList::new(size, directed)),
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            AnyStorage::Matrix(_) => Backend::Matrix,
            AnyStorage::List(_) => Backend::List,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $storage:ident => $body:expr) => {
        match $self {
            AnyStorage::Matrix($storage) => $body,
            AnyStorage::List($storage) => $body,
        }
    };
}

impl GraphStorage for AnyStorage {
    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        dispatch!(self, storage => storage.vertex_count())
    }

    fn is_directed(&self) -> bool {
        dispatch!(self, storage => storage.is_directed())
    }

    fn edge_count(&self) -> usize {
        dispatch!(self, storage => storage.edge_count())
    }

    fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError> {
        dispatch!(self, storage => storage.add_edge(from, to))
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError> {
        dispatch!(self, storage => storage.remove_edge(from, to))
    }

    fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        dispatch!(self, storage => storage.has_edge(from, to))
    }

    fn neighbors_directed(&self, vertex: usize, dir: Direction) -> Self::NeighborsIter<'_> {
        match self {
            AnyStorage::Matrix(storage) => {
                NeighborsIter::Matrix(storage.neighbors_directed(vertex, dir))
            }
            AnyStorage::List(storage) => NeighborsIter::List(storage.neighbors_directed(vertex, dir)),
        }
    }

    fn clear_edges(&mut self) {
        dispatch!(self, storage => storage.clear_edges())
    }
}

pub enum NeighborsIter<'a> {
    Matrix(adj_matrix::NeighborsIter<'a>),
    List(Copied<slice::Iter<'a, usize>>),
}

impl Iterator for NeighborsIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            NeighborsIter::Matrix(neighbors) => neighbors.next(),
            NeighborsIter::List(neighbors) => neighbors.next(),
        }
    }
}
