//! [`proptest`] strategies generating storages and graphs.

use proptest::{prelude::*, sample::Index};

use crate::{
    core::{GraphError, GraphStorage},
    graph::{Backend, Graph},
    storage::AnyStorage,
};

/// A single edge mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOp {
    Add(usize, usize),
    Remove(usize, usize),
}

impl EdgeOp {
    pub fn apply<S: GraphStorage>(&self, storage: &mut S) -> Result<bool, GraphError> {
        match *self {
            EdgeOp::Add(from, to) => storage.add_edge(from, to),
            EdgeOp::Remove(from, to) => storage.remove_edge(from, to),
        }
    }
}

pub fn backend() -> impl Strategy<Value = Backend> {
    prop_oneof![Just(Backend::Matrix), Just(Backend::List)]
}

/// Generates a size in `1..=max_size` and a sequence of edge mutations.
///
/// Adds are more frequent than removes so that the storages fill up. An
/// endpoint equal to the size is occasionally generated to exercise the out
/// of range errors.
pub fn edge_ops(max_size: usize) -> impl Strategy<Value = (usize, Vec<EdgeOp>)> {
    (1..=max_size).prop_flat_map(|size| {
        let vertex = 0..=size;
        let op = prop_oneof![
            3 => (vertex.clone(), vertex.clone()).prop_map(|(from, to)| EdgeOp::Add(from, to)),
            1 => (vertex.clone(), vertex).prop_map(|(from, to)| EdgeOp::Remove(from, to)),
        ];

        (Just(size), prop::collection::vec(op, 0..size * 4))
    })
}

fn graph_with(
    max_size: usize,
    directed: impl Strategy<Value = bool>,
) -> impl Strategy<Value = Graph<AnyStorage>> {
    (1..=max_size, directed, backend()).prop_flat_map(|(size, directed, backend)| {
        prop::collection::vec((0..size, 0..size), 0..size * 3).prop_map(move |edges| {
            let mut storage = AnyStorage::new(size, directed, backend);

            for (from, to) in edges {
                // Endpoints are always in range.
                let _ = storage.add_edge(from, to);
            }

            Graph::from_storage(storage)
        })
    })
}

/// Generates a directed or undirected graph with random edges.
pub fn graph(max_size: usize) -> impl Strategy<Value = Graph<AnyStorage>> {
    graph_with(max_size, any::<bool>())
}

pub fn graph_directed(max_size: usize) -> impl Strategy<Value = Graph<AnyStorage>> {
    graph_with(max_size, Just(true))
}

pub fn graph_undirected(max_size: usize) -> impl Strategy<Value = Graph<AnyStorage>> {
    graph_with(max_size, Just(false))
}

/// Generates a directed acyclic graph.
///
/// All edges go forward in a random permutation of the vertices, so the
/// vertex numbering is not a topological order itself.
pub fn dag(max_size: usize) -> impl Strategy<Value = Graph<AnyStorage>> {
    (1..=max_size, backend()).prop_flat_map(|(size, backend)| {
        let order = Just((0..size).collect::<Vec<_>>()).prop_shuffle();
        let edges = prop::collection::vec((any::<Index>(), any::<Index>()), 0..size * 3);

        (order, edges).prop_map(move |(order, edges)| {
            let mut storage = AnyStorage::new(size, true, backend);

            for (i, j) in edges {
                let (i, j) = (i.index(size), j.index(size));
                if i == j {
                    continue;
                }

                let (first, second) = (i.min(j), i.max(j));
                let _ = storage.add_edge(order[first], order[second]);
            }

            Graph::from_storage(storage)
        })
    })
}
