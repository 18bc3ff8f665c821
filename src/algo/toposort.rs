//! Linearize a directed graph by [topological sorting].
//!
//! [topological sorting]: https://en.wikipedia.org/wiki/Topological_sorting
//!
//! # Examples
//!
//! ```
//! use bitgraph::{algo::try_toposort, core::GraphStorage, storage::AdjList, visit::ColorTracker};
//!
//! let mut storage = AdjList::new(4, true);
//! let mut colors = ColorTracker::new(4);
//!
//! storage.add_edge(3, 1)?;
//! storage.add_edge(1, 0)?;
//! storage.add_edge(2, 1)?;
//!
//! let sorted = try_toposort(&storage, &mut colors)?;
//! assert_eq!(sorted, vec![3, 2, 1, 0]);
//! # Ok::<(), bitgraph::core::GraphError>(())
//! ```

use tracing::debug;

use crate::{
    core::{GraphError, GraphStorage},
    visit::{ColorTracker, DfsEvent, DfsEvents, Visitor},
};

/// Returns all vertices in reversed depth-first finish order.
///
/// If the graph is a directed acyclic graph, the result is a topological
/// order: for every edge `u -> v`, `u` comes before `v`. On a cyclic graph
/// the function does not fail, but the result is not a topological order.
/// Use [`try_toposort`] to detect that case.
///
/// The colors are reset before and after the search.
pub fn toposort<S>(storage: &S, colors: &mut ColorTracker) -> Vec<usize>
where
    S: GraphStorage,
{
    colors.reset();

    let mut sorted = DfsEvents::start_all(storage)
        .into_iter(storage, colors)
        .filter_map(|event| match event {
            DfsEvent::Close { vertex, .. } => Some(vertex),
            _ => None,
        })
        .collect::<Vec<_>>();

    colors.reset();

    // Every edge u -> v of a DAG has v closed before u.
    sorted.reverse();

    debug!(len = sorted.len(), "sorted vertices");
    sorted
}

/// Returns a topological order of the vertices, or the back edge that closes
/// a cycle as [`GraphError::Cycle`].
///
/// The colors are reset before and after the search.
pub fn try_toposort<S>(storage: &S, colors: &mut ColorTracker) -> Result<Vec<usize>, GraphError>
where
    S: GraphStorage,
{
    colors.reset();

    let mut sorted = Vec::with_capacity(storage.vertex_count());
    let mut cycle = None;

    for event in DfsEvents::start_all(storage).into_iter(storage, colors) {
        match event {
            DfsEvent::Close { vertex, .. } => sorted.push(vertex),
            DfsEvent::BackEdge { from, to } => {
                cycle = Some((from, to));
                break;
            }
            _ => {}
        }
    }

    colors.reset();

    if let Some((from, to)) = cycle {
        debug!(from, to, "graph is not acyclic");
        return Err(GraphError::Cycle { from, to });
    }

    sorted.reverse();

    debug!(len = sorted.len(), "sorted vertices");
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        algo::is_acyclic,
        core::marker::Direction,
        infra::proptest::{dag, graph_directed},
        storage::{AdjList, AdjMatrix},
    };

    fn assert_valid<S: GraphStorage>(sorted: &[usize], storage: &S) {
        let n = storage.vertex_count();
        assert_eq!(sorted.len(), n, "algorithm omitted some vertices");

        let mut position = vec![usize::MAX; n];
        for (i, &v) in sorted.iter().enumerate() {
            position[v] = i;
        }

        for u in 0..n {
            for v in storage.neighbors_directed(u, Direction::Outgoing) {
                assert!(
                    position[u] < position[v],
                    "invalid topological order for {:?} -> {:?}",
                    u,
                    v
                );
            }
        }
    }

    fn create<S: GraphStorage>(mut storage: S, edges: &[(usize, usize)]) -> S {
        for &(from, to) in edges {
            storage.add_edge(from, to).unwrap();
        }
        storage
    }

    fn create_basic_graph() -> AdjList {
        create(
            AdjList::new(6, true),
            &[(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)],
        )
    }

    fn create_cyclic_graph() -> AdjList {
        let mut graph = create_basic_graph();
        graph.add_edge(1, 5).unwrap();
        graph
    }

    fn create_disconnected_graph() -> AdjMatrix {
        create(
            AdjMatrix::new(10, true),
            &[
                (5, 2),
                (5, 0),
                (4, 0),
                (4, 1),
                (2, 3),
                (3, 1),
                (7, 6),
                (7, 8),
                (6, 9),
                (8, 9),
            ],
        )
    }

    #[test]
    fn toposort_basic() {
        let graph = create_basic_graph();
        let mut colors = ColorTracker::new(6);

        let sorted = toposort(&graph, &mut colors);
        assert_valid(&sorted, &graph);
        assert_eq!(try_toposort(&graph, &mut colors), Ok(sorted));
    }

    #[test]
    fn toposort_disconnected() {
        let graph = create_disconnected_graph();
        let mut colors = ColorTracker::new(10);

        assert_valid(&try_toposort(&graph, &mut colors).unwrap(), &graph);
    }

    #[test]
    fn toposort_deterministic() {
        let graph = create(
            AdjMatrix::new(6, true),
            &[(0, 1), (0, 2), (0, 3), (2, 4), (2, 5)],
        );
        let mut colors = ColorTracker::new(6);

        assert_eq!(toposort(&graph, &mut colors), vec![0, 3, 2, 5, 4, 1]);
    }

    #[test]
    fn toposort_cycle_permissive() {
        let graph = create_cyclic_graph();
        let mut colors = ColorTracker::new(6);

        let sorted = toposort(&graph, &mut colors);

        let mut vertices = sorted.clone();
        vertices.sort_unstable();
        assert_eq!(vertices, (0..6).collect::<Vec<_>>());
        assert_eq!(colors.black_count(), 0);
    }

    #[test]
    fn try_toposort_cycle() {
        let graph = create_cyclic_graph();
        let mut colors = ColorTracker::new(6);

        assert_matches!(
            try_toposort(&graph, &mut colors),
            Err(GraphError::Cycle { .. })
        );
        assert_eq!(colors.black_count(), 0);
    }

    #[test]
    fn try_toposort_self_loop() {
        let graph = create(AdjList::new(2, true), &[(0, 1), (1, 1)]);
        let mut colors = ColorTracker::new(2);

        assert_eq!(
            try_toposort(&graph, &mut colors),
            Err(GraphError::Cycle { from: 1, to: 1 })
        );
    }

    #[test]
    fn colors_smaller_than_storage() {
        let graph = create_basic_graph();
        let mut colors = ColorTracker::new(2);

        assert_valid(&toposort(&graph, &mut colors), &graph);
        assert_eq!(colors.len(), 6);
        assert_eq!(colors.black_count(), 0);
    }

    proptest! {
        #[test]
        fn proptest_dag_sorted(g in dag(24)) {
            let storage = g.storage();
            let mut colors = ColorTracker::new(storage.vertex_count());

            let sorted = try_toposort(storage, &mut colors);
            prop_assert!(sorted.is_ok());
            assert_valid(&sorted.unwrap(), storage);
        }

        #[test]
        fn proptest_acyclic_iff_sorted(g in graph_directed(12)) {
            let storage = g.storage();
            let n = storage.vertex_count();
            let mut colors = ColorTracker::new(n);

            let sorted = toposort(storage, &mut colors);

            let mut position = vec![0; n];
            for (i, &v) in sorted.iter().enumerate() {
                position[v] = i;
            }

            let valid = (0..n).all(|u| {
                storage
                    .neighbors_directed(u, Direction::Outgoing)
                    .all(|v| position[u] < position[v])
            });

            prop_assert_eq!(is_acyclic(storage, &mut colors), valid);
            prop_assert_eq!(try_toposort(storage, &mut colors).is_ok(), valid);
        }
    }
}
