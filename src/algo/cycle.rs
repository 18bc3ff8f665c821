//! Find a [cycle] in a graph.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use bitgraph::{algo::is_acyclic, core::GraphStorage, storage::AdjMatrix, visit::ColorTracker};
//!
//! let mut storage = AdjMatrix::new(4, false);
//! let mut colors = ColorTracker::new(4);
//!
//! storage.add_edge(0, 1)?;
//! storage.add_edge(1, 2)?;
//! storage.add_edge(2, 3)?;
//!
//! assert!(is_acyclic(&storage, &mut colors));
//!
//! storage.add_edge(3, 0)?;
//!
//! assert!(!is_acyclic(&storage, &mut colors));
//! # Ok::<(), bitgraph::core::GraphError>(())
//! ```

use tracing::debug;

use crate::{
    core::GraphStorage,
    visit::{ColorTracker, DfsEvent, DfsEvents, Visitor},
};

/// Returns an edge `(from, to)` that closes a cycle, if there is any.
///
/// Depth-first search is started from every white vertex in ascending order,
/// so all components are covered. In directed graphs, the edge is a back edge
/// to a vertex on the current search path. In undirected graphs, it is an
/// edge to an already discovered vertex other than the parent in the search
/// tree. A self-loop is a cycle in both.
///
/// The colors are reset before and after the search, so they must track the
/// vertices of `storage`.
pub fn find_cycle<S>(storage: &S, colors: &mut ColorTracker) -> Option<(usize, usize)>
where
    S: GraphStorage,
{
    colors.reset();

    let cycle = DfsEvents::start_all(storage)
        .into_iter(storage, colors)
        .find_map(|event| match event {
            DfsEvent::BackEdge { from, to } => Some((from, to)),
            _ => None,
        });

    colors.reset();

    match cycle {
        Some((from, to)) => debug!(from, to, "found cycle"),
        None => debug!("no cycle found"),
    }

    cycle
}

/// Returns `true` if the graph contains no cycle.
///
/// See [`find_cycle`] for details.
pub fn is_acyclic<S>(storage: &S, colors: &mut ColorTracker) -> bool
where
    S: GraphStorage,
{
    find_cycle(storage, colors).is_none()
}
