//! Find the shortest unweighted path between two vertices.
//!
//! # Examples
//!
//! ```
//! use bitgraph::{algo::shortest_path, core::GraphStorage, storage::AdjMatrix};
//!
//! let mut storage = AdjMatrix::new(4, true);
//!
//! storage.add_edge(0, 1)?;
//! storage.add_edge(1, 2)?;
//! storage.add_edge(0, 3)?;
//! storage.add_edge(3, 2)?;
//!
//! assert_eq!(shortest_path(&storage, 0, 2)?, vec![0, 1, 2]);
//! assert_eq!(shortest_path(&storage, 2, 0)?, Vec::<usize>::new());
//! # Ok::<(), bitgraph::core::GraphError>(())
//! ```

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    core::{GraphError, GraphStorage},
    visit::{ColorTracker, Emit, Order, Traversal, Visitor},
};

/// Returns the path with the fewest edges from `from` to `to`, both
/// included, or an empty vector if `to` is not reachable.
///
/// The search is breadth-first, so ties are broken by the order of the
/// neighbors in the storage. The path from a vertex to itself is just the
/// vertex. The search uses its own colors.
pub fn shortest_path<S>(storage: &S, from: usize, to: usize) -> Result<Vec<usize>, GraphError>
where
    S: GraphStorage,
{
    storage.check_vertex(from)?;
    storage.check_vertex(to)?;

    if from == to {
        return Ok(vec![from]);
    }

    let mut colors = ColorTracker::new(storage.vertex_count());
    let mut bfs = Traversal::new(Order::BreadthFirst, Emit::discover());
    bfs.start(from, storage, &mut colors)?;

    // Not using a dense vector, the goal is often reached after exploring
    // only a small part of the graph.
    let mut pred = FxHashMap::default();

    while let Some(vertex) = bfs.visit_next(storage, &mut colors) {
        if let Some(parent) = bfs.expanding() {
            pred.insert(vertex, parent);
        }

        if vertex == to {
            break;
        }
    }

    if !pred.contains_key(&to) {
        debug!(from, to, "no path found");
        return Ok(Vec::new());
    }

    let mut path = vec![to];
    let mut current = to;

    while let Some(&parent) = pred.get(&current) {
        path.push(parent);
        current = parent;
    }

    path.reverse();

    debug!(from, to, len = path.len(), "found path");
    Ok(path)
}
