//! Depth-first search reporting classified events.

use std::{collections::VecDeque, ops::Range};

use crate::core::{marker::Direction, GraphError, GraphStorage};

use super::{
    raw::{Stack, TraversalCollection},
    Color, ColorTracker, Visitor,
};

/// Strictly monotonically increasing numbering of graph traversal events.
///
/// This is useful to some algorithms that base their decision on the event time
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

/// Depth-first search visitor event.
///
/// Use [`DfsEvents`] visitor to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// A new vertex was discovered (white → gray).
    Open {
        /// Discovered vertex.
        vertex: usize,

        /// Discovering time.
        time: Time,
    },

    /// An edge of the tree formed by the traversal.
    TreeEdge {
        /// Source endpoint of the edge.
        from: usize,

        /// Target endpoint of the edge.
        to: usize,
    },

    /// An edge to a vertex that is [open](DfsEvent::Open) and not yet
    /// [closed](DfsEvent::Close), i.e., an ancestor on the current path.
    ///
    /// Presence of a back edge indicates a cycle in the graph.
    BackEdge {
        /// Source endpoint of the edge.
        from: usize,

        /// Target (gray) endpoint of the edge.
        to: usize,
    },

    /// An edge to an already [closed](DfsEvent::Close) vertex.
    ///
    /// Cross edge is an edge between vertices in different "branches" of the
    /// traversal tree. Forward edge is an edge between vertices in the same
    /// "branch" of the traversal tree. When the [discover
    /// time](DfsEvent::Open::time) of the `from` vertex is higher than `to`
    /// vertex, it's cross edge, otherwise it's forward edge.
    ///
    /// In undirected graphs there is no concept of cross or forward edges.
    CrossForwardEdge {
        /// Source endpoint of the edge.
        from: usize,

        /// Target (black) endpoint of the edge.
        to: usize,
    },

    /// All edges from the vertex have been reported (gray → black).
    Close {
        /// Closed vertex.
        vertex: usize,

        /// Closing time.
        time: Time,
    },
}

#[derive(Debug)]
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    neighbors: Vec<usize>,
    next: usize,
}

impl Frame {
    fn advance(&mut self) -> Option<usize> {
        let u = self.neighbors.get(self.next).copied()?;
        self.next += 1;
        Some(u)
    }
}

/// Depth-first traversal reporting [`DfsEvent`]s.
///
/// Unlike [`Traversal`](super::Traversal) in depth-first order, a vertex is
/// closed only after all vertices reachable from it are closed, so the order
/// of [`Close`](DfsEvent::Close) events is the DFS finish order and gray
/// vertices are exactly those on the current path.
///
/// The visitor expects the colors of the roots' components to be white when
/// started; roots that are not white are skipped.
#[derive(Debug)]
pub struct DfsEvents {
    // Stack of "iterators" as described in
    // https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html.
    // This is needed to be able to correctly detect back edges while keeping
    // a correct DFS order.
    stack: Stack<Frame>,
    roots: Range<usize>,
    queue: VecDeque<DfsEvent>,
    time: usize,
}

impl DfsEvents {
    /// Traverses the vertices reachable from given root.
    ///
    /// Fails if the root is out of range of the storage.
    pub fn start<S: GraphStorage>(storage: &S, root: usize) -> Result<Self, GraphError> {
        storage.check_vertex(root)?;
        Ok(Self::with_roots(root..root + 1))
    }

    /// Traverses all vertices, starting a new tree from every vertex that is
    /// still white, in ascending order.
    pub fn start_all<S: GraphStorage>(storage: &S) -> Self {
        Self::with_roots(0..storage.vertex_count())
    }

    fn with_roots(roots: Range<usize>) -> Self {
        Self {
            stack: Stack::default(),
            roots,
            queue: VecDeque::new(),
            time: 0,
        }
    }

    fn tick(&mut self) -> Time {
        let time = Time(self.time);
        self.time += 1;
        time
    }

    fn open<S: GraphStorage>(
        &mut self,
        vertex: usize,
        parent: Option<usize>,
        storage: &S,
        colors: &mut ColorTracker,
    ) -> DfsEvent {
        colors.set(vertex, Color::Gray);

        self.stack.push(Frame {
            vertex,
            parent,
            neighbors: storage
                .neighbors_directed(vertex, Direction::Outgoing)
                .collect(),
            next: 0,
        });

        DfsEvent::Open {
            vertex,
            time: self.tick(),
        }
    }

    fn next_root(&mut self, colors: &ColorTracker) -> Option<usize> {
        // All vertices closed, no need to go through the remaining roots.
        if colors.black_count() == colors.len() {
            return None;
        }

        self.roots
            .by_ref()
            .find(|&root| colors.get(root) == Color::White)
    }
}

impl<S: GraphStorage> Visitor<S> for DfsEvents {
    type Item = DfsEvent;

    fn visit_next(&mut self, storage: &S, colors: &mut ColorTracker) -> Option<Self::Item> {
        colors.grow(storage.vertex_count());

        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }

        loop {
            let (v, parent, next) = match self.stack.0.last_mut() {
                Some(frame) => (frame.vertex, frame.parent, frame.advance()),
                None => {
                    let root = self.next_root(colors)?;
                    return Some(self.open(root, None, storage, colors));
                }
            };

            let Some(u) = next else {
                // All neighbors exhausted.
                self.stack.pop();
                colors.set(v, Color::Black);

                return Some(DfsEvent::Close {
                    vertex: v,
                    time: self.tick(),
                });
            };

            match colors.get(u) {
                Color::White => {
                    let open = self.open(u, Some(v), storage, colors);
                    self.queue.push_back(open);
                    return Some(DfsEvent::TreeEdge { from: v, to: u });
                }
                Color::Gray => {
                    // In undirected graphs, the tree edge is seen again from
                    // the child. That is not a back edge.
                    if storage.is_directed() || parent != Some(u) {
                        return Some(DfsEvent::BackEdge { from: v, to: u });
                    }
                }
                Color::Black => {
                    // In undirected graphs, an edge to a closed vertex was
                    // already reported from the other side.
                    if storage.is_directed() {
                        return Some(DfsEvent::CrossForwardEdge { from: v, to: u });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AdjList, AdjMatrix};

    macro_rules! dfs_event {
        (open, $v:expr, $t:expr) => {
            DfsEvent::Open {
                vertex: $v,
                time: Time($t),
            }
        };
        (tree, ($u:expr, $v:expr)) => {
            DfsEvent::TreeEdge { from: $u, to: $v }
        };
        (back, ($u:expr, $v:expr)) => {
            DfsEvent::BackEdge { from: $u, to: $v }
        };
        (cross_forward, ($u:expr, $v:expr)) => {
            DfsEvent::CrossForwardEdge { from: $u, to: $v }
        };
        (close, $v:expr, $t:expr) => {
            DfsEvent::Close {
                vertex: $v,
                time: Time($t),
            }
        };
    }

    fn create<S: GraphStorage>(mut storage: S, edges: &[(usize, usize)]) -> S {
        for &(from, to) in edges {
            storage.add_edge(from, to).unwrap();
        }
        storage
    }

    fn events<S: GraphStorage>(storage: &S, visitor: DfsEvents) -> Vec<DfsEvent> {
        let mut colors = ColorTracker::new(storage.vertex_count());
        visitor.into_iter(storage, &mut colors).collect()
    }

    #[test]
    fn dfs_events_directed() {
        let graph = create(
            AdjList::new(4, true),
            &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 2)],
        );

        assert_eq!(
            events(&graph, DfsEvents::start(&graph, 0).unwrap()),
            vec![
                dfs_event!(open, 0, 0),
                dfs_event!(tree, (0, 1)),
                dfs_event!(open, 1, 1),
                dfs_event!(tree, (1, 2)),
                dfs_event!(open, 2, 2),
                dfs_event!(back, (2, 0)),
                dfs_event!(close, 2, 3),
                dfs_event!(close, 1, 4),
                dfs_event!(tree, (0, 3)),
                dfs_event!(open, 3, 5),
                dfs_event!(cross_forward, (3, 2)),
                dfs_event!(close, 3, 6),
                dfs_event!(close, 0, 7),
            ]
        );
    }

    #[test]
    fn dfs_events_undirected() {
        let graph = create(
            AdjMatrix::new(4, false),
            &[(0, 1), (1, 2), (2, 0), (2, 3)],
        );

        assert_eq!(
            events(&graph, DfsEvents::start(&graph, 0).unwrap()),
            vec![
                dfs_event!(open, 0, 0),
                dfs_event!(tree, (0, 1)),
                dfs_event!(open, 1, 1),
                dfs_event!(tree, (1, 2)),
                dfs_event!(open, 2, 2),
                dfs_event!(back, (2, 0)),
                dfs_event!(tree, (2, 3)),
                dfs_event!(open, 3, 3),
                dfs_event!(close, 3, 4),
                dfs_event!(close, 2, 5),
                dfs_event!(close, 1, 6),
                dfs_event!(close, 0, 7),
            ]
        );
    }

    #[test]
    fn dfs_events_undirected_tree_has_no_back_edge() {
        let graph = create(AdjList::new(5, false), &[(0, 1), (1, 2), (1, 3), (3, 4)]);

        assert!(!events(&graph, DfsEvents::start(&graph, 2).unwrap())
            .iter()
            .any(|event| matches!(event, DfsEvent::BackEdge { .. })));
    }

    #[test]
    fn dfs_events_self_loop() {
        let directed = create(AdjList::new(2, true), &[(0, 1), (1, 1)]);
        let undirected = create(AdjMatrix::new(2, false), &[(0, 1), (1, 1)]);

        for events in [
            events(&directed, DfsEvents::start(&directed, 0).unwrap()),
            events(&undirected, DfsEvents::start(&undirected, 0).unwrap()),
        ] {
            assert!(events.contains(&dfs_event!(back, (1, 1))));
        }
    }

    #[test]
    fn dfs_events_all_roots() {
        let graph = create(AdjList::new(5, true), &[(3, 1), (1, 0), (4, 2)]);

        let closed = events(&graph, DfsEvents::start_all(&graph))
            .into_iter()
            .filter_map(|event| match event {
                DfsEvent::Close { vertex, .. } => Some(vertex),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(closed, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn dfs_events_finish_order() {
        let graph = create(
            AdjMatrix::new(6, true),
            &[(0, 1), (0, 2), (0, 3), (2, 4), (2, 5)],
        );

        let closed = events(&graph, DfsEvents::start(&graph, 0).unwrap())
            .into_iter()
            .filter_map(|event| match event {
                DfsEvent::Close { vertex, .. } => Some(vertex),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(closed, vec![1, 4, 5, 2, 3, 0]);
    }

    #[test]
    fn dfs_events_start_out_of_range() {
        let graph = create(AdjList::new(4, true), &[(0, 1)]);

        assert_eq!(
            DfsEvents::start(&graph, 4).err(),
            Some(GraphError::OutOfRange { vertex: 4, size: 4 })
        );
    }

    #[test]
    fn dfs_events_colors_smaller_than_storage() {
        let graph = create(AdjList::new(4, true), &[(0, 1), (1, 3)]);
        let mut colors = ColorTracker::new(2);

        let closed = DfsEvents::start_all(&graph)
            .into_iter(&graph, &mut colors)
            .filter(|event| matches!(event, DfsEvent::Close { .. }))
            .count();

        assert_eq!(closed, 4);
        assert_eq!(colors.len(), 4);
        assert_eq!(colors.black_count(), 4);
    }

    #[test]
    fn dfs_events_time_monotonic() {
        let graph = create(AdjList::new(6, true), &[(0, 1), (1, 2), (3, 4), (4, 5)]);

        let times = events(&graph, DfsEvents::start_all(&graph))
            .into_iter()
            .filter_map(|event| match event {
                DfsEvent::Open { time, .. } | DfsEvent::Close { time, .. } => Some(time),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(times.len(), 12);
        assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
