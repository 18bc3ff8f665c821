//! Breadth-first and depth-first traversal reporting selectable events.
//!
//! # Examples
//!
//! ```
//! use bitgraph::{
//!     core::GraphStorage,
//!     storage::AdjList,
//!     visit::{ColorTracker, Traversal},
//! };
//!
//! let mut storage = AdjList::new(4, true);
//! storage.add_edge(0, 1)?;
//! storage.add_edge(0, 2)?;
//! storage.add_edge(2, 3)?;
//!
//! let mut colors = ColorTracker::new(4);
//!
//! let bfs = Traversal::on(&storage, &mut colors).run()?.collect::<Vec<_>>();
//! assert_eq!(bfs, vec![0, 1, 2, 3]);
//!
//! // Everything reachable is black now, start again from scratch.
//! colors.reset();
//!
//! let dfs = Traversal::on(&storage, &mut colors).dfs().run()?.collect::<Vec<_>>();
//! assert_eq!(dfs, vec![0, 2, 3, 1]);
//! # Ok::<(), bitgraph::core::GraphError>(())
//! ```

use crate::core::{marker::Direction, GraphError, GraphStorage};

use super::{
    raw::{Frontier, TraversalCollection},
    Color, ColorTracker, IntoIter, Order, Visitor,
};

/// Selection of the events on which a [`Traversal`] reports a vertex.
///
/// When neither is selected, a vertex is reported when it is taken from the
/// frontier (_visit_).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emit {
    /// Report a vertex when it is discovered (white → gray). Note that the
    /// start vertex is never discovered, it is gray from the beginning.
    pub on_discover: bool,
    /// Report a vertex when all its outgoing edges were explored (gray →
    /// black).
    pub on_finish: bool,
}

impl Emit {
    pub fn visit() -> Self {
        Self::default()
    }

    pub fn discover() -> Self {
        Self {
            on_discover: true,
            on_finish: false,
        }
    }

    pub fn finish() -> Self {
        Self {
            on_discover: false,
            on_finish: true,
        }
    }

    fn on_visit(&self) -> bool {
        !self.on_discover && !self.on_finish
    }
}

#[derive(Debug)]
struct Expansion {
    vertex: usize,
    next: usize,
}

/// Lazy breadth-first or depth-first traversal.
///
/// A vertex is pushed to the frontier when it is discovered, so each vertex
/// enters the frontier at most once per run. For depth-first order, this
/// means that the reported order is a _stack traversal_ order, where a
/// vertex is reported when popped. Use [`DfsEvents`](super::DfsEvents) for
/// the classic depth-first finish order.
///
/// The traversal is one-shot: once exhausted, the reachable vertices are
/// black and starting again from the same vertex yields nothing until the
/// colors are reset.
#[derive(Debug)]
pub struct Traversal {
    frontier: Frontier,
    expanding: Option<Expansion>,
    neighbors: Vec<usize>,
    emit: Emit,
}

/// Iterator returned from [`TraversalBuilder::run`].
pub type Traverse<'a, S> = IntoIter<'a, Traversal, S>;

impl Traversal {
    pub fn new(order: Order, emit: Emit) -> Self {
        Self {
            frontier: Frontier::new(order),
            expanding: None,
            neighbors: Vec::new(),
            emit,
        }
    }

    /// Creates a builder of the traversal on given storage and colors.
    pub fn on<'a, S>(storage: &'a S, colors: &'a mut ColorTracker) -> TraversalBuilder<'a, S>
    where
        S: GraphStorage,
    {
        TraversalBuilder {
            storage,
            colors,
            order: Order::default(),
            start: 0,
            emit: Emit::default(),
        }
    }

    /// Starts the traversal from given vertex. Nothing is visited if the
    /// vertex is already black.
    ///
    /// Fails if the vertex is out of range of the storage. The colors are
    /// extended to the storage size if they track fewer vertices.
    pub fn start<S>(
        &mut self,
        root: usize,
        storage: &S,
        colors: &mut ColorTracker,
    ) -> Result<(), GraphError>
    where
        S: GraphStorage,
    {
        storage.check_vertex(root)?;
        colors.grow(storage.vertex_count());
        let color = colors.get(root);

        self.reset();

        if color != Color::Black {
            colors.set(root, Color::Gray);
            self.frontier.push(root);
        }

        Ok(())
    }

    /// Clears the frontier. Colors are not touched.
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.expanding = None;
    }

    /// The vertex whose outgoing edges are being explored, if any.
    ///
    /// When a vertex is reported on discovery, this is the vertex it was
    /// discovered from.
    pub fn expanding(&self) -> Option<usize> {
        self.expanding.as_ref().map(|expansion| expansion.vertex)
    }
}

impl<S: GraphStorage> Visitor<S> for Traversal {
    type Item = usize;

    fn visit_next(&mut self, storage: &S, colors: &mut ColorTracker) -> Option<Self::Item> {
        colors.grow(storage.vertex_count());

        loop {
            if let Some(expansion) = self.expanding.as_mut() {
                while let Some(&u) = self.neighbors.get(expansion.next) {
                    expansion.next += 1;

                    if colors.get(u) == Color::White {
                        colors.set(u, Color::Gray);
                        self.frontier.push(u);

                        if self.emit.on_discover {
                            return Some(u);
                        }
                    }
                }

                let v = expansion.vertex;
                self.expanding = None;
                colors.set(v, Color::Black);

                if self.emit.on_finish {
                    return Some(v);
                }
            }

            let v = self.frontier.pop()?;

            self.neighbors.clear();
            self.neighbors
                .extend(storage.neighbors_directed(v, Direction::Outgoing));
            self.expanding = Some(Expansion { vertex: v, next: 0 });

            if self.emit.on_visit() {
                return Some(v);
            }
        }
    }
}

/// Builder for [`Traversal`].
pub struct TraversalBuilder<'a, S> {
    storage: &'a S,
    colors: &'a mut ColorTracker,
    order: Order,
    start: usize,
    emit: Emit,
}

impl<'a, S> TraversalBuilder<'a, S>
where
    S: GraphStorage,
{
    /// Breadth-first order (default).
    pub fn bfs(self) -> Self {
        self.using(Order::BreadthFirst)
    }

    /// Depth-first order.
    pub fn dfs(self) -> Self {
        self.using(Order::DepthFirst)
    }

    pub fn using(self, order: Order) -> Self {
        Self { order, ..self }
    }

    /// Vertex to start from, `0` by default.
    pub fn start(self, start: usize) -> Self {
        Self { start, ..self }
    }

    pub fn emit_on_discover(self) -> Self {
        let emit = Emit {
            on_discover: true,
            ..self.emit
        };
        Self { emit, ..self }
    }

    pub fn emit_on_finish(self) -> Self {
        let emit = Emit {
            on_finish: true,
            ..self.emit
        };
        Self { emit, ..self }
    }

    pub fn emit(self, emit: Emit) -> Self {
        Self { emit, ..self }
    }

    /// Runs the traversal.
    ///
    /// Fails if the start vertex is out of range.
    pub fn run(self) -> Result<Traverse<'a, S>, GraphError> {
        let Self {
            storage,
            colors,
            order,
            start,
            emit,
        } = self;

        let mut traversal = Traversal::new(order, emit);
        traversal.start(start, storage, colors)?;
        Ok(traversal.into_iter(storage, colors))
    }
}
