use fixedbitset::FixedBitSet;

use crate::core::GraphError;

/// Traversal state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,
    /// Discovered, but not all outgoing edges explored.
    Gray,
    /// All outgoing edges explored.
    Black,
}

/// Per-vertex [`Color`] marker.
///
/// All vertices start white. Algorithms move them white → gray → black and
/// only [`reset`](ColorTracker::reset) brings them back to white, so the
/// state of a finished traversal can be inspected afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTracker {
    // Gray is discovered and not finished, black is both.
    discovered: FixedBitSet,
    finished: FixedBitSet,
}

impl ColorTracker {
    pub fn new(size: usize) -> Self {
        Self {
            discovered: FixedBitSet::with_capacity(size),
            finished: FixedBitSet::with_capacity(size),
        }
    }

    /// Number of tracked vertices.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn color(&self, vertex: usize) -> Result<Color, GraphError> {
        self.check(vertex)?;
        Ok(self.get(vertex))
    }

    pub fn set_color(&mut self, vertex: usize, color: Color) -> Result<(), GraphError> {
        self.check(vertex)?;
        self.set(vertex, color);
        Ok(())
    }

    pub fn is_black(&self, vertex: usize) -> Result<bool, GraphError> {
        self.color(vertex).map(|color| color == Color::Black)
    }

    pub fn is_white(&self, vertex: usize) -> Result<bool, GraphError> {
        self.color(vertex).map(|color| color == Color::White)
    }

    /// Number of black vertices.
    pub fn black_count(&self) -> usize {
        self.finished.count_ones(..)
    }

    /// Extends the tracker to at least `size` vertices. The added vertices
    /// are white, the existing ones keep their colors.
    pub fn grow(&mut self, size: usize) {
        self.discovered.grow(size);
        self.finished.grow(size);
    }

    /// Turns all vertices white.
    pub fn reset(&mut self) {
        self.discovered.clear();
        self.finished.clear();
    }

    pub(crate) fn get(&self, vertex: usize) -> Color {
        match (self.discovered.contains(vertex), self.finished.contains(vertex)) {
            (_, true) => Color::Black,
            (true, false) => Color::Gray,
            (false, false) => Color::White,
        }
    }

    pub(crate) fn set(&mut self, vertex: usize, color: Color) {
        let (discovered, finished) = match color {
            Color::White => (false, false),
            Color::Gray => (true, false),
            Color::Black => (true, true),
        };

        self.discovered.set(vertex, discovered);
        self.finished.set(vertex, finished);
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                size: self.len(),
            })
        }
    }
}
