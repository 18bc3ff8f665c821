//! Implementations of graph traversal methods.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; visitor state is independent on the graph itself,
//! * &#128077; traversal is not limited by the size of the program stack.
//!
//! The only state shared between a visitor and the rest of the world is the
//! [`ColorTracker`]. Consuming a visitor mutates the colors as a side effect
//! and the colors stay as they are when the visitor is dropped, until they are
//! explicitly [reset](ColorTracker::reset).
//!
//! Neighbors are explored in the order given by the storage, so the
//! traversals are deterministic for a given storage content.

pub mod dfs;
pub mod traverse;

mod color;
pub(crate) mod raw;

#[doc(inline)]
pub use self::{
    color::{Color, ColorTracker},
    dfs::{DfsEvent, DfsEvents, Time},
    traverse::{Emit, Traversal, TraversalBuilder, Traverse},
};

use crate::core::GraphStorage;

/// Discipline of the traversal frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// First in, first out. Vertices are visited in the order of the number
    /// of hops from the start.
    #[default]
    BreadthFirst,
    /// Last in, first out.
    DepthFirst,
}

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<S: GraphStorage> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// storage.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the storage nor to the colors, so it can be passed
    /// around without lifetime problems and resumed later.
    fn visit_next(&mut self, storage: &S, colors: &mut ColorTracker) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given storage.
    fn iter<'a>(&'a mut self, storage: &'a S, colors: &'a mut ColorTracker) -> Iter<'a, Self, S>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            storage,
            colors,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given storage.
    fn into_iter<'a>(self, storage: &'a S, colors: &'a mut ColorTracker) -> IntoIter<'a, Self, S>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            storage,
            colors,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, S> {
    visitor: &'a mut V,
    storage: &'a S,
    colors: &'a mut ColorTracker,
}

impl<'a, V, S> Iterator for Iter<'a, V, S>
where
    S: GraphStorage,
    V: Visitor<S>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.storage, self.colors)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
#[derive(Debug)]
pub struct IntoIter<'a, V, S> {
    visitor: V,
    storage: &'a S,
    colors: &'a mut ColorTracker,
}

impl<'a, V, S> Iterator for IntoIter<'a, V, S>
where
    S: GraphStorage,
    V: Visitor<S>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.storage, self.colors)
    }
}
