//! Implementations of edge storages.
//!
//! A _storage_ implements the [`GraphStorage`](crate::core::GraphStorage)
//! capability set over a fixed number of vertices. The algorithms in
//! [`visit`](crate::visit) and [`algo`](crate::algo) are written against the
//! trait only, so any storage can be used with any algorithm.
//!
//! # Storages and their properties
//!
//! The **adjacency list** is suited for sparse graphs and is fast to traverse
//! when vertex degrees are small. The **adjacency matrix** packs the edges
//! into bits, giving constant-time edge queries and mutations at the price of
//! quadratic space.
//!
//! |                   | **[AdjList]**       | **[AdjMatrix]**     |
//! |-------------------|---------------------|---------------------|
//! | add edge          | _O(d)_              | _O(1)_              |
//! | remove edge       | _O(d)_              | _O(1)_              |
//! | has edge          | _O(d)_              | _O(1)_              |
//! | get neighbors     | _O(d)_              | _O(V)_              |
//! | space             | _O(V + E)_          | _O(V²)_ bits        |
//! | neighbor order    | insertion           | ascending           |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//!
//! [`AnyStorage`] wraps either of them when the backend is selected at
//! runtime.

pub mod adj_list;
pub mod adj_matrix;
pub mod any;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix, any::AnyStorage};
