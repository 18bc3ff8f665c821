#![allow(dead_code)]

use bitgraph::graph::{Backend, Graph};
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Random forward edges `(u, v)` with `u < v`, each pair included with
/// probability `p`.
///
/// Directed graphs built from these are acyclic and every vertex can only
/// reach vertices with higher IDs.
pub struct ForwardEdges<'a> {
    rng: &'a mut Rng,
    n: usize,
    p: f32,
    from: usize,
    to: usize,
}

impl<'a> ForwardEdges<'a> {
    pub fn new(vertex_count: usize, p: f32, rng: &'a mut Rng) -> Self {
        Self {
            rng,
            n: vertex_count,
            p,
            from: 0,
            to: 0,
        }
    }
}

impl Iterator for ForwardEdges<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.to += 1;

            if self.to >= self.n {
                self.from += 1;
                self.to = self.from + 1;

                if self.to >= self.n {
                    return None;
                }
            }

            if self.rng.f32() < self.p {
                return Some((self.from, self.to));
            }
        }
    }
}

pub fn bitgraph_random(
    vertex_count: usize,
    density: f32,
    backend: Backend,
    rng: &mut Rng,
) -> Graph {
    let mut graph = Graph::builder(vertex_count)
        .directed()
        .backend(backend)
        .build()
        .unwrap();

    for (u, v) in ForwardEdges::new(vertex_count, density, rng) {
        graph.add_edge(u, v).unwrap();
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), (), petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v) in ForwardEdges::new(vertex_count, density, rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
