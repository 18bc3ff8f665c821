use thiserror::Error;

use crate::core::{marker::Direction, GraphStorage};

fn degree_dir(dir: Direction) -> &'static str {
    match dir {
        Direction::Outgoing => "out",
        Direction::Incoming => "in",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyCheckError {
    #[error("{} neighbors of vertex {0} contain duplicate {1}", degree_dir(*.2))]
    DuplicateNeighbor(usize, usize, Direction),
    #[error("{} neighbor {1} of vertex {0} has no corresponding edge", degree_dir(*.2))]
    DanglingNeighbor(usize, usize, Direction),
    #[error("edge {0} -> {1} is missing in the neighbors of vertex {1}")]
    MissingReverse(usize, usize),
    #[error("undirected edge {0} -- {1} is not symmetric")]
    Asymmetric(usize, usize),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", degree_dir(*.2))]
    HandshakingLemmaDirected(usize, usize, Direction),
    #[error("sum of degrees ({0}) is not equal to doubled edge count without self-loops ({1})")]
    HandshakingLemma(usize, usize),
}

/// Checks that the reported neighbors, edge queries and edge count of the
/// storage agree with each other.
pub fn check_consistency<S: GraphStorage>(storage: &S) -> Result<(), ConsistencyCheckError> {
    let n = storage.vertex_count();
    let has_edge = |from, to| storage.has_edge(from, to).unwrap_or(false);

    for v in 0..n {
        for dir in [Direction::Outgoing, Direction::Incoming] {
            let mut seen = vec![false; n];

            for u in storage.neighbors_directed(v, dir) {
                if std::mem::replace(&mut seen[u], true) {
                    return Err(ConsistencyCheckError::DuplicateNeighbor(v, u, dir));
                }

                let (from, to) = match dir {
                    Direction::Outgoing => (v, u),
                    Direction::Incoming => (u, v),
                };

                if !has_edge(from, to) {
                    return Err(ConsistencyCheckError::DanglingNeighbor(v, u, dir));
                }

                if dir == Direction::Outgoing
                    && !storage
                        .neighbors_directed(u, Direction::Incoming)
                        .any(|w| w == v)
                {
                    return Err(ConsistencyCheckError::MissingReverse(v, u));
                }
            }
        }
    }

    let edge_count = storage.edge_count();
    let degree_sum = |dir| {
        (0..n)
            .map(|v| storage.neighbors_directed(v, dir).count())
            .sum::<usize>()
    };

    if storage.is_directed() {
        for dir in [Direction::Outgoing, Direction::Incoming] {
            let sum = degree_sum(dir);
            if sum != edge_count {
                return Err(ConsistencyCheckError::HandshakingLemmaDirected(
                    sum, edge_count, dir,
                ));
            }
        }
    } else {
        for a in 0..n {
            for b in a + 1..n {
                if has_edge(a, b) != has_edge(b, a) {
                    return Err(ConsistencyCheckError::Asymmetric(a, b));
                }
            }
        }

        // Self-loops are reported once.
        let self_loops = (0..n).filter(|&v| has_edge(v, v)).count();
        let sum = degree_sum(Direction::Outgoing);
        let expected = 2 * edge_count - self_loops;

        if sum != expected {
            return Err(ConsistencyCheckError::HandshakingLemma(sum, expected));
        }
    }

    Ok(())
}
