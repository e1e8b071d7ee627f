use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use log::trace;

use crate::{errors::SolverError, graph::*};

/// Edge pending in the greedy frontier. Ordered by weight first, then by
/// arrival and origin node, so equal-weight edges pop deterministically.
#[derive(Clone, Copy, Debug)]
struct PendingEdge {
    weight: Weight,
    arrival: Node,
    origin: Node,
}

impl Ord for PendingEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.arrival.cmp(&other.arrival))
            .then_with(|| self.origin.cmp(&other.origin))
    }
}

impl PartialOrd for PendingEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PendingEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PendingEdge {}

/// # The greedy path heuristic
///
/// Builds a feasible representative path by always committing to the
/// cheapest pending edge that extends the current path tip:
///
/// 1. Seed from the first pair `{0, 1}` with the cheapest edge leaving
///    either member; both members count as visited from then on.
/// 2. Pop the cheapest pending edge. Drop it if its arrival pair is
///    already visited or if it does not start at the current tip, else
///    accept it, mark the arrival pair visited and move the tip.
/// 3. Push edges from the new tip to every unvisited node and repeat
///    until the frontier drains.
///
/// The result is an upper bound on the optimal weight; the solver never
/// backtracks out of a locally cheap choice.
pub fn min_path(matrix: &DistanceMatrix) -> Result<Weight, SolverError> {
    let n = matrix.number_of_nodes();
    if n == 0 {
        return Err(SolverError::EmptyGraph);
    }
    let pairing = PairingIndex::try_new(n)?;

    // The cheapest edge out of {0, 1} decides both the origin within the
    // pair and the first arrival node.
    let mut seed: Option<PendingEdge> = None;
    for origin in 0..2 {
        for arrival in matrix.vertices_range() {
            if arrival == origin || arrival == pairing.partner(origin) {
                continue;
            }

            let edge = PendingEdge {
                weight: matrix.weight(origin, arrival),
                arrival,
                origin,
            };
            if seed.is_none_or(|best| edge < best) {
                seed = Some(edge);
            }
        }
    }

    // A single pair offers no edge to take.
    let Some(seed) = seed else {
        return Ok(0.0);
    };

    let mut visited = vec![false; matrix.len()];
    visited[0] = true;
    visited[1] = true;

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(seed));

    let mut tip = seed.origin;
    let mut total_weight = 0.0;

    while let Some(Reverse(edge)) = frontier.pop() {
        if visited[edge.arrival as usize] || visited[pairing.partner(edge.arrival) as usize] {
            continue;
        }

        // Only extend from the most recently accepted node; accepting an
        // edge out of an older node would grow a spanning structure
        // instead of a single path.
        if edge.origin != tip {
            continue;
        }

        total_weight += edge.weight;
        visited[edge.arrival as usize] = true;
        visited[pairing.partner(edge.arrival) as usize] = true;
        tip = edge.arrival;
        trace!(
            "accept edge {} -> {} with weight {}",
            edge.origin, edge.arrival, edge.weight
        );

        for arrival in matrix.vertices_range() {
            if !visited[arrival as usize] {
                frontier.push(Reverse(PendingEdge {
                    weight: matrix.weight(tip, arrival),
                    arrival,
                    origin: tip,
                }));
            }
        }
    }

    Ok(total_weight)
}
