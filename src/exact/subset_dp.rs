use std::collections::VecDeque;

use log::trace;
use smallvec::{SmallVec, smallvec};

use crate::{errors::SolverError, graph::*};

/// Representative paths hold one node per pair, so this inline capacity
/// covers matrices of up to 32 nodes without spilling to the heap.
type Path = SmallVec<[Node; 16]>;

/// Partial representative path ending in `current`. The mask holds one bit
/// per node on the path, so it always has exactly `pairs_visited` set bits.
#[derive(Clone, Debug)]
struct SearchState {
    current: Node,
    mask: usize,
    weight: Weight,
    pairs_visited: NumNodes,
    path: Path,
}

/// # The exact subset search
///
/// Exhaustively enumerates every admissible ordering of one representative
/// per pair and returns the minimum total weight together with the winning
/// node sequence.
///
/// The frontier is a FIFO queue: every state must be expanded regardless
/// of cost, so there is nothing to gain from cost-ordered popping. The
/// search is kept subexponential in the number of orderings by a dense
/// table of best weights keyed by `(visited mask, ending node)`; a
/// transition is only admitted when it strictly improves that entry, which
/// prunes every node order that reaches the same subset more expensively
/// through the same endpoint.
pub fn optimal_min(matrix: &DistanceMatrix) -> Result<(Weight, Vec<Node>), SolverError> {
    let pairing = PairingIndex::try_new(matrix.number_of_nodes())?;

    let n = matrix.len();
    if n == 0 {
        // Zero pairs are vacuously covered by the empty path.
        return Ok((0.0, Vec::new()));
    }

    // Best known weight per (mask, ending node). The key domain is dense
    // and known up front, so a flat arena beats any keyed map.
    let mut best = vec![Weight::INFINITY; (1usize << n) * n];

    // Every node is a legal path start in a complete graph.
    let mut frontier = VecDeque::with_capacity(n);
    for u in matrix.vertices_range() {
        let mask = 1usize << u;
        best[mask * n + u as usize] = 0.0;
        frontier.push_back(SearchState {
            current: u,
            mask,
            weight: 0.0,
            pairs_visited: 1,
            path: smallvec![u],
        });
    }

    let mut min_weight = Weight::INFINITY;
    let mut min_path = Vec::new();

    while let Some(state) = frontier.pop_front() {
        if state.pairs_visited == pairing.number_of_pairs() {
            if state.weight < min_weight {
                trace!(
                    "improve best weight to {} with path {:?}",
                    state.weight, state.path
                );
                min_weight = state.weight;
                min_path = state.path.to_vec();
            }
            continue;
        }

        for candidate in matrix.vertices_range() {
            let bit = 1usize << candidate;

            // The mask holds exactly the nodes on the path, so two lookups
            // reject both revisits and pairs that already contributed
            // their representative.
            if state.mask & bit != 0 {
                continue;
            }
            if state.mask & (1usize << pairing.partner(candidate)) != 0 {
                continue;
            }

            let new_mask = state.mask | bit;
            let new_weight = state.weight + matrix.weight(state.current, candidate);

            let entry = &mut best[new_mask * n + candidate as usize];
            if new_weight < *entry {
                *entry = new_weight;

                let mut path = state.path.clone();
                path.push(candidate);
                frontier.push_back(SearchState {
                    current: candidate,
                    mask: new_mask,
                    weight: new_weight,
                    pairs_visited: state.pairs_visited + 1,
                    path,
                });
            }
        }
    }

    Ok((min_weight, min_path))
}
