use super::*;
use crate::errors::SolverError;

/// Fixed bijection between each node and its pair partner.
///
/// Pairs are `{2k, 2k+1}`, so the partner of a node is its index with the
/// lowest bit flipped. Construction fails for odd node counts since the
/// last node would be left without a partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairingIndex {
    number_of_nodes: NumNodes,
}

impl PairingIndex {
    pub fn try_new(number_of_nodes: NumNodes) -> Result<Self, SolverError> {
        if number_of_nodes % 2 != 0 {
            return Err(SolverError::OddNodeCount);
        }

        Ok(Self { number_of_nodes })
    }

    pub fn partner(&self, u: Node) -> Node {
        debug_assert!(u < self.number_of_nodes);
        u ^ 1
    }

    pub fn number_of_pairs(&self) -> NumNodes {
        self.number_of_nodes / 2
    }

    /// Iterates over the lower member of each pair.
    pub fn pair_bases(&self) -> impl Iterator<Item = Node> {
        (0..self.number_of_nodes).step_by(2)
    }
}
