use std::ops::Range;

use thiserror::Error;

use super::*;
use crate::errors::InvariantCheck;

/// Complete symmetric distance matrix in flat row-major storage.
///
/// The matrix is trusted input: the solvers only validate the node count.
/// Harnesses that generate instances can verify structure up front through
/// the [`InvariantCheck`] implementation.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    weights: Vec<Weight>,
    number_of_nodes: NumNodes,
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MatrixError {
    #[error("weight of edge {{{0}, {1}}} differs between directions")]
    Asymmetric(Node, Node),
    #[error("diagonal entry of node {0} is non-zero")]
    NonZeroDiagonal(Node),
    #[error("edge {{{0}, {1}}} has negative weight")]
    NegativeWeight(Node, Node),
}

impl DistanceMatrix {
    /// Creates an all-zero matrix over `n` nodes.
    pub fn new(n: NumNodes) -> Self {
        Self {
            weights: vec![0.0; (n as usize) * (n as usize)],
            number_of_nodes: n,
        }
    }

    /// Builds a matrix from row vectors. Panics if the rows do not form a
    /// square table.
    pub fn from_rows(rows: &[Vec<Weight>]) -> Self {
        let n = rows.len();
        let mut matrix = Self::new(n as NumNodes);
        for (u, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), n, "row {u} has wrong length");
            matrix.weights[u * n..(u + 1) * n].copy_from_slice(row);
        }
        matrix
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Return the number of nodes as usize
    pub fn len(&self) -> usize {
        self.number_of_nodes as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes
    }

    pub fn weight(&self, u: Node, v: Node) -> Weight {
        self.weights[u as usize * self.len() + v as usize]
    }

    /// Sets both directed entries of the edge `{u, v}`.
    pub fn set_weight(&mut self, u: Node, v: Node, weight: Weight) {
        let n = self.len();
        self.weights[u as usize * n + v as usize] = weight;
        self.weights[v as usize * n + u as usize] = weight;
    }
}

impl InvariantCheck<MatrixError> for DistanceMatrix {
    fn is_correct(&self) -> Result<(), MatrixError> {
        for u in self.vertices_range() {
            if self.weight(u, u) != 0.0 {
                return Err(MatrixError::NonZeroDiagonal(u));
            }
            for v in u + 1..self.number_of_nodes {
                if self.weight(u, v) < 0.0 {
                    return Err(MatrixError::NegativeWeight(u, v));
                }
                if self.weight(u, v) != self.weight(v, u) {
                    return Err(MatrixError::Asymmetric(u, v));
                }
            }
        }
        Ok(())
    }
}
