pub mod matrix;
pub mod pairing;

pub type Node = u32;
pub type NumNodes = Node;
pub type Weight = f64;

pub use matrix::*;
pub use pairing::*;
