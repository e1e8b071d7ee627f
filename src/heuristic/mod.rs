pub mod greedy;

pub use greedy::*;
