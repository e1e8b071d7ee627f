pub mod subset_dp;

pub use subset_dp::*;
