pub mod matrix_reader;
pub use matrix_reader::*;
