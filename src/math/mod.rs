pub mod matrix;

pub use matrix::{dot, Matrix};
