//! # Linear algebra primitives
//!
//! Transportation tables are small and dense, so only a dense matrix representation is provided.

pub mod matrix;
