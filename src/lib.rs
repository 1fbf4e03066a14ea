//! # A traced transportation problem allocator
//!
//! Initial feasible solutions of balanced transportation problems are computed using the Northwest
//! Corner Method. Every allocation is recorded as a step, such that the full construction of the
//! solution can be inspected or presented afterwards.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

pub use algorithm::{SolveError, solve};

#[cfg(test)]
mod tests;
