//! # Storing of transportation problems in memory
//!
//! This module provides the data structures used to represent transportation problems and their
//! solutions in memory. Algorithms may introduce their specific data structures in
//! `algorithm::my_algorithm`.

pub mod linear_algebra;
pub mod number;
pub mod transportation;
