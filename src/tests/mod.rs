//! # Tests that follow a problem through the whole crate.
//!
//! Each `scenario_*` module solves a single small problem and checks the complete step history.
//! The `properties` module checks the invariants on generated problems.
