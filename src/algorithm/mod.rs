//! # Algorithms
//!
//! Methods to find an initial feasible solution for a transportation problem.
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display};

use crate::data::number::Quantity;
use crate::data::transportation::{Problem, Solution};

pub mod northwest_corner;

/// Compute an initial feasible solution with the Northwest Corner Method.
///
/// None of the arguments are modified; the solution contains copies of the supply and demand.
///
/// # Arguments
///
/// * `supply`: Amount available at each origin.
/// * `demand`: Amount required at each destination.
/// * `cost`: Unit cost for each origin (row) and destination (column), of shape `supply.len()` x
/// `demand.len()`.
///
/// # Errors
///
/// If the shape of the cost matrix doesn't match the vectors, if the total supply and demand
/// differ or if a total doesn't fit in `F`. No steps are computed in any of these cases.
pub fn solve<F: Quantity>(
    supply: &[F],
    demand: &[F],
    cost: &[Vec<F>],
) -> Result<Solution<F>, SolveError<F>> {
    Problem::new(supply.to_vec(), demand.to_vec(), cost.to_vec())?.solve()
}

/// The reason a problem could not be solved.
///
/// All of these are detected before the first allocation is made, except for an overflow while
/// accumulating the total cost.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolveError<F> {
    /// The total supply and total demand differ.
    ImbalancedProblem {
        #[allow(missing_docs)]
        total_supply: F,
        #[allow(missing_docs)]
        total_demand: F,
    },
    /// The problem is empty, or the shape of the cost matrix doesn't match the number of origins
    /// and destinations.
    ///
    /// The contained `String` is a message for the end user.
    MalformedInput(String),
    /// A total doesn't fit in the number type used.
    ///
    /// The contained `String` names the total.
    Overflow(String),
}

impl<F: Display> Display for SolveError<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::ImbalancedProblem { total_supply, total_demand } => write!(
                f,
                "The total supply ({}) must equal the total demand ({})", total_supply, total_demand,
            ),
            SolveError::MalformedInput(description) => write!(f, "Malformed input: {}", description),
            SolveError::Overflow(total) => write!(f, "The {} is too large", total),
        }
    }
}

impl<F: Display + Debug> Error for SolveError<F> {}
