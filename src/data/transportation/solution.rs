//! # Representation of initial feasible solutions
//!
//! Once the allocation algorithm finished, a solution is derived. It contains the final plan and
//! its cost, but also the full history of steps that led to it, such that the construction can be
//! presented to the user.
use std::fmt;
use std::fmt::Display;

use enum_map::EnumMap;

use crate::data::transportation::{Allocation, Move, Step};
use crate::data::transportation::table::write_table;

/// Result of the Northwest Corner Method on a balanced problem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution<F> {
    /// All allocations, in the order in which they were made.
    steps: Vec<Step<F>>,
    allocation: Allocation<F>,
    total_cost: F,
    /// Supply as provided to the algorithm, not the remaining supply.
    supply: Vec<F>,
    /// Demand as provided to the algorithm, not the remaining demand.
    demand: Vec<F>,
}

impl<F> Solution<F> {
    pub(crate) fn new(
        steps: Vec<Step<F>>,
        allocation: Allocation<F>,
        total_cost: F,
        supply: Vec<F>,
        demand: Vec<F>,
    ) -> Self {
        debug_assert_eq!(steps.len(), allocation.nr_assigned());
        debug_assert_eq!(allocation.nr_rows(), supply.len());
        debug_assert_eq!(allocation.nr_columns(), demand.len());

        Self { steps, allocation, total_cost, supply, demand }
    }

    /// The step history.
    pub fn steps(&self) -> &[Step<F>] {
        &self.steps
    }

    /// The final transportation plan.
    pub fn allocation(&self) -> &Allocation<F> {
        &self.allocation
    }

    /// Sum over all cells of the allocated amount times the unit cost.
    pub fn total_cost(&self) -> &F {
        &self.total_cost
    }

    #[allow(missing_docs)]
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    #[allow(missing_docs)]
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// How often the cursor moved in each direction.
    pub fn moves(&self) -> EnumMap<Move, usize> {
        let mut counts = EnumMap::default();
        for step in &self.steps {
            counts[step.next_move()] += 1;
        }

        counts
    }

    /// Number of steps in which a row and a column were exhausted at the same time.
    pub fn nr_degenerate_steps(&self) -> usize {
        self.steps.iter().filter(|step| step.is_degenerate()).count()
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Allocation after {} steps", self.steps.len())?;
        write_table(f, self.allocation.values(), &self.supply, &self.demand, None)?;
        writeln!(f, "Total cost: {}", self.total_cost)
    }
}
