//! # Steps
//!
//! Every allocation made by the algorithm is recorded as a `Step`. Steps own deep copies of the
//! state they describe, so they remain valid after the algorithm moved on.
use std::fmt;
use std::fmt::Display;

use enum_map::Enum;

use crate::data::transportation::Allocation;
use crate::data::transportation::table::write_table;

/// Direction in which the cursor moves after an allocation.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Move {
    /// The supply of the origin was exhausted, continue with the next origin.
    Row,
    /// The demand of the destination was satisfied, continue with the next destination.
    Column,
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Move::Row => "row",
            Move::Column => "column",
        })
    }
}

/// Snapshot of a single allocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step<F> {
    /// Starts at `1`.
    number: usize,
    /// Remaining supply right before this step's allocation.
    supply: Vec<F>,
    /// Remaining demand right before this step's allocation.
    demand: Vec<F>,
    /// Allocation right after this step's assignment.
    allocation: Allocation<F>,
    cell: (usize, usize),
    amount: F,
    next: Move,
    /// Both the row and the column were exhausted by this step.
    degenerate: bool,
    description: String,
}

impl<F: Display> Step<F> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        number: usize,
        supply: Vec<F>,
        demand: Vec<F>,
        allocation: Allocation<F>,
        cell: (usize, usize),
        amount: F,
        next: Move,
        degenerate: bool,
    ) -> Self {
        debug_assert!(number > 0);
        debug_assert_eq!(allocation.nr_assigned(), number);

        let (i, j) = cell;
        let description = format!("Allocate {} units to cell ({}, {})", amount, i + 1, j + 1);

        Self { number, supply, demand, allocation, cell, amount, next, degenerate, description }
    }
}

impl<F> Step<F> {
    /// Position of this step in the history, counting from `1`.
    pub fn step_number(&self) -> usize {
        self.number
    }

    /// Remaining supply of each origin before the allocation of this step.
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    /// Remaining demand of each destination before the allocation of this step.
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// The allocation including the assignment made in this step.
    pub fn allocation(&self) -> &Allocation<F> {
        &self.allocation
    }

    /// Cell (row, column) that was filled.
    pub fn cell(&self) -> (usize, usize) {
        self.cell
    }

    #[allow(missing_docs)]
    pub fn row(&self) -> usize {
        self.cell.0
    }

    #[allow(missing_docs)]
    pub fn column(&self) -> usize {
        self.cell.1
    }

    /// Quantity assigned to the cell.
    pub fn amount(&self) -> &F {
        &self.amount
    }

    /// How the cursor moved after this step.
    pub fn next_move(&self) -> Move {
        self.next
    }

    /// Whether the row and column of this step were exhausted simultaneously.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Human-readable action, using 1-based cell coordinates.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<F: Display> Display for Step<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Step {}: {}", self.number, self.description)?;
        write_table(f, self.allocation.values(), &self.supply, &self.demand, Some(self.cell))?;
        if self.degenerate {
            writeln!(f, "Row and column exhausted together, moving to the next {}", self.next)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::transportation::{Allocation, Move, Step};

    fn step() -> Step<u32> {
        let mut allocation = Allocation::empty(2, 2);
        allocation.assign(0, 0, 10);

        Step::new(1, vec![10, 10], vec![10, 10], allocation, (0, 0), 10, Move::Row, true)
    }

    #[test]
    fn description() {
        let step = step();
        assert_eq!(step.description(), "Allocate 10 units to cell (1, 1)");
        assert_eq!(step.step_number(), 1);
        assert_eq!(step.cell(), (0, 0));
        assert_eq!((step.row(), step.column()), (0, 0));
        assert_eq!(step.next_move(), Move::Row);
        assert!(step.is_degenerate());
    }

    #[test]
    fn display() {
        let expected = "\
Step 1: Allocate 10 units to cell (1, 1)
            D1      D2  Supply
O1        [10]       0      10
O2           0       0      10
Demand      10      10
Row and column exhausted together, moving to the next row
";
        assert_eq!(step().to_string(), expected);
    }
}
