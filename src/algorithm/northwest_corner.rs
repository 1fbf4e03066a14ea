//! # Northwest Corner Method
//!
//! Starting in the top left cell of the transportation table, repeatedly allocate as much as
//! possible to the current cell and move to the next row once the origin's supply runs out, or
//! to the next column once the destination's demand is met.
//!
//! When both are exhausted by the same allocation, the cursor moves to the next row, unless it is
//! already in the last row; then it moves to the next column. The next cell is still visited and
//! assigned a zero amount, which keeps the number of assigned cells at `rows + columns - 1` for
//! balanced problems.
use crate::algorithm::SolveError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number::Quantity;
use crate::data::transportation::{Allocation, Move, Solution, Step};

/// Compute an initial feasible solution, recording every allocation.
///
/// # Arguments
///
/// * `supply`: Amount available at each origin, not empty.
/// * `demand`: Amount required at each destination, not empty.
/// * `cost`: Unit costs, of shape `supply.len()` x `demand.len()`.
///
/// # Errors
///
/// `SolveError::ImbalancedProblem` when the total supply and demand differ, and
/// `SolveError::Overflow` when a total doesn't fit in `F`.
pub fn northwest_corner<F: Quantity>(
    supply: &[F],
    demand: &[F],
    cost: &DenseMatrix<F>,
) -> Result<Solution<F>, SolveError<F>> {
    debug_assert!(!supply.is_empty() && !demand.is_empty());
    debug_assert_eq!(cost.nr_rows(), supply.len());
    debug_assert_eq!(cost.nr_columns(), demand.len());

    let total_supply = F::checked_sum(supply)
        .ok_or_else(|| SolveError::Overflow("total supply".to_string()))?;
    let total_demand = F::checked_sum(demand)
        .ok_or_else(|| SolveError::Overflow("total demand".to_string()))?;
    if total_supply != total_demand {
        log::info!(
            "Problem is not balanced: total supply {} and total demand {}",
            total_supply, total_demand,
        );
        return Err(SolveError::ImbalancedProblem { total_supply, total_demand });
    }

    let (nr_rows, nr_columns) = (supply.len(), demand.len());
    let mut remaining_supply = supply.to_vec();
    let mut remaining_demand = demand.to_vec();
    let mut allocation = Allocation::empty(nr_rows, nr_columns);
    let mut total_cost = F::zero();
    let mut steps = Vec::with_capacity((nr_rows + nr_columns).saturating_sub(1));

    let mut cursor = Cursor::new(nr_rows, nr_columns);
    while cursor.is_inside() {
        let (i, j) = cursor.cell();
        let supply_before = remaining_supply.clone();
        let demand_before = remaining_demand.clone();

        let amount = remaining_supply[i].min(remaining_demand[j]);
        allocation.assign(i, j, amount);
        total_cost = amount.checked_mul(&cost[(i, j)])
            .and_then(|cell_cost| total_cost.checked_add(&cell_cost))
            .ok_or_else(|| SolveError::Overflow("total cost".to_string()))?;

        remaining_supply[i] = remaining_supply[i] - amount;
        remaining_demand[j] = remaining_demand[j] - amount;

        let supply_exhausted = remaining_supply[i].is_zero();
        let demand_exhausted = remaining_demand[j].is_zero();
        let next = cursor.advance(supply_exhausted, demand_exhausted);

        let step = Step::new(
            steps.len() + 1,
            supply_before,
            demand_before,
            allocation.clone(),
            (i, j),
            amount,
            next,
            supply_exhausted && demand_exhausted,
        );
        log::debug!("Step {}: {}, next {}", step.step_number(), step.description(), next);
        log::trace!("Remaining supply {:?}, remaining demand {:?}", remaining_supply, remaining_demand);
        steps.push(step);
    }
    debug_assert!(steps.len() < nr_rows + nr_columns);
    debug_assert!(remaining_supply.iter().chain(&remaining_demand).all(|value| value.is_zero()));

    log::info!(
        "Northwest corner method finished in {} steps with total cost {}",
        steps.len(), total_cost,
    );

    Ok(Solution::new(steps, allocation, total_cost, supply.to_vec(), demand.to_vec()))
}

/// Position in the transportation table of the next cell to fill.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Cursor {
    row: usize,
    column: usize,
    nr_rows: usize,
    nr_columns: usize,
}

impl Cursor {
    fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self { row: 0, column: 0, nr_rows, nr_columns }
    }

    fn cell(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Whether the cursor still points at a cell of the table.
    fn is_inside(&self) -> bool {
        self.row < self.nr_rows && self.column < self.nr_columns
    }

    /// Move to the next cell.
    ///
    /// At least one of the two arguments should be `true`.
    ///
    /// # Arguments
    ///
    /// * `supply_exhausted`: Whether the current row has no supply left.
    /// * `demand_exhausted`: Whether the current column has no demand left.
    ///
    /// # Return value
    ///
    /// The direction in which the cursor moved.
    fn advance(&mut self, supply_exhausted: bool, demand_exhausted: bool) -> Move {
        debug_assert!(self.is_inside());
        debug_assert!(supply_exhausted || demand_exhausted);

        let direction = match (supply_exhausted, demand_exhausted) {
            (true, true) if self.row + 1 < self.nr_rows => Move::Row,
            (true, true) => Move::Column,
            (true, false) => Move::Row,
            (false, _) => Move::Column,
        };

        match direction {
            Move::Row => self.row += 1,
            Move::Column => self.column += 1,
        }

        direction
    }
}
