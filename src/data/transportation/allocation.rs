//! # Allocations
//!
//! The values shipped from each origin to each destination, together with the cells that were
//! assigned a value by the algorithm. A cell can be assigned the value zero when a row and a
//! column are exhausted at the same time, so the values alone don't determine the basic cells.
use std::ops::Index;

use itertools::iproduct;
use num_traits::Zero;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number::Quantity;

/// A (partial) transportation plan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allocation<F> {
    values: DenseMatrix<F>,
    /// Assigned cells, in the order in which they were assigned.
    basic_cells: Vec<(usize, usize)>,
}

impl<F> Allocation<F> {
    /// An allocation in which no cell has been assigned yet.
    pub(crate) fn empty(nr_rows: usize, nr_columns: usize) -> Self
    where
        F: Zero + Clone,
    {
        Self {
            values: DenseMatrix::zeros(nr_rows, nr_columns),
            basic_cells: Vec::with_capacity((nr_rows + nr_columns).saturating_sub(1)),
        }
    }

    /// Assign a value to a cell that was not assigned before.
    pub(crate) fn assign(&mut self, i: usize, j: usize, amount: F) {
        debug_assert!(!self.is_assigned(i, j));

        self.values[(i, j)] = amount;
        self.basic_cells.push((i, j));
    }

    /// Whether cell (`i`, `j`) has been assigned a value.
    pub fn is_assigned(&self, i: usize, j: usize) -> bool {
        self.basic_cells.contains(&(i, j))
    }

    /// The assigned cells as (row, column) tuples, in order of assignment.
    pub fn basic_cells(&self) -> &[(usize, usize)] {
        &self.basic_cells
    }

    /// Number of cells assigned so far.
    pub fn nr_assigned(&self) -> usize {
        self.basic_cells.len()
    }

    /// Whether this allocation is `previous` with exactly one cell assigned in addition.
    pub fn extends(&self, previous: &Self) -> bool
    where
        F: PartialEq + Zero,
    {
        if self.nr_assigned() != previous.nr_assigned() + 1
            || !self.basic_cells.starts_with(&previous.basic_cells) {
            return false;
        }

        let new_cell = self.basic_cells[previous.nr_assigned()];
        iproduct!(0..self.values.nr_rows(), 0..self.values.nr_columns())
            .filter(|&cell| cell != new_cell)
            .all(|cell| self.values[cell] == previous.values[cell])
            && previous.values[new_cell].is_zero()
    }

    /// Unit-weighted cost of this plan, `None` if it doesn't fit in `F`.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost per unit for each cell, should have the same shape as this allocation.
    pub fn total_cost(&self, cost: &DenseMatrix<F>) -> Option<F>
    where
        F: Quantity,
    {
        debug_assert_eq!(cost.nr_rows(), self.values.nr_rows());
        debug_assert_eq!(cost.nr_columns(), self.values.nr_columns());

        iproduct!(0..self.values.nr_rows(), 0..self.values.nr_columns())
            .try_fold(F::zero(), |total, cell| {
                self.values[cell].checked_mul(&cost[cell])
                    .and_then(|cell_cost| total.checked_add(&cell_cost))
            })
    }

    /// Values of all cells, zero for cells that were not assigned.
    pub fn values(&self) -> &DenseMatrix<F> {
        &self.values
    }

    /// Take the values of all cells.
    pub fn into_values(self) -> DenseMatrix<F> {
        self.values
    }

    #[allow(missing_docs)]
    pub fn nr_rows(&self) -> usize {
        self.values.nr_rows()
    }

    #[allow(missing_docs)]
    pub fn nr_columns(&self) -> usize {
        self.values.nr_columns()
    }
}

impl<F> Index<(usize, usize)> for Allocation<F> {
    type Output = F;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.values[index]
    }
}
