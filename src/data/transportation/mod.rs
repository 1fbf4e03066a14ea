//! # Transportation problems
//!
//! A transportation problem consists of origins with a supply, destinations with a demand, and a
//! cost per unit for shipping from each origin to each destination. Origins are the rows of the
//! transportation table, destinations are its columns.
use crate::algorithm::SolveError;
use crate::algorithm::northwest_corner::northwest_corner;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number::Quantity;

mod allocation;
mod solution;
mod step;
pub(crate) mod table;

pub use allocation::Allocation;
pub use solution::Solution;
pub use step::{Move, Step};

/// A transportation problem of which the shape is known to be consistent.
///
/// The supply and demand vectors are never empty, and the cost matrix has a row for each origin
/// and a column for each destination. The problem need not be balanced; that is only checked when
/// solving.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Problem<F> {
    supply: Vec<F>,
    demand: Vec<F>,
    cost: DenseMatrix<F>,
}

impl<F: Quantity> Problem<F> {
    /// Create a new `Problem` after checking its shape.
    ///
    /// # Arguments
    ///
    /// * `supply`: Amount available at each origin.
    /// * `demand`: Amount required at each destination.
    /// * `cost`: Unit cost from each origin (row) to each destination (column).
    ///
    /// # Errors
    ///
    /// `SolveError::MalformedInput` when there are no origins or no destinations, or when the cost
    /// matrix doesn't have shape `supply.len()` x `demand.len()`.
    pub fn new(supply: Vec<F>, demand: Vec<F>, cost: Vec<Vec<F>>) -> Result<Self, SolveError<F>> {
        if supply.is_empty() {
            return Err(SolveError::MalformedInput("There are no origins".to_string()));
        }
        if demand.is_empty() {
            return Err(SolveError::MalformedInput("There are no destinations".to_string()));
        }
        if cost.len() != supply.len() {
            return Err(SolveError::MalformedInput(format!(
                "The cost matrix has {} rows, but there are {} origins", cost.len(), supply.len(),
            )));
        }
        let cost = DenseMatrix::from_data(cost, demand.len())
            .map_err(|description| SolveError::MalformedInput(format!(
                "The cost matrix doesn't have a column for each of the {} destinations: {}",
                demand.len(), description,
            )))?;

        Ok(Self { supply, demand, cost })
    }

    /// Compute an initial feasible solution with the Northwest Corner Method.
    ///
    /// The problem itself is not changed.
    ///
    /// # Errors
    ///
    /// `SolveError::ImbalancedProblem` if the total supply and demand differ and
    /// `SolveError::Overflow` if a total doesn't fit in `F`.
    pub fn solve(&self) -> Result<Solution<F>, SolveError<F>> {
        northwest_corner(&self.supply, &self.demand, &self.cost)
    }

    /// Add an origin with no supply and zero costs.
    pub fn add_origin(&mut self) {
        self.supply.push(F::zero());
        self.cost.push_row(vec![F::zero(); self.nr_destinations()]);
    }

    /// Add a destination with no demand and zero costs.
    pub fn add_destination(&mut self) {
        self.demand.push(F::zero());
        self.cost.push_column(F::zero());
    }

    /// Remove origin `i` together with its costs.
    ///
    /// # Return value
    ///
    /// Whether the origin was removed. The last remaining origin, or an index out of range, is
    /// never removed.
    pub fn remove_origin(&mut self, i: usize) -> bool {
        if i >= self.nr_origins() || self.nr_origins() == 1 {
            return false;
        }

        self.supply.remove(i);
        self.cost.remove_row(i);
        true
    }

    /// Remove destination `j` together with its costs.
    ///
    /// # Return value
    ///
    /// Whether the destination was removed. The last remaining destination, or an index out of
    /// range, is never removed.
    pub fn remove_destination(&mut self, j: usize) -> bool {
        if j >= self.nr_destinations() || self.nr_destinations() == 1 {
            return false;
        }

        self.demand.remove(j);
        self.cost.remove_column(j);
        true
    }

    /// Change the supply of origin `i`.
    pub fn set_supply(&mut self, i: usize, value: F) {
        self.supply[i] = value;
    }

    /// Change the demand of destination `j`.
    pub fn set_demand(&mut self, j: usize, value: F) {
        self.demand[j] = value;
    }

    /// Change the unit cost from origin `i` to destination `j`.
    pub fn set_cost(&mut self, i: usize, j: usize, value: F) {
        self.cost[(i, j)] = value;
    }

    /// Sum of the supply over all origins, `None` on overflow.
    pub fn total_supply(&self) -> Option<F> {
        F::checked_sum(&self.supply)
    }

    /// Sum of the demand over all destinations, `None` on overflow.
    pub fn total_demand(&self) -> Option<F> {
        F::checked_sum(&self.demand)
    }

    /// Whether total supply equals total demand.
    pub fn is_balanced(&self) -> bool {
        matches!(
            (self.total_supply(), self.total_demand()),
            (Some(supply), Some(demand)) if supply == demand
        )
    }

    #[allow(missing_docs)]
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    #[allow(missing_docs)]
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    #[allow(missing_docs)]
    pub fn cost(&self) -> &DenseMatrix<F> {
        &self.cost
    }

    /// Number of rows of the transportation table.
    pub fn nr_origins(&self) -> usize {
        self.supply.len()
    }

    /// Number of columns of the transportation table.
    pub fn nr_destinations(&self) -> usize {
        self.demand.len()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::SolveError;
    use crate::data::transportation::Problem;

    fn problem() -> Problem<u32> {
        Problem::new(
            vec![20, 30, 25],
            vec![15, 25, 35],
            vec![
                vec![2, 3, 1],
                vec![5, 4, 8],
                vec![3, 6, 2],
            ],
        ).unwrap()
    }

    #[test]
    fn shape_is_checked() {
        assert!(matches!(
            Problem::<u32>::new(vec![], vec![1], vec![]),
            Err(SolveError::MalformedInput(_)),
        ));
        assert!(matches!(
            Problem::<u32>::new(vec![1], vec![], vec![vec![]]),
            Err(SolveError::MalformedInput(_)),
        ));
        assert!(matches!(
            Problem::<u32>::new(vec![1, 1], vec![2], vec![vec![1]]),
            Err(SolveError::MalformedInput(_)),
        ));
        assert!(matches!(
            Problem::<u32>::new(vec![1, 1], vec![1, 1], vec![vec![1, 2], vec![3]]),
            Err(SolveError::MalformedInput(_)),
        ));
    }

    #[test]
    fn totals() {
        let mut problem = problem();
        assert_eq!(problem.total_supply(), Some(75));
        assert_eq!(problem.total_demand(), Some(75));
        assert!(problem.is_balanced());

        problem.set_demand(2, 36);
        assert!(!problem.is_balanced());

        let overflowing = Problem::<u8>::new(vec![200, 100], vec![44, 0], vec![vec![0, 0]; 2]).unwrap();
        assert_eq!(overflowing.total_supply(), None);
        assert!(!overflowing.is_balanced());
    }

    #[test]
    fn add_and_remove() {
        let mut problem = problem();

        problem.add_origin();
        assert_eq!(problem.nr_origins(), 4);
        assert_eq!(problem.supply(), &[20, 30, 25, 0]);
        assert_eq!(problem.cost().row(3), &[0, 0, 0]);

        problem.add_destination();
        assert_eq!(problem.nr_destinations(), 4);
        assert_eq!(problem.demand(), &[15, 25, 35, 0]);
        assert_eq!(problem.cost().row(0), &[2, 3, 1, 0]);
        assert_eq!(problem.cost().row(3), &[0, 0, 0, 0]);

        assert!(problem.remove_origin(1));
        assert_eq!(problem.supply(), &[20, 25, 0]);
        assert_eq!(problem.cost().row(1), &[3, 6, 2, 0]);

        assert!(problem.remove_destination(0));
        assert_eq!(problem.demand(), &[25, 35, 0]);
        assert_eq!(problem.cost().row(0), &[3, 1, 0]);

        assert!(!problem.remove_origin(3));
        assert!(!problem.remove_destination(7));
    }

    #[test]
    fn last_origin_and_destination_stay() {
        let mut problem = Problem::new(vec![5_u64], vec![5], vec![vec![1]]).unwrap();
        assert!(!problem.remove_origin(0));
        assert!(!problem.remove_destination(0));
        assert_eq!(problem.nr_origins(), 1);
        assert_eq!(problem.nr_destinations(), 1);
    }

    #[test]
    fn set_values() {
        let mut problem = problem();
        problem.set_supply(0, 10);
        problem.set_cost(2, 1, 9);
        assert_eq!(problem.supply()[0], 10);
        assert_eq!(problem.cost()[(2, 1)], 9);
    }
}
