//! # Dense matrix
//!
//! Cost tables and allocation tables are stored in a `DenseMatrix`. The number of columns is
//! stored separately, such that the shape stays known even when there are no rows.
use std::fmt;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

/// Uses a row-major `Vec<Vec<F>>` as underlying data structure. Indices start at `0`.
///
/// Dimensions are fixed at creation and change only through the explicit row and column methods.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix.
    /// * `nr_columns`: Length that each of the rows should have.
    ///
    /// # Errors
    ///
    /// A description of the first row that doesn't have length `nr_columns`.
    pub fn from_data(data: Vec<Vec<F>>, nr_columns: usize) -> Result<Self, String> {
        if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
            return Err(format!(
                "Row {} has {} values, expected {}", i, row.len(), nr_columns,
            ));
        }

        Ok(Self { nr_rows: data.len(), data, nr_columns })
    }

    /// Create a matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self
    where
        F: Zero + Clone,
    {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Get all values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the values in column `j`, from the top row down.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| &row[j])
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[F]> + '_ {
        self.data.iter().map(Vec::as_slice)
    }

    /// Append a row at the bottom of the matrix.
    pub fn push_row(&mut self, row: Vec<F>) {
        debug_assert_eq!(row.len(), self.nr_columns);

        self.data.push(row);
        self.nr_rows += 1;
    }

    /// Append a column at the right of the matrix, with all values equal to `value`.
    pub fn push_column(&mut self, value: F)
    where
        F: Clone,
    {
        for row in &mut self.data {
            row.push(value.clone());
        }
        self.nr_columns += 1;
    }

    /// Remove row `i`, moving all rows below it up by one.
    pub fn remove_row(&mut self, i: usize) -> Vec<F> {
        debug_assert!(i < self.nr_rows);

        self.nr_rows -= 1;
        self.data.remove(i)
    }

    /// Remove column `j`, moving all columns right of it to the left by one.
    pub fn remove_column(&mut self, j: usize) {
        debug_assert!(j < self.nr_columns);

        for row in &mut self.data {
            row.remove(j);
        }
        self.nr_columns -= 1;
    }

    /// Sum of the values in each row.
    pub fn row_sums(&self) -> Vec<F>
    where
        F: Copy + Sum,
    {
        self.data.iter().map(|row| row.iter().copied().sum()).collect()
    }

    /// Sum of the values in each column.
    pub fn column_sums(&self) -> Vec<F>
    where
        F: Copy + Sum,
    {
        (0..self.nr_columns).map(|j| self.column(j).copied().sum()).collect()
    }

    /// Number of values that are not zero.
    pub fn nr_non_zero(&self) -> usize
    where
        F: Zero,
    {
        self.data.iter().flatten().filter(|value| !value.is_zero()).count()
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of values in this matrix.
    pub fn size(&self) -> usize {
        self.nr_rows * self.nr_columns
    }

    /// Get the data of this matrix.
    pub fn into_data(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &mut self.data[i][j]
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.data.iter()
            .flatten()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1) + 1;

        for row in &self.data {
            for value in row {
                write!(f, "{0:>width$}", value, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;

    fn costs() -> DenseMatrix<u32> {
        DenseMatrix::from_data(vec![
            vec![2, 3, 1],
            vec![5, 4, 8],
        ], 3).unwrap()
    }

    #[test]
    fn from_data() {
        let matrix = costs();
        assert_eq!(matrix.nr_rows(), 2);
        assert_eq!(matrix.nr_columns(), 3);
        assert_eq!(matrix.size(), 6);
        assert_eq!(matrix[(1, 2)], 8);

        let result = DenseMatrix::from_data(vec![vec![1_u32, 2], vec![3]], 2);
        assert_eq!(result, Err("Row 1 has 1 values, expected 2".to_string()));

        let empty = DenseMatrix::<u32>::from_data(vec![], 4).unwrap();
        assert_eq!(empty.nr_rows(), 0);
        assert_eq!(empty.nr_columns(), 4);
    }

    #[test]
    fn rows_and_columns() {
        let mut matrix = costs();
        assert_eq!(matrix.row(0), &[2, 3, 1]);
        assert_eq!(matrix.column(1).copied().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(matrix.row_sums(), vec![6, 17]);
        assert_eq!(matrix.column_sums(), vec![7, 7, 9]);

        matrix.push_column(0);
        matrix.push_row(vec![3, 6, 2, 9]);
        assert_eq!(matrix.nr_rows(), 3);
        assert_eq!(matrix.nr_columns(), 4);
        assert_eq!(matrix.row(0), &[2, 3, 1, 0]);

        assert_eq!(matrix.remove_row(1), vec![5, 4, 8, 0]);
        matrix.remove_column(0);
        assert_eq!(matrix.into_data(), vec![vec![3, 1, 0], vec![6, 2, 9]]);
    }

    #[test]
    fn non_zero_and_zeros() {
        let mut matrix = DenseMatrix::<u64>::zeros(2, 2);
        assert_eq!(matrix.nr_non_zero(), 0);
        matrix[(0, 1)] = 7;
        assert_eq!(matrix.nr_non_zero(), 1);
    }

    #[test]
    fn display() {
        let matrix = DenseMatrix::from_data(vec![vec![1_u32, 20], vec![300, 4]], 2).unwrap();
        assert_eq!(matrix.to_string(), "   1  20\n 300   4\n");
    }
}
