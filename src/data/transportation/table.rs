//! # Transportation tables
//!
//! Text rendering of a transportation table: the values of each cell, with the supply of each
//! origin on the right and the demand of each destination at the bottom.
use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::matrix::DenseMatrix;

const SUPPLY: &str = "Supply";
const DEMAND: &str = "Demand";

/// Write a transportation table.
///
/// # Arguments
///
/// * `values`: Contents of the cells.
/// * `supply`: One value per row of `values`.
/// * `demand`: One value per column of `values`.
/// * `highlight`: Cell to mark with brackets, if any.
pub(crate) fn write_table<F: Display>(
    f: &mut fmt::Formatter,
    values: &DenseMatrix<F>,
    supply: &[F],
    demand: &[F],
    highlight: Option<(usize, usize)>,
) -> fmt::Result {
    debug_assert_eq!(values.nr_rows(), supply.len());
    debug_assert_eq!(values.nr_columns(), demand.len());

    let cells = values.rows()
        .enumerate()
        .map(|(i, row)| row.iter()
            .enumerate()
            .map(|(j, value)| if highlight == Some((i, j)) {
                format!("[{}]", value)
            } else {
                value.to_string()
            })
            .collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let supply = supply.iter().map(ToString::to_string).collect::<Vec<_>>();
    let demand = demand.iter().map(ToString::to_string).collect::<Vec<_>>();
    let header = (1..=values.nr_columns()).map(|j| format!("D{}", j)).collect::<Vec<_>>();

    let width = cells.iter().flatten()
        .chain(&supply)
        .chain(&demand)
        .chain(&header)
        .map(String::len)
        .chain(Some(SUPPLY.len()))
        .max()
        .unwrap_or(0) + 2;
    let label_width = DEMAND.len().max(format!("O{}", values.nr_rows()).len());

    let supply_header = SUPPLY.to_string();
    write_line(f, "", label_width, width, header.iter().chain(Some(&supply_header)))?;
    for (i, (row, row_supply)) in cells.iter().zip(&supply).enumerate() {
        let label = format!("O{}", i + 1);
        write_line(f, &label, label_width, width, row.iter().chain(Some(row_supply)))?;
    }
    write_line(f, DEMAND, label_width, width, demand.iter())
}

fn write_line<'a>(
    f: &mut fmt::Formatter,
    label: &str,
    label_width: usize,
    width: usize,
    entries: impl Iterator<Item = &'a String>,
) -> fmt::Result {
    write!(f, "{:<label_width$}", label)?;
    for entry in entries {
        write!(f, "{:>width$}", entry)?;
    }
    writeln!(f)
}
