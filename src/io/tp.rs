//! # Transportation problem files
//!
//! A small line based format. Lines starting with `#` are comments and empty lines are skipped.
//! Keywords are not case sensitive.
//!
//! ```text
//! SUPPLY 20 30 25
//! DEMAND 15 25 35
//! COSTS
//! 2 3 1
//! 5 4 8
//! 3 6 2
//! ```
//!
//! The `SUPPLY` and `DEMAND` lines appear once each, in any order, before the `COSTS` line. After
//! it, every line up to the end of the file is a row of unit costs, one row per origin.
use std::fmt::Write;

use itertools::Itertools;

use crate::data::number::Quantity;
use crate::data::transportation::Problem;
use crate::io::error::{FileLocation, Import, Inconsistency, Parse};

const COMMENT_INDICATOR: &str = "#";
const SUPPLY: &str = "SUPPLY";
const DEMAND: &str = "DEMAND";
const COSTS: &str = "COSTS";

/// Parse a problem in the `.tp` format.
///
/// # Arguments
///
/// * `program`: The entire file contents.
///
/// # Errors
///
/// Parse errors if the file is syntactically wrong, inconsistency errors if the shape of the cost
/// table doesn't match the supply and demand.
pub fn parse<F: Quantity>(program: &str) -> Result<Problem<F>, Import> {
    let mut lines = into_lines(program);

    let (supply, demand) = parse_header(&mut lines)
        .map_err(|error| Parse::with_cause("Could not read the supply and demand.", error))?;

    let cost = lines
        .map(|location| parse_values(location.1, location))
        .collect::<Result<Vec<Vec<F>>, _>>()
        .map_err(|error| Parse::with_cause("Could not read the costs.", error))?;

    if cost.len() != supply.len() {
        return Err(Inconsistency::new(format!(
            "There are {} rows of costs, but {} origins", cost.len(), supply.len(),
        )).into());
    }
    if let Some((i, row)) = cost.iter().enumerate().find(|(_, row)| row.len() != demand.len()) {
        return Err(Inconsistency::new(format!(
            "Cost row {} has {} values, but there are {} destinations", i + 1, row.len(), demand.len(),
        )).into());
    }

    Problem::new(supply, demand, cost)
        .map_err(|error| Inconsistency::new(error.to_string()).into())
}

/// Write a problem in the `.tp` format.
pub fn write<F: Quantity>(problem: &Problem<F>) -> String {
    let mut text = String::new();
    // Writing to a `String` doesn't fail
    let _ = writeln!(text, "{} {}", SUPPLY, problem.supply().iter().join(" "));
    let _ = writeln!(text, "{} {}", DEMAND, problem.demand().iter().join(" "));
    let _ = writeln!(text, "{}", COSTS);
    for row in problem.cost().rows() {
        let _ = writeln!(text, "{}", row.iter().join(" "));
    }

    text
}

/// Split the file into numbered lines, skipping comments and empty lines.
fn into_lines(text: &str) -> impl Iterator<Item = FileLocation<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line)) // Count from 1
        .filter(|(_, line)| !line.trim_start().starts_with(COMMENT_INDICATOR))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Read the `SUPPLY` and `DEMAND` lines, up to and including the `COSTS` line.
fn parse_header<'a, F: Quantity>(
    lines: &mut impl Iterator<Item = FileLocation<'a>>,
) -> Result<(Vec<F>, Vec<F>), Parse> {
    let mut supply = None;
    let mut demand = None;

    loop {
        let location @ (_, line) = lines.next()
            .ok_or_else(|| Parse::new(format!("The file ended before the {} section.", COSTS)))?;
        let (keyword, rest) = split_keyword(line);

        let target = match keyword.to_ascii_uppercase().as_str() {
            SUPPLY => &mut supply,
            DEMAND => &mut demand,
            COSTS if rest.trim().is_empty() => break,
            COSTS => return Err(Parse::with_file_location(
                format!("The {} line should not contain values.", COSTS), location,
            )),
            _ => return Err(Parse::with_file_location(
                format!("Unknown keyword \"{}\", expected {}, {} or {}.", keyword, SUPPLY, DEMAND, COSTS),
                location,
            )),
        };
        if target.is_some() {
            return Err(Parse::with_file_location(
                format!("Keyword \"{}\" appears twice.", keyword), location,
            ));
        }
        *target = Some(parse_values(rest, location)?);
    }

    let supply = supply.ok_or_else(|| Parse::new(format!("There is no {} line.", SUPPLY)))?;
    let demand = demand.ok_or_else(|| Parse::new(format!("There is no {} line.", DEMAND)))?;
    Ok((supply, demand))
}

/// Split a line into its first word and the rest.
fn split_keyword(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(index) => line.split_at(index),
        None => (line, ""),
    }
}

/// Parse whitespace separated nonnegative integers.
fn parse_values<F: Quantity>(text: &str, location: FileLocation) -> Result<Vec<F>, Parse> {
    text.split_whitespace()
        .map(|value| value.parse().map_err(|_| Parse::with_file_location(
            format!("Could not parse \"{}\" as a nonnegative integer.", value), location,
        )))
        .collect()
}
