//! # Problem files
//!
//! Small transportation problems stored in the `.tp` format.
use std::path::{Path, PathBuf};

use northwest_corner::data::transportation::Solution;
use northwest_corner::io::import;

#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("tp")
}

type T = u64;

fn solve(name: &str) -> Solution<T> {
    let problem = import::<T>(&get_test_file_path(name)).unwrap();
    problem.solve().unwrap()
}
