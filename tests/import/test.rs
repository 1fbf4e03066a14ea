use northwest_corner::SolveError;
use northwest_corner::data::transportation::Move;
use northwest_corner::io::error::Import;
use northwest_corner::io::import;

use crate::import::{T, get_test_file_path, problem_file_directory, solve};

#[test]
fn example() {
    let solution = solve("example");

    assert_eq!(*solution.total_cost(), 255);
    assert_eq!(solution.steps().len(), 5);
    assert_eq!(
        solution.allocation().values().clone().into_data(),
        vec![vec![15, 5, 0], vec![0, 20, 10], vec![0, 0, 25]],
    );
}

#[test]
fn degenerate() {
    let solution = solve("degenerate");

    assert_eq!(*solution.total_cost(), 20);
    assert_eq!(solution.nr_degenerate_steps(), 3);
    assert_eq!(solution.moves()[Move::Row], 2);
    assert_eq!(solution.moves()[Move::Column], 3);
}

#[test]
fn unbalanced() {
    let problem = import::<T>(&get_test_file_path("unbalanced")).unwrap();
    assert_eq!(
        problem.solve(),
        Err(SolveError::ImbalancedProblem { total_supply: 10, total_demand: 11 }),
    );
}

#[test]
fn ragged() {
    let result = import::<T>(&get_test_file_path("ragged"));
    assert!(matches!(result, Err(Import::Inconsistency(_))));
}

#[test]
fn negative() {
    match import::<T>(&get_test_file_path("negative")) {
        Err(Import::Parse(error)) => assert_eq!(error.line_number(), Some(5)),
        other => panic!("{:?}", other),
    }
}

#[test]
fn missing_file() {
    let result = import::<T>(&get_test_file_path("does_not_exist"));
    assert!(matches!(result, Err(Import::IO(_))));
}

#[test]
fn unknown_extension() {
    let result = import::<T>(&problem_file_directory().join("example.txt"));
    assert!(matches!(result, Err(Import::FileExtension(_))));
}
