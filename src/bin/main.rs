use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::{LevelFilter, Metadata, Record};

use northwest_corner::data::transportation::Problem;
use northwest_corner::io::import;

/// Initial feasible solutions of transportation problems with the Northwest Corner Method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description, the example problem is solved if omitted
    problem_file: Option<PathBuf>,
    /// Print the table after every allocation
    #[arg(long)]
    steps: bool,
    /// Only print the total cost
    #[arg(long, conflicts_with = "steps")]
    quiet: bool,
}

fn main() {
    init_logging();
    let opts = Opts::parse();

    let problem = match &opts.problem_file {
        Some(path) => {
            log::info!("Reading problem file: \"{}\"", path.to_string_lossy());
            match import::<u64>(path) {
                Ok(problem) => problem,
                Err(error) => {
                    eprintln!("Couldn't import the problem: {}", error);
                    exit(1);
                }
            }
        }
        None => example(),
    };

    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    };

    if opts.quiet {
        println!("{}", solution.total_cost());
        return;
    }
    if opts.steps {
        for step in solution.steps() {
            println!("{}", step);
        }
    }
    print!("{}", solution);
}

/// Three origins and three destinations.
fn example() -> Problem<u64> {
    let example = Problem::new(
        vec![20, 30, 25],
        vec![15, 25, 35],
        vec![
            vec![2, 3, 1],
            vec![5, 4, 8],
            vec![3, 6, 2],
        ],
    );

    match example {
        Ok(problem) => problem,
        Err(error) => unreachable!("example problem has a consistent shape: {}", error),
    }
}

fn init_logging() {
    static LOGGER: StderrLogger = StderrLogger;
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log_level_from_env());
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn log_level_from_env() -> LevelFilter {
    match std::env::var("NORTHWEST_CORNER_LOG").as_deref() {
        Ok("error") => LevelFilter::Error,
        Ok("warn") => LevelFilter::Warn,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        Ok("off") => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}
