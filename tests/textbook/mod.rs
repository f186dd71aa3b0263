//! # Small textbook problems
//!
//! Each problem is stored in an `.lp` file next to this module, and is solved through the public
//! interface only: read the file, derive the standard form, solve, report.
use std::path::{Path, PathBuf};

use simplex::algorithm::{Settings, solve_with};
use simplex::algorithm::two_phase::Statistics;
use simplex::data::linear_program::elements::LinearProgramType;
use simplex::data::number_types::Rational;
use simplex::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the lp files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
pub(crate) fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("lp")
}

/// Read and solve a problem file with the given settings.
fn solve_file(name: &str, settings: &Settings) -> (LinearProgramType<Rational>, Statistics) {
    let general = import::<Rational>(&get_test_file_path(name)).unwrap();
    let program = general.derive_standard_form().unwrap();
    let (result, statistics) = solve_with(&program, settings).unwrap();

    (general.compute_solution(result), statistics)
}
