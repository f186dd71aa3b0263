use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{crate_version, Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

use simplex::algorithm::{Settings, solve_with, SolveError};
use simplex::algorithm::two_phase::Phase;
use simplex::algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;
use simplex::data::linear_program::general_form::GeneralForm;
use simplex::data::number_types::Rational;
use simplex::io::{import, read};

/// Exact tableau simplex solver for linear programs in the LP text format.
#[derive(Parser)]
#[command(version = crate_version!(), author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description, the standard input is read if absent
    problem_file: Option<PathBuf>,
    /// Log more, repeat for even more output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Strategy to choose the entering variable
    #[arg(long, value_enum, default_value_t = PivotRule::Bland)]
    pivot_rule: PivotRule,
    /// Give up after this many pivots
    #[arg(long)]
    iteration_limit: Option<usize>,
    /// Print the number of pivots of each phase
    #[arg(long)]
    statistics: bool,
    /// Print the problem as it was read
    #[arg(long)]
    show_program: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum PivotRule {
    /// Lowest index first, never cycles
    Bland,
    /// Most negative relative cost first, may cycle
    LargestCoefficient,
}

impl From<PivotRule> for PivotRuleKind {
    fn from(rule: PivotRule) -> Self {
        match rule {
            PivotRule::Bland => PivotRuleKind::Bland,
            PivotRule::LargestCoefficient => PivotRuleKind::LargestCoefficient,
        }
    }
}

/// Input that can't be read or parsed.
const EXIT_INPUT_ERROR: u8 = 1;
/// No result within the iteration limit.
const EXIT_ITERATION_LIMIT: u8 = 2;

fn main() -> ExitCode {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new().filter_level(level).parse_default_env().init();

    match run(&opts) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{:?}", error);
            ExitCode::from(EXIT_INPUT_ERROR)
        },
    }
}

fn run(opts: &Opts) -> Result<ExitCode> {
    let general: GeneralForm<Rational> = match &opts.problem_file {
        Some(path) => import(path)
            .with_context(|| format!("Couldn't read problem file \"{}\"", path.display()))?,
        None => read(io::stdin().lock())
            .context("Couldn't read the problem from the standard input")?,
    };
    if opts.show_program {
        println!("{}", general);
    }

    let program = general.derive_standard_form()
        .context("Problem is inconsistent")?;
    log::trace!("Standard form:\n{}", program);

    let settings = Settings {
        pivot_rule: opts.pivot_rule.into(),
        iteration_limit: opts.iteration_limit,
    };
    match solve_with(&program, &settings) {
        Ok((result, statistics)) => {
            println!("{}", general.compute_solution(result));
            if opts.statistics {
                println!(
                    "pivots: {} ({} in phase one, {} in phase two)",
                    statistics.total_iterations(),
                    statistics.iterations(Phase::One),
                    statistics.iterations(Phase::Two),
                );
            }

            Ok(ExitCode::SUCCESS)
        },
        Err(error @ SolveError::IterationLimit(_)) => {
            eprintln!("{}", error);
            Ok(ExitCode::from(EXIT_ITERATION_LIMIT))
        },
        Err(error) => Err(error).context("Solving failed"),
    }
}
