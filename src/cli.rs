use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use twentyfour::solver::constants::EXPECTED_INPUTS;
use twentyfour::{ExpressionSolver, Solution, SolverConfig, UtilsError, read_numbers};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Find every way to make 24 from four numbers
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Find every way to combine four numbers with + - * / to make 24")]
#[command(version)]
pub struct CliArgs {
    /// The four numbers to combine; read from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<f64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Try + and * in one operand order only, skipping mirrored duplicates
    #[arg(long)]
    pub prune: bool,

    /// Search on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Print the expression tree under each solution
    #[arg(long)]
    pub tree: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    /// `None` means the numbers are read from stdin
    pub numbers: Option<Vec<f64>>,
    pub log_level: LogLevel,
    pub solver: SolverConfig,
    pub show_tree: bool,
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let numbers = match args.numbers.len() {
            0 => None,
            EXPECTED_INPUTS => Some(args.numbers),
            found => {
                return Err(UtilsError::WrongCount {
                    expected: EXPECTED_INPUTS,
                    found,
                })
                .context("Invalid numbers");
            }
        };

        Ok(CliConfig {
            numbers,
            log_level: args.log_level,
            solver: SolverConfig {
                prune_commutative: args.prune,
                parallel: !args.sequential,
                ..SolverConfig::default()
            },
            show_tree: args.tree,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn prompt_for_numbers() -> Result<Vec<f64>> {
    print!("Enter {} numbers with spaces: ", EXPECTED_INPUTS);
    io::stdout().flush().context("Failed to write prompt")?;
    read_numbers(io::stdin().lock(), EXPECTED_INPUTS).context("Failed to read numbers")
}

/// Output lines for a finished search
pub fn report_lines(solutions: &[Solution], target: f64, show_tree: bool) -> Vec<String> {
    if solutions.is_empty() {
        return vec!["No solutions!".to_string()];
    }

    let mut lines = Vec::with_capacity(solutions.len());
    for solution in solutions {
        lines.push(format!("{} = {}", solution.infix, target));
        if show_tree {
            let tree = solution.expression.to_tree_string();
            lines.push(tree.trim_end().to_string());
        }
    }
    lines
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let numbers = match config.numbers {
        Some(numbers) => numbers,
        None => prompt_for_numbers()?,
    };

    let solver = ExpressionSolver::with_config(config.solver);

    info!(
        "Searching for expressions over {:?} that equal {}",
        numbers,
        solver.config().target
    );

    let solutions = solver
        .find_solutions_for(&numbers)
        .context("Invalid numbers")?;

    if solutions.is_empty() {
        warn!("No matching expression found");
    }

    for line in report_lines(&solutions, solver.config().target, config.show_tree) {
        println!("{}", line);
    }
    Ok(())
}
