//! AOC CLI - scaffold, run and track Advent of Code solutions

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;
mod scaffold;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use error::CliError;
use executor::{Executor, InputSource};
use output::OutputFormatter;
use scaffold::Scaffolder;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let formatter = OutputFormatter::new(config.quiet);

    match config.command {
        Command::New { day, title } => {
            let scaffolder = Scaffolder::new(&config.root, config.year);
            let report = scaffolder.scaffold(day, title.as_deref(), scaffold::prompt_overwrite)?;
            if !config.quiet {
                for path in report.written.iter().chain(&report.inputs_created) {
                    println!("Created {}", path.display());
                }
                if report.module_registered {
                    println!("Registered day_{} in year_{}/mod.rs", day, config.year);
                }
            }
        }
        Command::Run {
            day,
            part,
            example,
            input,
        } => {
            let executor = Executor::new(build_registry(config.year)?, &config.root, config.year);
            let report = executor.run(day, part, InputSource::from_flags(example, input))?;
            formatter.print_run(&report)?;
        }
        Command::Status => {
            let executor = Executor::new(build_registry(config.year)?, &config.root, config.year);
            formatter.print_status(config.year, &executor.status());
        }
    }
    Ok(())
}

/// Build a registry of every linked solver for `year`
fn build_registry(year: u16) -> Result<aoc_solver::SolverRegistry, CliError> {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == year)?
        .build();
    log::debug!(
        "registered {} solver(s) for {}",
        registry.storage().len(),
        year
    );
    Ok(registry)
}
