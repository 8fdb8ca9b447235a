//! Debt snowball calculator
//!
//! Prompts for an extra monthly allocation and a list of debts (or loads them
//! from a JSON scenario), runs the snowball simulation and prints a report.

mod input;
mod report;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use debt_snowball_core::{NoopObserver, SimulationConfig, Simulator};
use report::Report;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "debt-snowball", version, about = "Debt snowball payoff simulator")]
struct Args {
    /// Load debts and allocation from a JSON scenario instead of prompting
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Stop after this many periods if debts remain
    #[arg(long)]
    max_periods: Option<usize>,

    /// Print the final summary as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Skip the per-period summaries
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut config = match &args.scenario {
        Some(path) => SimulationConfig::from_path(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => match read_scenario(&mut out)? {
            Some(config) => config,
            None => {
                writeln!(out, "No debts entered. Exiting...")?;
                return Ok(());
            }
        },
    };
    if let Some(max_periods) = args.max_periods {
        config.max_periods = max_periods;
    }

    let mut sim = Simulator::from_config(&config)?;
    tracing::info!(
        debts = sim.debts().len(),
        extra_allocation = %sim.extra_allocation(),
        max_periods = sim.max_periods(),
        "starting simulation"
    );

    if args.json {
        let summary = sim.run();
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut report = Report::new(out, sim.debts(), config.periods_per_year);
    report.header(sim.extra_allocation())?;
    report.initial_balances(sim.debts())?;

    let mut write_error = None;
    let summary = sim.run_with(sim.max_periods(), &mut NoopObserver, |result| {
        let written = if args.quiet {
            result.payoffs.iter().try_for_each(|payoff| report.payoff(payoff))
        } else {
            report.period(result)
        };
        match written {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                write_error = Some(err);
                ControlFlow::Break(())
            }
        }
    });
    if let Some(err) = write_error {
        return Err(err).context("writing report");
    }

    report.final_summary(&summary)?;
    report.flush()?;
    Ok(())
}

/// Prompt for the allocation and debts on stdin
///
/// Returns `None` when no usable scenario was entered.
fn read_scenario<W: Write>(out: &mut W) -> Result<Option<SimulationConfig>> {
    writeln!(out, "=== Debt Snowball Calculator ===\n")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let Some(allocation) = input::prompt_allocation(&mut input, out)? else {
        return Ok(None);
    };
    let debts = input::prompt_debts(&mut input, out)?;
    if debts.is_empty() {
        return Ok(None);
    }

    Ok(Some(SimulationConfig::new(debts, allocation)))
}
