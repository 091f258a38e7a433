use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod driver;
mod error;
mod logfile;
mod model;
mod plan;
mod render;

use driver::{PlotDriver, PlotOutcome};
use plan::{Plan, PlanSpec};
use render::PngSink;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "clocklog-plot")]
#[command(about = "Plot <Clocks> timing records from log files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot every combination of a plan (the built-in one unless --plan is given).
    Run {
        /// JSON plan file.
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Directory holding <dataset>.log files.
        #[arg(long)]
        logs: Option<PathBuf>,

        /// Directory receiving the PNG images.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Plot a single combination of datasets onto one image.
    Plot {
        #[arg(required = true)]
        datasets: Vec<String>,

        #[arg(long)]
        logs: Option<PathBuf>,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Print the built-in combinations, one per line.
    List,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("clocklog_plot=info"),
    )
    .init();

    let cli = Cli::parse();

    match cli.cmd.unwrap_or(Commands::Run {
        plan: None,
        logs: None,
        out: None,
    }) {
        Commands::Run { plan, logs, out } => {
            let spec = match plan {
                Some(path) => PlanSpec::from_file(&path)?,
                None => PlanSpec::builtin(),
            };
            let plan = override_dirs(spec.validate_and_build()?, logs, out);
            run_plan(&plan)?;
        }
        Commands::Plot {
            datasets,
            logs,
            out,
        } => {
            let spec = PlanSpec {
                combinations: vec![datasets],
                ..PlanSpec::builtin()
            };
            let plan = override_dirs(spec.validate_and_build()?, logs, out);
            run_plan(&plan)?;
        }
        Commands::List => {
            for combo in plan::BUILTIN_COMBINATIONS {
                println!("{}", combo.join(" "));
            }
        }
    }

    Ok(())
}

fn override_dirs(mut plan: Plan, logs: Option<PathBuf>, out: Option<PathBuf>) -> Plan {
    if let Some(logs) = logs {
        plan.logs_dir = logs;
    }
    if let Some(out) = out {
        plan.out_dir = out;
    }
    plan
}

/// Plot each combination in order; the first error ends the run.
fn run_plan(plan: &Plan) -> Result<()> {
    let mut driver = PlotDriver::from_plan(plan, PngSink);
    for combo in &plan.combinations {
        match driver.plot(combo)? {
            PlotOutcome::Written(path) => println!("Wrote {}", path.display()),
            PlotOutcome::Skipped { .. } | PlotOutcome::Empty => {}
        }
    }
    log::info!(
        "{} combination(s) processed from {}",
        driver.figures_started(),
        plan.logs_dir.display()
    );
    Ok(())
}
