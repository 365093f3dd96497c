use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

mod case;
mod report;

use case::{CaseResult, load_case};
use pf_hydraulics::{evaluate_duty, fitting_catalog};
use report::CaseReport;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "pipeflow CLI - pipe sizing and pumping cost calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size both candidate pipes for a case and print the report
    Size {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate a case file without computing anything
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// List the fitting catalog (ids, names, K values)
    Fittings,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Size { case_path, json } => cmd_size(&case_path, json),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Fittings => cmd_fittings(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_size(case_path: &Path, json: bool) -> CaseResult<()> {
    debug!(path = %case_path.display(), "loading case");
    let case = load_case(case_path)?;

    let eval = evaluate_duty(
        &case.duty(),
        &case.fluid_properties(),
        &case.velocity_bounds(),
        &case.fitting_selection(),
    )?;
    debug!(
        d_min_m = eval.high_velocity.point.diameter_m(),
        d_max_m = eval.low_velocity.point.diameter_m(),
        "duty evaluated"
    );

    // Nothing prints until both scenarios computed: all-or-nothing output.
    let case_report = CaseReport::new(case.name.clone(), &eval);
    if json {
        println!("{}", case_report.to_json()?);
    } else {
        print!("{}", case_report.render_text());
    }
    Ok(())
}

fn cmd_validate(case_path: &Path) -> CaseResult<()> {
    let case = load_case(case_path)?;
    match &case.name {
        Some(name) => println!("✓ Case '{name}' is valid"),
        None => println!("✓ Case is valid"),
    }
    Ok(())
}

fn cmd_fittings() -> CaseResult<()> {
    println!("Available fittings:");
    for entry in fitting_catalog() {
        println!("  {:<18} K = {:<5} {}", entry.id, entry.k, entry.display_name);
    }
    Ok(())
}
