//! prefcount - Preferans score sheet calculator.
//!
//! Reads a JSON game sheet, runs the score engine and prints the final
//! standings as a table or as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use prefcount::domain::scoring::compute_final_results;
use prefcount::{AppError, GameSheet, Place, PrefType, ScoreReport, Settings};
use tracing::info;

#[derive(Parser)]
#[command(name = "prefcount")]
#[command(about = "Preferans final score calculator")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute final scores for a game sheet
    Score {
        /// Path to the JSON game sheet
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        /// Money per whist; adds a money column
        #[arg(long)]
        point_cost: Option<f64>,

        /// Override the sheet's "divisible by N" option
        #[arg(long)]
        divisible_by_n: Option<bool>,

        /// Override the adjustment seat for "divisible by N"
        #[arg(long)]
        adjust: Option<Place>,

        /// Score as Sochi instead of the sheet's variant
        #[arg(long)]
        sochi: bool,
    },
    /// Print a blank game sheet
    Template {
        /// Number of players (3 or 4)
        #[arg(long, default_value = "3")]
        players: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    prefcount::telemetry::init_tracing(filter, args.log_json);

    match run(args.command) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error[{}]: {err}", err.code());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String, AppError> {
    match command {
        Command::Score {
            file,
            format,
            point_cost,
            divisible_by_n,
            adjust,
            sochi,
        } => {
            let settings = Settings::from_env()?;
            let mut sheet = GameSheet::load(&file)?;
            if let Some(divisible) = divisible_by_n {
                sheet.divisible_by_n = Some(divisible);
            }
            if let Some(place) = adjust {
                sheet.adjustment_player = Some(place);
            }
            if sochi {
                sheet.pref_type = Some(PrefType::Sochi);
            }

            let mut state = sheet.into_game_state(&settings)?;
            info!(
                players = state.player_count(),
                pref_type = %state.pref_type(),
                divisible = state.is_mount_divisible_by_n(),
                "Scoring game sheet"
            );
            compute_final_results(&mut state)?;

            let report = ScoreReport::new(state.final_scores()?, point_cost);
            match format {
                OutputFormat::Table => Ok(report.to_string()),
                OutputFormat::Json => Ok(format!("{}\n", report.to_json_pretty()?)),
            }
        }
        Command::Template { players } => {
            let sheet = GameSheet::template(players)?;
            Ok(format!("{}\n", sheet.to_json_pretty()?))
        }
    }
}
