//! PragValues entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pragvalues::app;
use pragvalues::commands::export;
use pragvalues::state::AppState;
use pragvalues_compass::DEFAULT_EXPORT_FILENAME;

#[derive(Parser)]
#[command(
    name = "pragvalues",
    version,
    about = "Two-axis attitude assessment with compass export"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive assessment
    Run,
    /// Render a compass image from explicit axis scores
    Export {
        /// Strategic axis score (10-40)
        #[arg(long)]
        strategic: u32,
        /// Cultural axis score (10-40)
        #[arg(long)]
        cultural: u32,
        /// Output file
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILENAME)]
        output: PathBuf,
        /// Print the results summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command.unwrap_or(Command::Run) {
        Command::Run => {
            let mut state = AppState::new()?;
            app::run(&mut state)?;
        }
        Command::Export {
            strategic,
            cultural,
            output,
            json,
        } => {
            let summary = export::export_scores(strategic, cultural, &output)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{}: strategic {}/40, cultural {}/40",
                    summary.title, summary.strategic_score, summary.cultural_score
                );
                println!("Saved {}", output.display());
            }
        }
    }
    Ok(())
}
