use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use trade_plan_journal::config::Config;
use trade_plan_journal::view;
use trade_plan_journal::{PlanStore, TradingPlanRecord};

#[derive(Parser)]
#[command(name = "trade-plan", about = "Record and review an intraday trading plan")]
struct Cli {
    /// Backing CSV file (overrides TRADE_PLAN_FILE)
    #[arg(long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every plan field by section
    Fields,
    /// Write a JSON answers document with every field at its default
    Template {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Save answers from a JSON document, replacing the stored plan
    Save {
        /// Answers file, or "-" for stdin
        #[arg(long, short)]
        input: PathBuf,
    },
    /// Show the stored plan
    View {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut cfg = Config::from_env();
    if let Some(file) = cli.file {
        cfg = cfg.with_plan_file(file);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let store = PlanStore::from_config(&cfg);

    match cli.command {
        Command::Fields => {
            print!("{}", view::render_schema());
            Ok(ExitCode::SUCCESS)
        }
        Command::Template { output } => {
            let json = serde_json::to_string_pretty(&TradingPlanRecord::new())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json + "\n")
                        .with_context(|| format!("Failed to write template to {}", path.display()))?;
                    info!("Template written to {}", path.display());
                }
                None => println!("{}", json),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Save { input } => save(&store, &input),
        Command::View { json } => show(&store, json),
    }
}

fn save(store: &PlanStore, input: &Path) -> Result<ExitCode> {
    let content = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read answers from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read answers from {}", input.display()))?
    };

    let answers: serde_json::Value =
        serde_json::from_str(&content).context("Answers are not valid JSON")?;
    let record = TradingPlanRecord::from_answers(&answers)?;

    match store.save(&record) {
        Ok(()) => {
            println!("Trading plan saved to {}", store.path().display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            println!("Could not save the trading plan: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show(store: &PlanStore, json: bool) -> Result<ExitCode> {
    let record = match store.load() {
        Ok(record) => record,
        Err(e) => {
            if view::is_warning(&e) {
                warn!("{}", e);
            } else {
                error!("{}", e);
            }
            println!("{}", view::user_message(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", view::render_plan(&record));
    }
    Ok(ExitCode::SUCCESS)
}
