use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use stockledger_cli::{Script, replay};
use stockledger_infra::{ReconcilerConfig, StockReconciler};

#[derive(Parser)]
#[command(name = "stockledger")]
#[command(about = "Stock ledger reconciliation driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON script of register/ingest/remove steps and print the result.
    Replay {
        /// Path to the script file
        path: PathBuf,

        /// Pretty-print the JSON report
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    stockledger_observability::init();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Replay { path, pretty } => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            let script = Script::from_json(&raw)
                .with_context(|| format!("failed to parse script {}", path.display()))?;

            let config = ReconcilerConfig::from_env().context("invalid reconciler configuration")?;
            tracing::info!("replaying {} with {:?}", path.display(), config);
            let reconciler = StockReconciler::new(config);

            let report = replay(script, &reconciler).context("script rejected")?;
            let out = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{out}");
        }
    }

    Ok(())
}
