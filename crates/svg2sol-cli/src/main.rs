//! svg2sol CLI — embeds Base64 image payloads into Solidity storage contracts.
//!
//! Three commands cover the asset-embedding workflow:
//! `init` scaffolds a project, `embed` generates the storage contract from
//! the payload file, and `layers` prints the default layer identifier table
//! used by the SVG composition pipeline.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "svg2sol",
    about = "Embed Base64 image assets into generated Solidity storage contracts",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to svg2sol.config.json (default: ./svg2sol.config.json)
    #[arg(long, global = true, default_value = "svg2sol.config.json")]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new embedding project
    Init {
        /// Project name (creates a directory with this name)
        name: String,
    },

    /// Generate the storage contract from the payload file
    Embed {
        /// Path to the Base64 payload file
        #[arg(long, short)]
        payload: Option<PathBuf>,

        /// Output path for the generated Solidity source
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Solidity contract name
        #[arg(long)]
        contract: Option<String>,

        /// Name of the generated string constant
        #[arg(long)]
        constant: Option<String>,

        /// MIME type for the data URI prefix
        #[arg(long)]
        mime: Option<String>,
    },

    /// Print the default layer identifier table
    Layers,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { name } => {
            commands::init::run(&name)?;
        }
        Commands::Embed {
            payload,
            output,
            contract,
            constant,
            mime,
        } => {
            commands::embed::run(&cli.config, payload, output, contract, constant, mime)?;
        }
        Commands::Layers => {
            commands::layers::run();
        }
    }

    Ok(())
}
