//! dryrbs CLI - RBS signature generator for dry-struct classes
//!
//! Commands:
//! - `dryrbs generate` - Generate signatures for a file or directory
//! - `dryrbs check` - Validate a dryrbs.toml configuration

use clap::{Parser, Subcommand};
use dryrbs_core::LogLevel;
use std::path::PathBuf;

mod check;
mod config;
mod generate;

#[derive(Parser)]
#[command(name = "dryrbs")]
#[command(author, version, about = "Generate RBS signatures from dry-struct classes", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate RBS signatures
    Generate(generate::GenerateArgs),

    /// Validate a dryrbs.toml configuration
    Check {
        /// Path to the configuration file (default: ./dryrbs.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dryrbs_logging::init_logging(cli.log_level);

    match cli.command {
        Commands::Generate(args) => {
            generate::run(args)?;
        }
        Commands::Check { config } => {
            check::run(config)?;
        }
    }

    Ok(())
}
