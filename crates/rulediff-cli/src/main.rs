//! rulediff CLI
//!
//! Command-line interface for comparing validation rule sets

use clap::{Parser, Subcommand};
use rulediff_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rulediff")]
#[command(about = "rulediff - Validation rule set drift reports", long_about = None)]
struct Cli {
    /// Emit logs as JSON instead of human-readable text
    #[arg(long, global = true, conflicts_with = "quiet")]
    log_json: bool,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two rule documents and report the differences
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        logging_facility::init(if cli.log_json {
            Profile::Production
        } else {
            Profile::Development
        });
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
