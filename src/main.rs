//! backforge CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::{Context, Result};
use backforge::DatabaseChoice;
use clap::{Parser, Subcommand};
use commands::{InitCommand, ScaffoldCommand};

const EXAMPLES: &str = "Examples:
  backforge init
  backforge init --database mongodb
  backforge scaffold User name:string,email:string,password:string
  backforge scaffold Product title:string,price:float

Scaffolding overwrites existing files for the same entity; it never merges.";

#[derive(Parser)]
#[command(name = "backforge")]
#[command(version)]
#[command(about = "Scaffold backend models, controllers, and routes", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a project (database choice, server file, auth middleware)
    Init {
        /// Database engine; prompted for when omitted
        #[arg(long, value_enum)]
        database: Option<DatabaseChoice>,
    },
    /// Generate controller, routes, and (document path) model for an entity
    Scaffold {
        /// Entity name (alphanumeric, e.g. `User`, `Product`)
        name: String,
        /// Comma-separated `field:type` pairs (e.g. `title:string,price:float`)
        attributes: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { database } => {
            let root = std::env::current_dir().context("Failed to get current directory")?;
            let cmd = InitCommand::new(root, database);
            cmd.execute()?;
        }
        Commands::Scaffold { name, attributes } => {
            let cmd = ScaffoldCommand::new(name, attributes);
            cmd.execute()?;
        }
    }

    Ok(())
}
