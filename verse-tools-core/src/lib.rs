// verse-tools-core/src/lib.rs

// declare modules
pub mod audit;
pub mod config;
pub mod error;
pub mod migrate;
pub mod placeholders;
pub mod utils;

// re-export key structs/functions for external use by other crates
pub use anyhow::{Context, Result}; // re-export for convenience
pub use clap::Parser; // re-export Parser for CLI crate
pub use console::style; // re-export for the CLI crate's error printing
pub use dotenv::dotenv;

pub use crate::audit::{audit_project, print_audit, AuditOutcome, AuditReport};
pub use crate::config::{Config, ProjectLayout};
pub use crate::error::ToolError;
pub use crate::migrate::{migrate_project, print_migration, MigrateOptions, MigrationOutcome};
pub use crate::placeholders::{
    generate_placeholders, print_generation, GenerateOptions, GenerationReport,
};

use clap::Subcommand;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

// argument parsing struct shared by the CLI crate and tests
#[derive(Parser, Debug, Clone)]
#[command(name = "verse-tools")]
#[command(version, about = "asset checks, placeholders and null safety migration for travel verse", long_about = None)]
pub struct CoreCliArgs {
    /// path to the flutter project root (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<PathBuf>,

    /// config file (defaults to verse-tools.toml in the project root)
    #[arg(short, long, global = true, env = config::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// print a machine-readable json report instead of styled text
    #[arg(long, global = true)]
    pub json: bool,

    /// exit with status 2 when problems are detected
    #[arg(long, global = true)]
    pub strict: bool,

    /// show unchanged files and extra counts
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: ToolCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ToolCommand {
    /// check asset folders, required files and pubspec.yaml declarations
    CheckAssets,
    /// write placeholder svg icons and an image download guide
    CreateAssets {
        /// also write svg stand-ins for the missing jpg images
        #[arg(long)]
        svg_previews: bool,
    },
    /// rewrite deprecated flutter apis in lib/
    FixNullSafety {
        /// report what would change without writing files
        #[arg(long)]
        dry_run: bool,
        /// skip files that fail to read or write instead of aborting
        #[arg(long)]
        keep_going: bool,
    },
}

/// what a run produced; serialised as-is for `--json`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "tool", content = "report", rename_all = "kebab-case")]
pub enum RunOutcome {
    CheckAssets(AuditOutcome),
    CreateAssets(GenerationReport),
    FixNullSafety(MigrationOutcome),
}

impl RunOutcome {
    /// true when the run found something the user has to fix
    pub fn has_problems(&self) -> bool {
        match self {
            RunOutcome::CheckAssets(outcome) => outcome.has_problems(),
            RunOutcome::CreateAssets(_) => false,
            RunOutcome::FixNullSafety(outcome) => outcome.has_problems(),
        }
    }
}

/// run one tool and print its report
pub fn execute_tool(args: &CoreCliArgs) -> Result<RunOutcome> {
    let root = match &args.path {
        Some(path) => path.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let config = Config::load(&root, args.config.as_deref()).context("failed to load config")?;

    let outcome = match &args.command {
        ToolCommand::CheckAssets => RunOutcome::CheckAssets(audit_project(&root, &config)?),
        ToolCommand::CreateAssets { svg_previews } => {
            let options = GenerateOptions {
                svg_previews: *svg_previews,
            };
            RunOutcome::CreateAssets(generate_placeholders(&root, &config, &options)?)
        }
        ToolCommand::FixNullSafety {
            dry_run,
            keep_going,
        } => {
            let options = MigrateOptions {
                dry_run: *dry_run,
                keep_going: *keep_going,
                progress: !args.json,
            };
            RunOutcome::FixNullSafety(migrate_project(&root, &config, &options)?)
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&outcome).context("failed to serialise report")?;
        println!("{json}");
    } else {
        match &outcome {
            RunOutcome::CheckAssets(audit) => print_audit(audit, &config.layout),
            RunOutcome::CreateAssets(report) => print_generation(report),
            RunOutcome::FixNullSafety(migration) => print_migration(migration, args.verbose),
        }
    }

    Ok(outcome)
}
