// CLI module for command-line interface

pub mod all;
pub mod list;
pub mod periodic;
pub mod prefixed;
pub mod range;
pub mod standardized;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::models::creation_report::CreationReport;
use crate::models::folder_name::NameOptions;
use crate::services::folder_creator::FolderCreator;
use crate::utils::config::DirbotConfig;
use crate::utils::error::Result;

use self::all::AllCommand;
use self::list::ListCommand;
use self::periodic::PeriodicCommand;
use self::prefixed::PrefixedCommand;
use self::range::RangeCommand;
use self::standardized::StandardizedCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "dirbot")]
#[command(about = "Automates creation of project folder hierarchies")]
#[command(long_about = r#"dirbot creates folder hierarchies under a working root from simple rules.

Each rule writes into its own root directory:
  • years/         one folder per integer in a range
  • names/         one folder per name in a list
  • prefixes/      one folder per label, prefixed
  • timed/         five timestamped folders with a pause in between
  • standardized/  one folder per normalized name

Running a rule again is safe: existing folders are left as they are.

Examples:
  dirbot                                  Run every rule with the demo inputs
  dirbot range 2020 2023                  Create years/2020 .. years/2023
  dirbot list data-csv data-json          Create names/data-csv, names/data-json
  dirbot prefixed csv json --prefix out-  Create prefixes/out-csv, prefixes/out-json
  dirbot periodic --interval 1            Five timed folders, one second apart
  dirbot standardized "North America" --lowercase --remove-spaces"#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Working root the category folders are created under (default: current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Configuration file (default: dirbot.toml in the working root, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file path (default: project.log in the working root)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Output JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every folder rule in order with the demo inputs
    All(AllCommand),

    /// Create one folder per integer in an inclusive range
    #[command(long_about = r#"Create one folder per integer in START..=END under the range root.

An END smaller than START creates no folders.

Examples:
  dirbot range 2020 2023                Create 2020, 2021, 2022, 2023
  dirbot range -2 2                     Create -2, -1, 0, 1, 2"#)]
    Range(RangeCommand),

    /// Create folders from a list of names
    List(ListCommand),

    /// Create folders named prefix + label
    Prefixed(PrefixedCommand),

    /// Create five timestamped folders with a pause between them
    Periodic(PeriodicCommand),

    /// Create folders from normalized names
    Standardized(StandardizedCommand),
}

/// Normalization flags shared by list-based commands
#[derive(Debug, Clone, Copy, Args)]
pub struct NameFlags {
    /// Convert names to lowercase
    #[arg(long)]
    pub lowercase: bool,

    /// Remove spaces from names
    #[arg(long)]
    pub remove_spaces: bool,
}

impl From<NameFlags> for NameOptions {
    fn from(flags: NameFlags) -> Self {
        Self::new(flags.lowercase, flags.remove_spaces)
    }
}

/// Resolved state every command runs against
pub struct CommandContext {
    pub creator: FolderCreator,
    pub json: bool,
}

impl CommandContext {
    pub fn new(config: DirbotConfig, json: bool) -> Self {
        Self {
            creator: FolderCreator::new(config),
            json,
        }
    }

    pub fn config(&self) -> &DirbotConfig {
        self.creator.config()
    }

    /// Print reports as pretty JSON or one line per folder
    pub fn print_reports(&self, reports: &[CreationReport]) -> Result<()> {
        if self.json {
            return print_json(&reports);
        }

        for report in reports {
            for path in &report.created {
                println!("Created folder: {}", path.display());
            }
            for raw in &report.skipped {
                println!("Skipped empty folder name from: {raw:?}");
            }
            println!(
                "{}: {} folders under {}",
                report.category,
                report.created_count(),
                report.root.display()
            );
        }
        Ok(())
    }

    pub fn print_report(&self, report: &CreationReport) -> Result<()> {
        if self.json {
            print_json(report)
        } else {
            self.print_reports(std::slice::from_ref(report))
        }
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    println!("{json_output}");
    Ok(())
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command; no command runs every rule
    pub async fn execute(command: Option<Commands>, context: &CommandContext) -> Result<()> {
        match command.unwrap_or_else(|| Commands::All(AllCommand::default())) {
            Commands::All(cmd) => cmd.run(context).await,
            Commands::Range(cmd) => cmd.run(context).await,
            Commands::List(cmd) => cmd.run(context).await,
            Commands::Prefixed(cmd) => cmd.run(context).await,
            Commands::Periodic(cmd) => cmd.run(context).await,
            Commands::Standardized(cmd) => cmd.run(context).await,
        }
    }
}
