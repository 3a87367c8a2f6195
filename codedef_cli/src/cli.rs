//! CLI argument definitions using clap derive

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use codedef_core::codes::CodeFamily;

#[derive(Parser, Debug)]
#[command(name = "codedef")]
#[command(author, version, about = "Structural design code registry")]
#[command(long_about = "Look up design code identifiers and names, and edit the code selections stored in settings files.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Locale for display names (e.g. "ru")
    #[arg(long, global = true, env = "CODEDEF_LOCALE")]
    pub locale: Option<String>,

    /// Locale override file, merged after the config's files (repeatable)
    #[arg(long = "overrides", global = true, value_name = "FILE")]
    pub overrides: Vec<PathBuf>,

    /// Registry config file (TOML)
    #[arg(long, global = true, env = "CODEDEF_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List code families with their number of codes
    Families,

    /// List the codes of a family in declaration order
    List {
        /// Family key or abbreviation (e.g. steel, src, wind-load)
        #[arg(value_parser = parse_family)]
        family: CodeFamily,

        /// Include the id 0 "None" entry
        #[arg(long)]
        all: bool,

        /// Show full names instead of short names
        #[arg(long)]
        full: bool,
    },

    /// Show one code by id, variant key or name
    Show {
        #[arg(value_parser = parse_family)]
        family: CodeFamily,

        /// Id, variant key, full name or short name
        code: String,
    },

    /// Check whether an id is declared for a family (exit status 1 if not)
    Check {
        #[arg(value_parser = parse_family)]
        family: CodeFamily,

        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Manage a code settings file
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Create an empty settings file
    Init {
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Locale stored in the file's display settings
        #[arg(long = "display-locale", value_name = "LOCALE")]
        display_locale: Option<String>,

        /// Prefer short names when displaying codes
        #[arg(long)]
        short: bool,
    },

    /// Show the selected codes
    Show { file: PathBuf },

    /// Select a code for a family (id 0 or "none" clears it)
    Set {
        file: PathBuf,

        #[arg(value_parser = parse_family)]
        family: CodeFamily,

        /// Id, variant key, full name or short name
        code: String,
    },

    /// Remove the selection for a family
    Clear {
        file: PathBuf,

        #[arg(value_parser = parse_family)]
        family: CodeFamily,
    },
}

fn parse_family(s: &str) -> Result<CodeFamily, String> {
    CodeFamily::from_str_flexible(s).map_err(|e| e.to_string())
}
