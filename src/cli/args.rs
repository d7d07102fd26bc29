//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compile`: flatten a tree of translation JSON files into one flat
//!   dictionary file per language
//! - `getids`: extract FormattedMessage IDs from markup and build a
//!   seeded translation tree

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    /// Directory containing the translation source tree
    pub dir: PathBuf,

    /// Directory the per-language files are written to
    pub output_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct GetIdsCommand {
    /// Directory to scan for FormattedMessage usages
    pub dir: PathBuf,

    /// Language the extracted default messages are mapped to
    #[arg(short = 'l', long, default_value = "en-gb")]
    pub default_language: String,

    /// Comma-separated languages added to each translation as empty strings
    #[arg(short = 'a', long)]
    pub additional_languages: Option<String>,

    /// Write the tree to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output_file: Option<PathBuf>,
}

impl GetIdsCommand {
    /// Splits the `--additional-languages` CSV into trimmed, non-empty
    /// codes. Duplicates are kept; the tree builder lets the last one win.
    pub fn additional_language_list(&self) -> Vec<String> {
        self.additional_languages
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a translation file tree into one flat file per language
    Compile(CompileCommand),
    /// Extract FormattedMessage IDs and build a seeded translation tree
    #[command(name = "getids")]
    GetIds(GetIdsCommand),
}
