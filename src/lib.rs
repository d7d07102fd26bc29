//! Intlc - translation tree compiler and FormattedMessage ID extractor
//!
//! Intlc is a CLI tool and library for converting between two
//! representations of localization data: a directory tree of per-module
//! JSON files and one flattened dotted-key dictionary per language. It
//! also extracts `<FormattedMessage />` IDs from markup and seeds a
//! translation tree with default-language values.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and commands)
//! - `core`: Transforms (flatten, build, merge), extraction and file I/O
//! - `json_writer`: Pretty-printed JSON persistence
//! - `report`: Categorized console output

pub mod cli;
pub mod core;
pub mod json_writer;
pub mod report;
