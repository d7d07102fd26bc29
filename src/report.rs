//! Categorized console output.
//!
//! This module is separate from the core transforms to keep them free of
//! printing side effects and usable as a library.

use colored::Colorize;

/// Announces a successful terminal outcome on stdout.
pub fn success(message: &str) {
    println!("{} {}", "success:".bold().green(), message);
}

/// Announces a non-terminal progress note, e.g. the discovered file count.
pub fn info(message: &str) {
    println!("{} {}", "info:".bold().blue(), message);
}

/// Announces a recovered per-file problem, e.g. a skipped unparsable file.
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Announces a fatal command failure.
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".bold().red(), message);
}
