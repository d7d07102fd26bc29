use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::{Map, Value};

/// A translation source file tagged with its origin path.
///
/// `tree` is empty when the file was not valid JSON or held no object
/// keys; the compile pipeline skips such files with a warning instead of
/// failing the whole run.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub tree: Map<String, Value>,
}

impl SourceFile {
    pub fn has_translations(&self) -> bool {
        !self.tree.is_empty()
    }
}

/// Reads and parses every translation file in parallel.
///
/// Reads are scattered across the rayon pool and gathered back in input
/// order, so later stages stay deterministic. An unreadable file fails the
/// whole batch; an unparsable one degrades to an empty tree.
pub fn read_translation_files(files: &[PathBuf]) -> Result<Vec<SourceFile>> {
    files
        .par_iter()
        .map(|path| {
            let content = fs::read_to_string(path).with_context(|| {
                format!("Failed to read translation file: {}", path.display())
            })?;
            let tree = match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            };
            Ok(SourceFile {
                path: path.clone(),
                tree,
            })
        })
        .collect()
}

/// Reads every file as text, in parallel, gathered in input order.
///
/// Non-UTF-8 bytes are replaced rather than rejected; markup extraction
/// only cares about ASCII markers and quoted attribute values.
pub fn read_text_files(files: &[PathBuf]) -> Result<Vec<String>> {
    files
        .par_iter()
        .map(|path| {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        })
        .collect()
}
