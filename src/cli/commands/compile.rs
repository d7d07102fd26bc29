use anyhow::{Result, bail};

use crate::cli::args::CompileCommand;
use crate::core::file_scanner::find_files;
use crate::core::flatten::group_leaves_by_structural_path;
use crate::core::merge::merge_flat_translations;
use crate::core::path_key::structural_key_prefix;
use crate::core::reader::read_translation_files;
use crate::json_writer::save_json;
use crate::report;

/// Compiles a directory tree of translation JSON files into one flat
/// dictionary file per language under the output directory.
pub fn compile(cmd: CompileCommand) -> Result<()> {
    let files = find_files(&cmd.dir, Some("json"))?;
    if files.is_empty() {
        bail!("could not find any .json files in: {}.", cmd.dir.display());
    }
    report::info(&format!(
        "found {} translation file(s) in {}.",
        files.len(),
        cmd.dir.display()
    ));

    let sources = read_translation_files(&files)?;

    // Per-file flattening; sources that parsed to nothing are skipped so
    // one bad file never sinks the compile.
    let mut flattened = Vec::with_capacity(sources.len());
    for source in &sources {
        if !source.has_translations() {
            report::warning(&format!(
                "ignored translation file: {}. File contains no keys or is not valid JSON.",
                source.path.display()
            ));
            continue;
        }

        let prefix = structural_key_prefix(&cmd.dir, &source.path);
        flattened.push(group_leaves_by_structural_path(&source.tree, &prefix));
    }

    let compiled_count = flattened.len();
    let merged = merge_flat_translations(flattened);

    for (language, translations) in &merged {
        let path = cmd.output_dir.join(format!("{language}.json"));
        save_json(&path, translations)?;
    }

    report::success(&format!(
        "Successfully created translations from {} file(s).",
        compiled_count
    ));
    Ok(())
}
