use anyhow::{Result, bail};

use crate::cli::args::GetIdsCommand;
use crate::core::FlatTranslations;
use crate::core::build::{BuildOptions, build_locale_tree};
use crate::core::extract::find_formatted_messages;
use crate::core::file_scanner::find_files;
use crate::core::reader::read_text_files;
use crate::json_writer::save_json;
use crate::report;

/// Extracts FormattedMessage IDs from every file under the directory and
/// builds a translation tree seeded with the default-language messages.
pub fn getids(cmd: GetIdsCommand) -> Result<()> {
    let files = find_files(&cmd.dir, None)?;
    if files.is_empty() {
        bail!("could not find any files in: {}.", cmd.dir.display());
    }

    let contents = read_text_files(&files)?;

    // Records land in file order, so a later id re-seeds an earlier one.
    let mut messages = FlatTranslations::new();
    for content in &contents {
        for record in find_formatted_messages(content) {
            messages.insert(record.id, record.default_message.unwrap_or_default());
        }
    }

    let tree = build_locale_tree(
        &messages,
        &BuildOptions {
            default_language: cmd.default_language.clone(),
            languages: cmd.additional_language_list(),
        },
    );

    match &cmd.output_file {
        Some(path) => {
            save_json(path, &tree)?;
            report::success(&format!(
                "Successfully saved parsed IDs to: {} ({} file(s) scanned).",
                path.display(),
                files.len()
            ));
        }
        None => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    Ok(())
}
