use std::path::Path;

/// Derives the dotted key prefix for a translation file from its location
/// under the compile root.
///
/// The root prefix is stripped, directory segments are joined with `.`,
/// and the file name is cut at its first `.` so multi-part extensions
/// (`buttons.draft.json`) drop everything after the stem.
///
/// Examples:
/// - root `/root`, file `/root/app/en-gb.json` -> `app.en-gb`
/// - root `/root`, file `/root/ok.json` -> `ok`
///
/// A path that is not under the root is used as-is (relative to nothing);
/// the result is still a usable prefix and derivation never fails.
pub fn structural_key_prefix(root_dir: &Path, file_path: &Path) -> String {
    let relative = file_path.strip_prefix(root_dir).unwrap_or(file_path);

    let mut segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if let Some(name) = segments.last_mut()
        && let Some(dot) = name.find('.')
    {
        name.truncate(dot);
    }

    segments.join(".")
}
