use serde_json::{Map, Value};

use crate::core::FlatTranslationsDictionary;

/// Groups every string leaf of a parsed translation file by its leaf key
/// name, recording the dotted structural path it was found under.
///
/// Given `{ app: { title: "Title" } }` with prefix `""` this yields
/// `{ "title": { "app": "Title" } }`: the leaf key becomes the outer group
/// and the structural path sits where a locale code would on the getids
/// path. Compile inputs are one structural unit per file, not one locale
/// per file, which is why this is not called "flatten to locales".
///
/// Non-string, non-object values are ignored. The input is never mutated
/// and the output is freshly constructed on every call.
pub fn group_leaves_by_structural_path(
    tree: &Map<String, Value>,
    current_path: &str,
) -> FlatTranslationsDictionary {
    let mut grouped = FlatTranslationsDictionary::new();
    collect_leaves(tree, current_path, &mut grouped);
    grouped
}

fn collect_leaves(
    tree: &Map<String, Value>,
    current_path: &str,
    grouped: &mut FlatTranslationsDictionary,
) {
    for (key, value) in tree {
        match value {
            Value::String(text) => {
                grouped
                    .entry(key.clone())
                    .or_default()
                    .insert(current_path.to_string(), text.clone());
            }
            Value::Object(subtree) => {
                let next_path = if current_path.is_empty() {
                    key.clone()
                } else {
                    format!("{current_path}.{key}")
                };
                collect_leaves(subtree, &next_path, grouped);
            }
            _ => {}
        }
    }
}
