use indexmap::IndexMap;
use serde::Serialize;

use crate::core::FlatTranslations;

/// A nested translation tree. Serializes to plain nested JSON objects.
///
/// A node is either a branch of named subtrees or a leaf mapping locale
/// codes to translated strings; the builder never produces mixed nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocaleTree {
    Branch(IndexMap<String, LocaleTree>),
    Leaf(IndexMap<String, String>),
}

impl LocaleTree {
    fn empty_branch() -> Self {
        LocaleTree::Branch(IndexMap::new())
    }
}

/// Options for [`build_locale_tree`].
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Extracted values are installed under this locale code.
    pub default_language: String,
    /// Each of these locales gets an empty-string placeholder at every leaf.
    pub languages: Vec<String>,
}

/// Builds a nested locale tree from a flat dotted-key map.
///
/// Each dotted key is split into segments; all but the last become branch
/// nodes and the last becomes a leaf holding the value under
/// `default_language` plus an empty string per additional language, in the
/// given order.
///
/// Conflict policy, last write wins in both directions: a longer key
/// descending through an existing leaf replaces that leaf with a fresh
/// branch, and a key ending on an existing branch replaces the branch with
/// a leaf. Identical full paths overwrite. Building never fails.
pub fn build_locale_tree(flat: &FlatTranslations, options: &BuildOptions) -> LocaleTree {
    let mut root = IndexMap::new();

    for (key, value) in flat {
        let segments: Vec<&str> = key.split('.').collect();
        insert_leaf(&mut root, &segments, value, options);
    }

    LocaleTree::Branch(root)
}

fn insert_leaf(
    branch: &mut IndexMap<String, LocaleTree>,
    segments: &[&str],
    value: &str,
    options: &BuildOptions,
) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };

    if rest.is_empty() {
        let mut leaf = IndexMap::new();
        leaf.insert(options.default_language.clone(), value.to_string());
        for language in &options.languages {
            leaf.insert(language.clone(), String::new());
        }
        branch.insert((*head).to_string(), LocaleTree::Leaf(leaf));
        return;
    }

    let node = branch
        .entry((*head).to_string())
        .or_insert_with(LocaleTree::empty_branch);
    if matches!(node, LocaleTree::Leaf(_)) {
        *node = LocaleTree::empty_branch();
    }
    if let LocaleTree::Branch(subtree) = node {
        insert_leaf(subtree, rest, value, options);
    }
}
