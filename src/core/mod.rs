//! Core translation transforms.
//!
//! Two deliberately distinct transforms live here:
//!
//! - `flatten`: the compile path. Groups string leaves of one parsed
//!   translation file by leaf key name, with the dotted structural path
//!   (derived from the file's location) in the group slot.
//! - `build`: the getids path. Turns a flat dotted-key map into a nested
//!   tree whose leaves map locale codes to strings.
//!
//! They are not two views of one "flatten" abstraction: the first treats
//! file structure as the grouping axis, the second treats locale codes as
//! real locales. Keeping them separate keeps both honest.

pub mod build;
pub mod extract;
pub mod file_scanner;
pub mod flatten;
pub mod merge;
pub mod path_key;
pub mod reader;

use indexmap::IndexMap;

/// Flattened translations for a single language: dotted key -> string.
///
/// Dots inside key segments are not escaped; `a.b` the segment and
/// `a` -> `b` the path are indistinguishable once flattened.
pub type FlatTranslations = IndexMap<String, String>;

/// Flat translations keyed by language (or by structural group on the
/// compile path). This is the on-disk output unit: one file per key.
pub type FlatTranslationsDictionary = IndexMap<String, FlatTranslations>;
