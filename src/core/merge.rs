use crate::core::FlatTranslationsDictionary;

/// Merges per-file flat dictionaries into a single dictionary.
///
/// Entries are shallow-merged per language; later dictionaries in the
/// sequence overwrite earlier ones for the same (language, key) pair, so
/// the result is deterministic for a fixed input order.
pub fn merge_flat_translations<I>(dictionaries: I) -> FlatTranslationsDictionary
where
    I: IntoIterator<Item = FlatTranslationsDictionary>,
{
    let mut merged = FlatTranslationsDictionary::new();

    for dictionary in dictionaries {
        for (language, entries) in dictionary {
            merged.entry(language).or_default().extend(entries);
        }
    }

    merged
}
