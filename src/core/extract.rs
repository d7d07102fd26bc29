use std::sync::LazyLock;

use regex::Regex;

/// A message extracted from markup: the dotted id plus an optional
/// default message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub id: String,
    pub default_message: Option<String>,
}

const OPENING_MARKER: &str = "<FormattedMessage";
const CLOSING_MARKER: &str = "/>";

// Attribute values may use double quotes, single quotes or backticks.
static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"id=(?:"([^"\n]*)"|'([^'\n]*)'|`([^`\n]*)`)"#).unwrap()
});

static DEFAULT_MESSAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"defaultMessage=(?:"([^"\n]*)"|'([^'\n]*)'|`([^`\n]*)`)"#).unwrap()
});

// Brace-wrapped form: defaultMessage={"..."}
static BRACED_DEFAULT_MESSAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"defaultMessage=\{(?:"([^"\n]*)"|'([^'\n]*)'|`([^`\n]*)`)\}"#).unwrap()
});

/// Scans raw text for `<FormattedMessage ... />` components and extracts
/// one [`MessageRecord`] per component carrying an `id` attribute.
///
/// Each candidate block spans from an opening marker to the nearest
/// following `/>`; scanning resumes strictly after that closing marker, so
/// blocks never overlap. Blocks without an `id` yield no record, and an
/// opening marker with no closing marker ends the scan. The plain quoted
/// `defaultMessage` form is checked before the brace-wrapped one.
///
/// Pure text function; records come back in order of appearance.
pub fn find_formatted_messages(input: &str) -> Vec<MessageRecord> {
    let mut records = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find(OPENING_MARKER) {
        let begin = cursor + offset;
        let Some(offset) = input[begin..].find(CLOSING_MARKER) else {
            break;
        };
        let end = begin + offset;

        let block = &input[begin..end];
        if let Some(id) = first_capture(&ID_REGEX, block) {
            let default_message = first_capture(&DEFAULT_MESSAGE_REGEX, block)
                .or_else(|| first_capture(&BRACED_DEFAULT_MESSAGE_REGEX, block));
            records.push(MessageRecord {
                id,
                default_message,
            });
        }

        cursor = end + CLOSING_MARKER.len();
    }

    records
}

/// Returns the text of whichever quote-style group matched.
fn first_capture(regex: &Regex, block: &str) -> Option<String> {
    regex.captures(block).and_then(|captures| {
        captures
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|m| m.as_str().to_string())
    })
}
