//! Info dictionary extraction.
//!
//! Fields are pulled straight out of the decoded text with keyed patterns;
//! there is no object resolution, so an indirect `/Info` reference whose
//! target dictionary appears anywhere in the file is still picked up. For
//! each field the first occurrence in document order wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Standard Info dictionary fields. Every field is optional: absence means
/// the key was not found in the document, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    /// Raw PDF date string (`D:YYYYMMDDHHmmSS±HH'mm'`), parsed on demand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    /// Raw PDF date string, parsed on demand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trapped: Option<String>,
}

const STRING_KEYS: [&str; 8] = [
    "Title",
    "Author",
    "Subject",
    "Keywords",
    "Creator",
    "Producer",
    "CreationDate",
    "ModDate",
];

// `(?s)` lets literal strings span lines; the body alternation consumes
// escaped characters so an embedded `\)` does not end the match early.
static LITERAL_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)/(Title|Author|Subject|Keywords|Creator|Producer|CreationDate|ModDate)\s*\(((?:\\.|[^\\()])*)\)",
    )
    .expect("literal field pattern")
});

static HEX_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"/(Title|Author|Subject|Keywords|Creator|Producer|CreationDate|ModDate)\s*<([0-9A-Fa-f\s]*)>",
    )
    .expect("hex field pattern")
});

static TRAPPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/Trapped\s*/(\w+)").expect("trapped pattern"));

/// Extract the Info dictionary fields from decoded text.
pub fn extract_metadata(text: &str) -> Metadata {
    // First hit per key, across both string forms; earlier offset wins.
    let mut found: [Option<(usize, String)>; STRING_KEYS.len()] = Default::default();

    for caps in LITERAL_FIELD.captures_iter(text) {
        record(&mut found, &caps, |key, raw| {
            if key == "Title" {
                decode_literal(raw)
            } else {
                raw.to_string()
            }
        });
    }
    for caps in HEX_FIELD.captures_iter(text) {
        record(&mut found, &caps, |_, raw| decode_hex(raw));
    }

    let mut field = |key: &str| -> Option<String> {
        let idx = STRING_KEYS.iter().position(|k| *k == key)?;
        found[idx].take().map(|(_, value)| value)
    };

    Metadata {
        title: field("Title"),
        author: field("Author"),
        subject: field("Subject"),
        keywords: field("Keywords"),
        creator: field("Creator"),
        producer: field("Producer"),
        creation_date: field("CreationDate"),
        modification_date: field("ModDate"),
        trapped: TRAPPED
            .captures(text)
            .map(|caps| caps[1].to_string()),
    }
}

fn record(
    found: &mut [Option<(usize, String)>; STRING_KEYS.len()],
    caps: &regex::Captures<'_>,
    decode: impl Fn(&str, &str) -> String,
) {
    let full = caps.get(0).expect("match");
    let key = &caps[1];
    let Some(idx) = STRING_KEYS.iter().position(|k| *k == key) else {
        return;
    };
    let pos = full.start();
    let earlier = found[idx]
        .as_ref()
        .map(|(existing, _)| *existing <= pos)
        .unwrap_or(false);
    if !earlier {
        found[idx] = Some((pos, decode(key, &caps[2])));
    }
}

/// Best-effort decoding of a PDF literal string body: the standard escapes
/// plus up-to-three-digit octal codes. Applied to Title only, matching the
/// original extraction behavior; other fields keep their raw text.
fn decode_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{C}'),
            Some(d @ '0'..='7') => {
                let mut code = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            chars.next();
                            code = code * 8 + digit;
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Decode a hex string body (`<48656C6C6F>`), whitespace-tolerant; an odd
/// trailing digit is padded with zero per the PDF convention.
fn decode_hex(raw: &str) -> String {
    let digits: Vec<u8> = raw
        .bytes()
        .filter(|b| b.is_ascii_hexdigit())
        .collect();
    let mut bytes = Vec::with_capacity(digits.len() / 2 + 1);
    for pair in digits.chunks(2) {
        let hi = hex_value(pair[0]);
        let lo = if pair.len() == 2 { hex_value(pair[1]) } else { 0 };
        bytes.push(hi << 4 | lo);
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_literal_fields() {
        let text = "<< /Title (Quarterly Report) /Author (Dana Ito) /Producer (iLovePDF) \
                    /CreationDate (D:20240101120000Z) >>";
        let meta = extract_metadata(text);
        assert_eq!(meta.title.as_deref(), Some("Quarterly Report"));
        assert_eq!(meta.author.as_deref(), Some("Dana Ito"));
        assert_eq!(meta.producer.as_deref(), Some("iLovePDF"));
        assert_eq!(meta.creation_date.as_deref(), Some("D:20240101120000Z"));
        assert!(meta.subject.is_none());
    }

    #[test]
    fn extracts_hex_fields() {
        // "Hello" as a hex string, with embedded whitespace.
        let text = "/Title <48 65 6C 6C 6F> /Creator <576F7264>";
        let meta = extract_metadata(text);
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.creator.as_deref(), Some("Word"));
    }

    #[test]
    fn first_occurrence_in_document_order_wins() {
        let text = "/Title (first) ... /Title (second)";
        let meta = extract_metadata(text);
        assert_eq!(meta.title.as_deref(), Some("first"));

        // Hex form earlier in the document beats a later literal form.
        let text = "/Author <4A6F> ... /Author (Jane)";
        let meta = extract_metadata(text);
        assert_eq!(meta.author.as_deref(), Some("Jo"));
    }

    #[test]
    fn title_octal_escapes_are_decoded() {
        let meta = extract_metadata(r"/Title (Caf\351 \(draft\))");
        assert_eq!(meta.title.as_deref(), Some("Café (draft)"));
    }

    #[test]
    fn escaped_paren_does_not_terminate_other_fields() {
        let meta = extract_metadata(r"/Author (A \(B\) C)");
        assert_eq!(meta.author.as_deref(), Some(r"A \(B\) C"));
    }

    #[test]
    fn trapped_is_a_name_token() {
        let meta = extract_metadata("/Trapped /False");
        assert_eq!(meta.trapped.as_deref(), Some("False"));
    }

    #[test]
    fn empty_text_yields_all_absent() {
        assert_eq!(extract_metadata(""), Metadata::default());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let meta = Metadata {
            creation_date: Some("D:20240101".into()),
            modification_date: Some("D:20240102".into()),
            ..Metadata::default()
        };
        let json = serde_json::to_string(&meta).expect("serialize");
        assert!(json.contains("\"creationDate\""));
        assert!(json.contains("\"modificationDate\""));
        assert!(!json.contains("\"title\""));
    }
}
