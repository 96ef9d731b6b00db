//! Structural marker scanning.
//!
//! Each feature flag is an independent existence check over the decoded
//! text. This is deliberately not a cross-reference walk: heuristic tamper
//! detection needs presence signals, not an authoritative object graph.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape of the document as seen by flat text scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_version: Option<String>,
    /// Lower-bound estimate: page objects hidden inside compressed object
    /// streams are invisible to a text scan and are not counted.
    pub page_count: usize,
    /// True iff `incremental_update_count > 1`; a single `%%EOF` is a
    /// normal single-save file.
    pub has_incremental_updates: bool,
    /// Number of `%%EOF` markers. Each marker past the first corresponds
    /// to one re-open-and-resave cycle.
    pub incremental_update_count: usize,
    pub has_annotations: bool,
    pub has_form_fields: bool,
    pub has_digital_signatures: bool,
    pub has_embedded_files: bool,
    #[serde(rename = "hasJavaScript")]
    pub has_javascript: bool,
    #[serde(rename = "hasXMPMetadata")]
    pub has_xmp_metadata: bool,
    pub is_linearized: bool,
    pub is_encrypted: bool,
    pub file_size: u64,
}

static PDF_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%PDF-(\d+\.\d+)").expect("version pattern"));

static PAGE_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/Type\s*/Page\b").expect("page pattern"));

static PAGE_TREE_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/Count\s+(\d+)").expect("count pattern"));

static SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/Type\s*/Sig\b|/ByteRange").expect("signature pattern"));

/// Scan decoded text for structural markers.
pub fn analyze_structure(text: &str, file_size: u64) -> StructureInfo {
    let incremental_update_count = text.matches("%%EOF").count();

    StructureInfo {
        pdf_version: PDF_VERSION.captures(text).map(|caps| caps[1].to_string()),
        page_count: count_pages(text),
        has_incremental_updates: incremental_update_count > 1,
        incremental_update_count,
        has_annotations: text.contains("/Annots"),
        has_form_fields: text.contains("/AcroForm"),
        has_digital_signatures: SIGNATURE.is_match(text),
        has_embedded_files: text.contains("/EmbeddedFiles") || text.contains("/Filespec"),
        has_javascript: text.contains("/JavaScript") || text.contains("/JS"),
        has_xmp_metadata: text.contains("<x:xmpmeta")
            || text.contains("http://ns.adobe.com/xap/1.0/"),
        is_linearized: text.contains("/Linearized"),
        is_encrypted: text.contains("/Encrypt"),
        file_size,
    }
}

// `\b` after "Page" keeps `/Type /Pages` tree nodes out of the count.
// When no page objects are visible in plaintext (object streams), the
// page tree `/Count` value is the fallback.
fn count_pages(text: &str) -> usize {
    let direct = PAGE_OBJECT.find_iter(text).count();
    if direct > 0 {
        return direct;
    }
    PAGE_TREE_COUNT
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}
