use serde::{Deserialize, Serialize};
use veriseal_pdf::{Metadata, StructureInfo};

/// Finding severity. Declaration order gives `Ord` with `Critical` as the
/// maximum; the wire values are part of the stable JSON contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// Confidence in the overall verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "LOW",
            Confidence::Medium => "MEDIUM",
            Confidence::High => "HIGH",
        }
    }
}

/// Overall verdict on the document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    Original,
    LikelyModified,
    DefinitelyModified,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Original => "ORIGINAL",
            OverallStatus::LikelyModified => "LIKELY_MODIFIED",
            OverallStatus::DefinitelyModified => "DEFINITELY_MODIFIED",
        }
    }
}

/// Category of a modification finding. The full enumeration is part of the
/// wire contract even though some variants have no emitting check today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModificationType {
    MetadataChange,
    IncrementalUpdate,
    EditingSoftware,
    Annotation,
    FormField,
    ContentStream,
    Redaction,
    DigitalSignature,
    EmbeddedFile,
    PageModification,
    XmpMetadata,
    FontChange,
    ImageModification,
}

/// One modification finding. Immutable once constructed; findings are
/// collected in detection order, not severity order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Modification {
    #[serde(rename = "type")]
    pub kind: ModificationType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Recognized tooling history, deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditingHistory {
    pub software: Vec<String>,
    pub possible_editors: Vec<String>,
    pub edit_dates: Vec<String>,
}

/// The analysis report: the sole output of one analysis pass, created once
/// and never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_modified: bool,
    pub confidence: Confidence,
    pub overall_status: OverallStatus,
    pub modifications: Vec<Modification>,
    pub metadata: Metadata,
    pub structure_info: StructureInfo,
    pub editing_history: EditingHistory,
    pub summary: String,
}
