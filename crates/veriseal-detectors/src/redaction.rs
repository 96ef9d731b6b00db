use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

static REDACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/Subtype\s*/Redact\b").expect("redact pattern"));

/// Redaction always reports CRITICAL, independently of the aggregate
/// annotation check: it implies deliberate information removal, the single
/// most severe signal the engine knows.
pub struct RedactionDetector;

impl Detector for RedactionDetector {
    fn id(&self) -> &'static str {
        "redaction"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::Redaction
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        if !REDACT.is_match(&ctx.text) {
            return Ok(Vec::new());
        }
        Ok(vec![Modification {
            kind: ModificationType::Redaction,
            severity: Severity::Critical,
            title: "Redaction markup present".to_string(),
            description: "Document carries redaction annotations, indicating content was \
                          deliberately removed or obscured."
                .to_string(),
            details: None,
            timestamp: None,
        }])
    }
}
