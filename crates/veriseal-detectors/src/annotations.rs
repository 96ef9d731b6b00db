use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

static ANNOTATION_SUBTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/Subtype\s*/(Highlight|StrikeOut|Underline|FreeText|Text|Stamp|Ink|Link|Redact)\b")
        .expect("annotation subtype pattern")
});

/// Aggregate annotation finding. StrikeOut and Redact subtypes uplift the
/// severity: both mark content as removed or corrected rather than merely
/// commented on.
pub struct AnnotationDetector;

impl Detector for AnnotationDetector {
    fn id(&self) -> &'static str {
        "annotations"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::Annotation
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        if !ctx.structure.has_annotations {
            return Ok(Vec::new());
        }

        let mut subtypes: Vec<&str> = Vec::new();
        for caps in ANNOTATION_SUBTYPE.captures_iter(&ctx.text) {
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            if !subtypes.contains(&name) {
                subtypes.push(name);
            }
        }

        let destructive = subtypes
            .iter()
            .any(|s| *s == "Redact" || *s == "StrikeOut");
        let severity = if destructive {
            Severity::High
        } else {
            Severity::Medium
        };
        let description = if subtypes.is_empty() {
            "Document contains annotation markup.".to_string()
        } else {
            format!("Document contains annotations: {}.", subtypes.join(", "))
        };

        Ok(vec![Modification {
            kind: ModificationType::Annotation,
            severity,
            title: "Annotations present".to_string(),
            description,
            details: None,
            timestamp: None,
        }])
    }
}
