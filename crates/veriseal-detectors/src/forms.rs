use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

// A field value in either string form; an empty pair of parens or angle
// brackets is a present-but-empty field.
static FIELD_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/V\s*\(([^)]*)\)|/V\s*<([0-9A-Fa-f\s]*)>").expect("field value pattern")
});

/// Form machinery is MEDIUM once someone typed into it, LOW while the
/// fields sit empty.
pub struct FormFieldDetector;

impl Detector for FormFieldDetector {
    fn id(&self) -> &'static str {
        "form_fields"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::FormField
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        if !ctx.structure.has_form_fields {
            return Ok(Vec::new());
        }

        let filled = FIELD_VALUE.captures_iter(&ctx.text).any(|caps| {
            caps.get(1)
                .map(|m| !m.as_str().trim().is_empty())
                .unwrap_or(false)
                || caps
                    .get(2)
                    .map(|m| m.as_str().bytes().any(|b| b.is_ascii_hexdigit()))
                    .unwrap_or(false)
        });

        let (severity, description) = if filled {
            (
                Severity::Medium,
                "Document contains form fields with filled-in values.".to_string(),
            )
        } else {
            (
                Severity::Low,
                "Document contains form fields, all currently empty.".to_string(),
            )
        };

        Ok(vec![Modification {
            kind: ModificationType::FormField,
            severity,
            title: "Form fields present".to_string(),
            description,
            details: None,
            timestamp: None,
        }])
    }
}
