use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

// XMP history events appear in attribute form (stEvt:action="saved") or
// element form (<stEvt:action>saved</stEvt:action>).
static HISTORY_EVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"stEvt:action\s*=\s*"([^"]*)"|<stEvt:action>\s*([^<]*?)\s*</stEvt:action>"#)
        .expect("xmp history pattern")
});

/// More than one recorded XMP history event means the metadata itself
/// remembers an edit trail.
pub struct XmpHistoryDetector;

impl Detector for XmpHistoryDetector {
    fn id(&self) -> &'static str {
        "xmp_history"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::XmpMetadata
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        if !ctx.structure.has_xmp_metadata {
            return Ok(Vec::new());
        }

        let mut event_count = 0usize;
        let mut actions: Vec<String> = Vec::new();
        for caps in HISTORY_EVENT.captures_iter(&ctx.text) {
            event_count += 1;
            let action = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            if !action.is_empty() && !actions.contains(&action) {
                actions.push(action);
            }
        }
        if event_count <= 1 {
            return Ok(Vec::new());
        }

        Ok(vec![Modification {
            kind: ModificationType::XmpMetadata,
            severity: Severity::Medium,
            title: "XMP edit history recorded".to_string(),
            description: format!(
                "XMP metadata records {event_count} history events ({}).",
                actions.join(", ")
            ),
            details: None,
            timestamp: None,
        }])
    }
}
