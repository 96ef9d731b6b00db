use anyhow::Result;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

/// Incremental saves append a new `%%EOF` instead of rewriting the file;
/// every marker past the first is one re-open-and-resave cycle. This is
/// the cheapest strong tamper signal available without parsing.
pub struct IncrementalUpdateDetector;

impl Detector for IncrementalUpdateDetector {
    fn id(&self) -> &'static str {
        "incremental_updates"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::IncrementalUpdate
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        let count = ctx.structure.incremental_update_count;
        if count <= 1 {
            return Ok(Vec::new());
        }

        let resaves = count - 1;
        let severity = if count > 2 {
            Severity::High
        } else {
            Severity::Medium
        };
        let cycles = if resaves == 1 {
            "1 save cycle".to_string()
        } else {
            format!("{resaves} save cycles")
        };

        Ok(vec![Modification {
            kind: ModificationType::IncrementalUpdate,
            severity,
            title: "Incremental updates present".to_string(),
            description: format!(
                "Document carries {count} end-of-file markers, indicating {cycles} after the original write."
            ),
            details: None,
            timestamp: None,
        }])
    }
}
