use anyhow::Result;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

pub struct EmbeddedFileDetector;

impl Detector for EmbeddedFileDetector {
    fn id(&self) -> &'static str {
        "embedded_files"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::EmbeddedFile
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        if !ctx.structure.has_embedded_files {
            return Ok(Vec::new());
        }
        Ok(vec![Modification {
            kind: ModificationType::EmbeddedFile,
            severity: Severity::Medium,
            title: "Embedded files present".to_string(),
            description: "Document carries embedded file attachments added after or alongside \
                          the page content."
                .to_string(),
            details: None,
            timestamp: None,
        }])
    }
}
