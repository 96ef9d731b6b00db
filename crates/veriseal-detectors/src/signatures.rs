use anyhow::Result;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

/// A digital signature is neutral-to-positive evidence, not a tamper
/// signal; it reports at INFO and never moves the verdict.
pub struct DigitalSignatureDetector;

impl Detector for DigitalSignatureDetector {
    fn id(&self) -> &'static str {
        "digital_signature"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::DigitalSignature
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        if !ctx.structure.has_digital_signatures {
            return Ok(Vec::new());
        }
        Ok(vec![Modification {
            kind: ModificationType::DigitalSignature,
            severity: Severity::Info,
            title: "Digital signature present".to_string(),
            description: "Document contains a digital signature object; signed revisions are \
                          tamper-evident on their own."
                .to_string(),
            details: None,
            timestamp: None,
        }])
    }
}
