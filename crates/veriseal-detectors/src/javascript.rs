use anyhow::Result;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

/// Active content is both a tamper indicator and a security concern, so it
/// reports HIGH. The finding is categorized as a content-stream
/// modification: scripts live in the document's streams, and the fixed
/// type enumeration has no narrower bucket.
pub struct JavaScriptDetector;

impl Detector for JavaScriptDetector {
    fn id(&self) -> &'static str {
        "javascript"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::ContentStream
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        if !ctx.structure.has_javascript {
            return Ok(Vec::new());
        }
        Ok(vec![Modification {
            kind: ModificationType::ContentStream,
            severity: Severity::High,
            title: "JavaScript content present".to_string(),
            description: "Document embeds JavaScript; active content is a strong indicator of \
                          post-creation modification and a security concern in its own right."
                .to_string(),
            details: None,
            timestamp: None,
        }])
    }
}
