use anyhow::Result;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;

/// A producing tool unrelated to the authoring tool suggests a conversion
/// or edit pass distinct from original authoring.
///
/// The comparison is coarse on purpose: only each string's first word is
/// checked for appearing inside the other, so "Adobe Acrobat" and
/// "Adobe PDF Library" are treated as related. Preserved as an
/// approximation, not refined.
pub struct ProducerMismatchDetector;

impl Detector for ProducerMismatchDetector {
    fn id(&self) -> &'static str {
        "producer_mismatch"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::MetadataChange
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        let (Some(creator), Some(producer)) = (&ctx.metadata.creator, &ctx.metadata.producer)
        else {
            return Ok(Vec::new());
        };
        let (Some(creator_word), Some(producer_word)) =
            (first_word(creator), first_word(producer))
        else {
            return Ok(Vec::new());
        };

        let creator_lower = creator.to_lowercase();
        let producer_lower = producer.to_lowercase();
        let related = producer_lower.contains(&creator_word)
            || creator_lower.contains(&producer_word);
        if related {
            return Ok(Vec::new());
        }

        Ok(vec![Modification {
            kind: ModificationType::MetadataChange,
            severity: Severity::Medium,
            title: "Creator and producer disagree".to_string(),
            description: format!(
                "Document was authored with \"{creator}\" but produced by \"{producer}\", \
                 suggesting a conversion or edit pass after authoring."
            ),
            details: None,
            timestamp: None,
        }])
    }
}

fn first_word(s: &str) -> Option<String> {
    s.split_whitespace().next().map(str::to_lowercase)
}
