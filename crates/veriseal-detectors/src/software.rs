use anyhow::Result;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;
use veriseal_pdf::{signature_matches, ToolSeverity};

/// One finding per recognized possible editor. Only the strong bucket
/// (online editors, scriptable libraries) reports; professional tools and
/// ordinary creation paths appear in the tooling history without a finding.
pub struct EditingSoftwareDetector;

impl Detector for EditingSoftwareDetector {
    fn id(&self) -> &'static str {
        "editing_software"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::EditingSoftware
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        let findings = signature_matches(&ctx.metadata)
            .into_iter()
            .filter(|m| m.severity == ToolSeverity::Strong)
            .map(|m| Modification {
                kind: ModificationType::EditingSoftware,
                severity: model_severity(m.severity),
                title: format!("Edited with {}", m.name),
                description: format!(
                    "Document metadata names {}, a tool commonly used to modify existing PDFs.",
                    m.name
                ),
                details: ctx.metadata.producer.clone().map(|p| format!("Producer: {p}")),
                timestamp: None,
            })
            .collect();
        Ok(findings)
    }
}

fn model_severity(tool: ToolSeverity) -> Severity {
    match tool {
        ToolSeverity::Strong => Severity::High,
        ToolSeverity::Moderate => Severity::Medium,
        ToolSeverity::Weak => Severity::Low,
    }
}
