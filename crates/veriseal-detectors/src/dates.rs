use anyhow::Result;

use veriseal_core::detect::Detector;
use veriseal_core::model::{Modification, ModificationType, Severity};
use veriseal_core::scan::ScanContext;
use veriseal_pdf::dates::{describe_gap, format_pdf_date, parse_pdf_date};

/// The primary "was this edited after it was produced" signal: a
/// modification date later than the creation date.
pub struct DateDiscrepancyDetector;

impl Detector for DateDiscrepancyDetector {
    fn id(&self) -> &'static str {
        "date_discrepancy"
    }

    fn kind(&self) -> ModificationType {
        ModificationType::MetadataChange
    }

    fn run(&self, ctx: &ScanContext) -> Result<Vec<Modification>> {
        let (Some(created_raw), Some(modified_raw)) =
            (&ctx.metadata.creation_date, &ctx.metadata.modification_date)
        else {
            return Ok(Vec::new());
        };
        let (Some(created), Some(modified)) =
            (parse_pdf_date(created_raw), parse_pdf_date(modified_raw))
        else {
            return Ok(Vec::new());
        };
        if modified <= created {
            return Ok(Vec::new());
        }

        let gap = modified - created;
        // One whole day is the boundary between authoring churn and a
        // separate editing session.
        let severity = if gap.num_days() >= 1 {
            Severity::High
        } else {
            Severity::Medium
        };

        Ok(vec![Modification {
            kind: ModificationType::MetadataChange,
            severity,
            title: "Modified after creation".to_string(),
            description: format!(
                "Document was modified {} after it was created.",
                describe_gap(gap)
            ),
            details: Some(format!(
                "Created {}; last modified {}.",
                format_pdf_date(created_raw),
                format_pdf_date(modified_raw)
            )),
            timestamp: Some(format_pdf_date(modified_raw)),
        }])
    }
}
