use std::time::Instant;

use anyhow::Result;
use tracing::{debug, error, info};

use crate::detect::Detector;
use crate::model::{AnalysisResult, Modification};
use crate::report::build_result;
use crate::scan::{ScanContext, ScanOptions};

/// Run one full analysis pass: decode, derive facts, run every detector in
/// registry order, aggregate the verdict, and assemble the report.
///
/// Detection order is preserved in the output finding list. Analyzing the
/// same bytes twice yields identical results.
pub fn run_analysis_with_detectors(
    bytes: &[u8],
    options: ScanOptions,
    detectors: &[Box<dyn Detector>],
) -> Result<AnalysisResult> {
    let span = tracing::info_span!(
        "analyze",
        bytes_len = bytes.len(),
        parallel = options.parallel,
        max_scan_bytes = options.max_scan_bytes
    );
    let _guard = span.enter();
    info!("Starting analysis");

    let ctx = ScanContext::new(bytes, options);

    let modifications: Vec<Modification> = if ctx.options.parallel {
        use rayon::prelude::*;
        // par_iter preserves index order on collect, so the flattened
        // finding list is identical to the sequential pass.
        detectors
            .par_iter()
            .filter_map(|d| {
                let start = Instant::now();
                match d.run(&ctx) {
                    Ok(found) => {
                        debug!(
                            detector = d.id(),
                            kind = ?d.kind(),
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            findings = found.len(),
                            "Detector finished"
                        );
                        Some(found)
                    }
                    Err(err) => {
                        error!(detector = d.id(), error = %err, "Detector failed");
                        None
                    }
                }
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    } else {
        let mut out = Vec::new();
        for d in detectors {
            let start = Instant::now();
            let found = d.run(&ctx)?;
            debug!(
                detector = d.id(),
                kind = ?d.kind(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                findings = found.len(),
                "Detector finished"
            );
            out.extend(found);
        }
        out
    };

    let result = build_result(&ctx, modifications);
    info!(
        status = result.overall_status.as_str(),
        confidence = result.confidence.as_str(),
        findings = result.modifications.len(),
        "Analysis complete"
    );
    Ok(result)
}
