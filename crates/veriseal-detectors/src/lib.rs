//! The modification checks.
//!
//! One module per check. `default_detectors` returns the registry in
//! classification order; the runner preserves that order in the report's
//! finding list, so registry order is part of observable behavior.

use anyhow::Result;
use veriseal_core::detect::Detector;
use veriseal_core::model::AnalysisResult;
use veriseal_core::runner::run_analysis_with_detectors;
use veriseal_core::scan::ScanOptions;

pub mod annotations;
pub mod dates;
pub mod embedded;
pub mod forms;
pub mod incremental;
pub mod javascript;
pub mod producer;
pub mod redaction;
pub mod signatures;
pub mod software;
pub mod xmp;

pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(dates::DateDiscrepancyDetector),
        Box::new(incremental::IncrementalUpdateDetector),
        Box::new(software::EditingSoftwareDetector),
        Box::new(annotations::AnnotationDetector),
        Box::new(forms::FormFieldDetector),
        Box::new(redaction::RedactionDetector),
        Box::new(signatures::DigitalSignatureDetector),
        Box::new(embedded::EmbeddedFileDetector),
        Box::new(javascript::JavaScriptDetector),
        Box::new(xmp::XmpHistoryDetector),
        Box::new(producer::ProducerMismatchDetector),
    ]
}

/// Analyze a byte buffer with the default detector set.
pub fn analyze_document(bytes: &[u8], options: ScanOptions) -> Result<AnalysisResult> {
    let detectors = default_detectors();
    run_analysis_with_detectors(bytes, options, &detectors)
}
