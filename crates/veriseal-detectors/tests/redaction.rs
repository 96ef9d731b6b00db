mod common;

use common::{build_pdf, default_scan_opts};
use veriseal_core::model::{Confidence, ModificationType, OverallStatus, Severity};
use veriseal_detectors::analyze_document;

#[test]
fn redaction_marker_alone_is_definitely_modified() {
    let result =
        analyze_document(b"/Subtype /Redact", default_scan_opts()).expect("analyze");
    let finding = result
        .modifications
        .iter()
        .find(|m| m.kind == ModificationType::Redaction)
        .expect("redaction finding");
    assert_eq!(finding.severity, Severity::Critical);
    assert_eq!(result.overall_status, OverallStatus::DefinitelyModified);
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn redaction_dominates_regardless_of_other_signals() {
    // A full document with benign metadata still goes critical once a
    // redaction subtype shows up anywhere.
    let extra = "5 0 obj\n<< /Annots [6 0 R] >>\nendobj\n\
                 6 0 obj\n<< /Type /Annot /Subtype /Redact /Rect [0 0 10 10] >>\nendobj\n";
    let bytes = build_pdf("/Producer (Microsoft Word)", extra, 1);
    let result = analyze_document(&bytes, default_scan_opts()).expect("analyze");
    assert_eq!(result.overall_status, OverallStatus::DefinitelyModified);
    assert_eq!(result.confidence, Confidence::High);

    // The aggregate annotation check fires too, uplifted by the Redact
    // subtype, and independently of the critical top-level finding.
    let annotation = result
        .modifications
        .iter()
        .find(|m| m.kind == ModificationType::Annotation)
        .expect("annotation finding");
    assert_eq!(annotation.severity, Severity::High);
}
