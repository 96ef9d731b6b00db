mod common;

use common::{build_pdf, default_scan_opts};
use veriseal_core::model::{Confidence, ModificationType, OverallStatus, Severity};
use veriseal_core::scan::ScanOptions;
use veriseal_detectors::analyze_document;

#[test]
fn word_document_resaved_through_ilovepdf() {
    let bytes = build_pdf(
        "/Creator (Microsoft Word) /Producer (iLovePDF) \
         /CreationDate (D:20240101120000) /ModDate (D:20240103120000)",
        "",
        3,
    );
    let result = analyze_document(&bytes, default_scan_opts()).expect("analyze");

    let date = result
        .modifications
        .iter()
        .find(|m| m.kind == ModificationType::MetadataChange && m.title.contains("Modified"))
        .expect("date finding");
    assert_eq!(date.severity, Severity::High);
    assert!(date.description.contains("2 days"));

    let incremental = result
        .modifications
        .iter()
        .find(|m| m.kind == ModificationType::IncrementalUpdate)
        .expect("incremental finding");
    assert_eq!(incremental.severity, Severity::High);
    assert_eq!(result.structure_info.incremental_update_count, 3);

    let software = result
        .modifications
        .iter()
        .find(|m| m.kind == ModificationType::EditingSoftware)
        .expect("software finding");
    assert_eq!(software.severity, Severity::High);
    assert!(software.title.contains("iLovePDF"));

    assert_eq!(result.overall_status, OverallStatus::DefinitelyModified);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.is_modified);

    // History reflects both tools, but only the editor is a possible editor.
    assert_eq!(
        result.editing_history.software,
        vec!["iLovePDF", "Microsoft Word"]
    );
    assert_eq!(result.editing_history.possible_editors, vec!["iLovePDF"]);
    assert_eq!(
        result.editing_history.edit_dates,
        vec!["2024-01-03 12:00:00 +00:00"]
    );
}

#[test]
fn findings_come_back_in_detection_order() {
    let bytes = build_pdf(
        "/Creator (Microsoft Word) /Producer (iLovePDF) \
         /CreationDate (D:20240101120000) /ModDate (D:20240103120000)",
        "",
        3,
    );
    let result = analyze_document(&bytes, default_scan_opts()).expect("analyze");
    let kinds: Vec<ModificationType> = result.modifications.iter().map(|m| m.kind).collect();
    let date_pos = kinds
        .iter()
        .position(|k| *k == ModificationType::MetadataChange)
        .expect("date");
    let inc_pos = kinds
        .iter()
        .position(|k| *k == ModificationType::IncrementalUpdate)
        .expect("incremental");
    let sw_pos = kinds
        .iter()
        .position(|k| *k == ModificationType::EditingSoftware)
        .expect("software");
    assert!(date_pos < inc_pos && inc_pos < sw_pos);
}

#[test]
fn analysis_is_deterministic() {
    let bytes = build_pdf(
        "/Creator (Microsoft Word) /Producer (iLovePDF) \
         /CreationDate (D:20240101120000) /ModDate (D:20240103120000)",
        "/Subtype /Redact\n",
        3,
    );
    let first = analyze_document(&bytes, default_scan_opts()).expect("analyze");
    let second = analyze_document(&bytes, default_scan_opts()).expect("analyze");
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn parallel_run_matches_sequential_run() {
    let bytes = build_pdf(
        "/Creator (Microsoft Word) /Producer (iLovePDF) \
         /CreationDate (D:20240101120000) /ModDate (D:20240103120000)",
        "",
        3,
    );
    let sequential = analyze_document(&bytes, default_scan_opts()).expect("analyze");
    let parallel = analyze_document(
        &bytes,
        ScanOptions {
            parallel: true,
            ..ScanOptions::default()
        },
    )
    .expect("analyze");
    assert_eq!(
        serde_json::to_string(&sequential).expect("serialize"),
        serde_json::to_string(&parallel).expect("serialize")
    );
}

#[test]
fn empty_buffer_is_original_with_no_findings() {
    let result = analyze_document(b"", default_scan_opts()).expect("analyze");
    assert!(!result.is_modified);
    assert_eq!(result.overall_status, OverallStatus::Original);
    assert!(result.modifications.is_empty());
    assert_eq!(result.structure_info.file_size, 0);
}

#[test]
fn non_pdf_input_degrades_to_original() {
    let result = analyze_document(b"plain text, nothing pdf about it", default_scan_opts())
        .expect("analyze");
    assert_eq!(result.overall_status, OverallStatus::Original);
    assert!(result.modifications.is_empty());
    assert_eq!(result.structure_info.pdf_version, None);
}

#[test]
fn binary_garbage_never_fails() {
    let bytes: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let result = analyze_document(&bytes, default_scan_opts()).expect("analyze");
    assert_eq!(result.structure_info.file_size, 4096);
}
