use veriseal_core::model::{
    Confidence, Modification, ModificationType, OverallStatus, Severity,
};
use veriseal_core::report::{assess, render_summary, tally};

fn finding(severity: Severity) -> Modification {
    Modification {
        kind: ModificationType::MetadataChange,
        severity,
        title: "test finding".to_string(),
        description: "test".to_string(),
        details: None,
        timestamp: None,
    }
}

fn findings(severities: &[Severity]) -> Vec<Modification> {
    severities.iter().copied().map(finding).collect()
}

#[test]
fn critical_always_dominates() {
    let verdict = assess(&findings(&[Severity::Critical]));
    assert_eq!(verdict.status, OverallStatus::DefinitelyModified);
    assert_eq!(verdict.confidence, Confidence::High);
    assert!(verdict.is_modified);

    // Whatever else is present, one critical settles it.
    let verdict = assess(&findings(&[
        Severity::Info,
        Severity::Low,
        Severity::Critical,
        Severity::Medium,
    ]));
    assert_eq!(verdict.status, OverallStatus::DefinitelyModified);
    assert_eq!(verdict.confidence, Confidence::High);
}

#[test]
fn two_highs_are_definite() {
    let verdict = assess(&findings(&[Severity::High, Severity::High]));
    assert_eq!(verdict.status, OverallStatus::DefinitelyModified);
    assert_eq!(verdict.confidence, Confidence::High);
}

#[test]
fn one_high_with_two_mediums_is_definite() {
    let verdict = assess(&findings(&[
        Severity::High,
        Severity::Medium,
        Severity::Medium,
    ]));
    assert_eq!(verdict.status, OverallStatus::DefinitelyModified);
    assert_eq!(verdict.confidence, Confidence::High);
}

#[test]
fn one_high_alone_is_likely_at_medium_confidence() {
    let verdict = assess(&findings(&[Severity::High]));
    assert_eq!(verdict.status, OverallStatus::LikelyModified);
    assert_eq!(verdict.confidence, Confidence::Medium);

    let verdict = assess(&findings(&[Severity::High, Severity::Medium]));
    assert_eq!(verdict.status, OverallStatus::LikelyModified);
    assert_eq!(verdict.confidence, Confidence::Medium);
}

#[test]
fn two_mediums_are_likely_at_medium_confidence() {
    let verdict = assess(&findings(&[Severity::Medium, Severity::Medium]));
    assert_eq!(verdict.status, OverallStatus::LikelyModified);
    assert_eq!(verdict.confidence, Confidence::Medium);
}

#[test]
fn one_medium_is_likely_at_low_confidence() {
    let verdict = assess(&findings(&[Severity::Medium]));
    assert_eq!(verdict.status, OverallStatus::LikelyModified);
    assert_eq!(verdict.confidence, Confidence::Low);
}

#[test]
fn medium_only_input_never_reaches_definite() {
    let verdict = assess(&findings(&[Severity::Medium; 10]));
    assert_eq!(verdict.status, OverallStatus::LikelyModified);
}

#[test]
fn info_and_low_never_move_the_verdict() {
    let verdict = assess(&findings(&[
        Severity::Info,
        Severity::Info,
        Severity::Low,
        Severity::Low,
        Severity::Low,
    ]));
    assert_eq!(verdict.status, OverallStatus::Original);
    assert!(!verdict.is_modified);
}

#[test]
fn empty_findings_are_original() {
    let verdict = assess(&[]);
    assert_eq!(verdict.status, OverallStatus::Original);
    assert!(!verdict.is_modified);
}

#[test]
fn tally_buckets_by_severity() {
    let counts = tally(&findings(&[
        Severity::Critical,
        Severity::High,
        Severity::High,
        Severity::Medium,
        Severity::Info,
    ]));
    assert_eq!(counts.total, 5);
    assert_eq!(counts.critical, 1);
    assert_eq!(counts.high, 2);
    assert_eq!(counts.medium, 1);
    assert_eq!(counts.low, 0);
    assert_eq!(counts.info, 1);
}

#[test]
fn summary_mentions_the_dominant_cause() {
    let mods = findings(&[Severity::Critical]);
    let summary = render_summary(assess(&mods), &mods);
    assert!(summary.contains("1 indicator"));
    assert!(summary.contains("critical"));

    let mods = findings(&[Severity::High, Severity::High]);
    let summary = render_summary(assess(&mods), &mods);
    assert!(summary.contains("2 indicators"));
    assert!(summary.contains("high-severity"));

    let mods = findings(&[Severity::Medium]);
    let summary = render_summary(assess(&mods), &mods);
    assert!(summary.contains("may have been modified"));

    let summary = render_summary(assess(&[]), &[]);
    assert!(summary.contains("No signs"));
}
