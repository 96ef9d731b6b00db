//! Verdict aggregation and report assembly.
//!
//! The verdict is a hand-tuned threshold cascade over severity counts, not
//! a weighted score. The thresholds live in named constants so they can be
//! tuned and tested without touching control flow. INFO and LOW findings
//! never move the verdict.

use serde::{Deserialize, Serialize};

use crate::model::{
    AnalysisResult, Confidence, EditingHistory, Modification, OverallStatus, Severity,
};
use crate::scan::ScanContext;

/// One critical finding alone settles the verdict.
pub const CRITICAL_DEFINITE_COUNT: usize = 1;
/// This many high findings settle the verdict without a critical one.
pub const HIGH_DEFINITE_COUNT: usize = 2;
/// A single high finding settles the verdict when backed by this many
/// medium findings.
pub const MEDIUM_CORROBORATION_COUNT: usize = 2;
/// This many medium findings alone make modification likely at medium
/// confidence.
pub const MEDIUM_LIKELY_COUNT: usize = 2;

/// Findings bucketed by severity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeverityTally {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
}

pub fn tally(modifications: &[Modification]) -> SeverityTally {
    let mut counts = SeverityTally {
        total: modifications.len(),
        ..SeverityTally::default()
    };
    for m in modifications {
        match m.severity {
            Severity::Critical => counts.critical += 1,
            Severity::High => counts.high += 1,
            Severity::Medium => counts.medium += 1,
            Severity::Low => counts.low += 1,
            Severity::Info => counts.info += 1,
        }
    }
    counts
}

/// Aggregate verdict for a finding list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_modified: bool,
    pub confidence: Confidence,
    pub status: OverallStatus,
}

/// The threshold cascade. Precedence is strict: CRITICAL dominates, then
/// the high-count rules, then the medium-count rules; a MEDIUM-only input
/// can never reach DEFINITELY_MODIFIED.
pub fn assess(modifications: &[Modification]) -> Verdict {
    let counts = tally(modifications);

    if counts.critical >= CRITICAL_DEFINITE_COUNT {
        return Verdict {
            is_modified: true,
            confidence: Confidence::High,
            status: OverallStatus::DefinitelyModified,
        };
    }
    if counts.high >= HIGH_DEFINITE_COUNT
        || (counts.high >= 1 && counts.medium >= MEDIUM_CORROBORATION_COUNT)
    {
        return Verdict {
            is_modified: true,
            confidence: Confidence::High,
            status: OverallStatus::DefinitelyModified,
        };
    }
    if counts.high >= 1 || counts.medium >= MEDIUM_LIKELY_COUNT {
        return Verdict {
            is_modified: true,
            confidence: Confidence::Medium,
            status: OverallStatus::LikelyModified,
        };
    }
    if counts.medium >= 1 {
        return Verdict {
            is_modified: true,
            confidence: Confidence::Low,
            status: OverallStatus::LikelyModified,
        };
    }
    Verdict {
        is_modified: false,
        confidence: Confidence::High,
        status: OverallStatus::Original,
    }
}

/// One status-selected sentence describing the outcome.
pub fn render_summary(verdict: Verdict, modifications: &[Modification]) -> String {
    let counts = tally(modifications);
    match verdict.status {
        OverallStatus::Original => {
            "No signs of post-creation modification were found in this document.".to_string()
        }
        OverallStatus::LikelyModified => format!(
            "Found {} that this document may have been modified after creation.",
            indicator_count(counts.total)
        ),
        OverallStatus::DefinitelyModified => {
            let dominant = if counts.critical >= CRITICAL_DEFINITE_COUNT {
                "critical evidence of deliberate content removal"
            } else {
                "multiple high-severity modification signals"
            };
            format!(
                "Found {} that this document was modified after creation, including {}.",
                indicator_count(counts.total),
                dominant
            )
        }
    }
}

fn indicator_count(total: usize) -> String {
    if total == 1 {
        "1 indicator".to_string()
    } else {
        format!("{total} indicators")
    }
}

/// Assemble the final report from the context and the detection-ordered
/// finding list. Findings are not re-sorted: callers depend on detection
/// order.
pub fn build_result(ctx: &ScanContext<'_>, modifications: Vec<Modification>) -> AnalysisResult {
    let verdict = assess(&modifications);
    let summary = render_summary(verdict, &modifications);

    let mut edit_dates: Vec<String> = Vec::new();
    for m in &modifications {
        if let Some(ts) = &m.timestamp {
            if !edit_dates.contains(ts) {
                edit_dates.push(ts.clone());
            }
        }
    }

    AnalysisResult {
        is_modified: verdict.is_modified,
        confidence: verdict.confidence,
        overall_status: verdict.status,
        modifications,
        metadata: ctx.metadata.clone(),
        structure_info: ctx.structure.clone(),
        editing_history: EditingHistory {
            software: ctx.editing.software.clone(),
            possible_editors: ctx.editing.possible_editors.clone(),
            edit_dates,
        },
        summary,
    }
}

/// Per-file entry in a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub path: String,
    pub overall_status: OverallStatus,
    pub confidence: Confidence,
    pub counts: SeverityTally,
    pub duration_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchTiming {
    pub total_ms: u64,
    pub avg_ms: u64,
    pub max_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub modified_files: usize,
    pub timing: BatchTiming,
}

impl BatchReport {
    pub fn from_entries(entries: Vec<BatchEntry>, total_ms: u64) -> Self {
        let modified_files = entries
            .iter()
            .filter(|e| e.overall_status != OverallStatus::Original)
            .count();
        let max_ms = entries.iter().map(|e| e.duration_ms).max().unwrap_or(0);
        let avg_ms = if entries.is_empty() {
            0
        } else {
            entries.iter().map(|e| e.duration_ms).sum::<u64>() / entries.len() as u64
        };
        Self {
            entries,
            modified_files,
            timing: BatchTiming {
                total_ms,
                avg_ms,
                max_ms,
            },
        }
    }
}

/// Human-readable rendering for the CLI.
pub fn print_human(result: &AnalysisResult) {
    let counts = tally(&result.modifications);
    println!(
        "Status: {}  (confidence {})",
        result.overall_status.as_str(),
        result.confidence.as_str()
    );
    println!("{}", result.summary);
    println!(
        "Findings: {}  Critical: {}  High: {}  Medium: {}  Low: {}  Info: {}",
        counts.total, counts.critical, counts.high, counts.medium, counts.low, counts.info
    );
    for m in &result.modifications {
        println!("  [{}] {}", m.severity.as_str(), m.title);
        println!("      {}", m.description);
        if let Some(details) = &m.details {
            println!("      {details}");
        }
    }

    println!();
    println!("Document");
    let meta = &result.metadata;
    for (label, value) in [
        ("Title", &meta.title),
        ("Author", &meta.author),
        ("Creator", &meta.creator),
        ("Producer", &meta.producer),
    ] {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    }
    for (label, raw) in [
        ("Created", &meta.creation_date),
        ("Modified", &meta.modification_date),
    ] {
        if let Some(raw) = raw {
            println!("  {label}: {}", veriseal_pdf::dates::format_pdf_date(raw));
        }
    }
    let st = &result.structure_info;
    println!(
        "  Version: {}  Pages (est.): {}  Size: {} bytes",
        st.pdf_version.as_deref().unwrap_or("unknown"),
        st.page_count,
        st.file_size
    );
    println!(
        "  EOF markers: {}  Encrypted: {}  Linearized: {}",
        st.incremental_update_count, st.is_encrypted, st.is_linearized
    );
    if !result.editing_history.software.is_empty() {
        println!(
            "  Tooling: {}",
            result.editing_history.software.join(", ")
        );
    }
}
