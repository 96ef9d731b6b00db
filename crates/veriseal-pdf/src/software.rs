//! Editing-software recognition.
//!
//! A fixed ordered table of substring recognizers over the Creator and
//! Producer strings. Online editors and scriptable libraries are the most
//! common vector for casual tampering, so they rank strong; professional
//! desktop tools rank moderate; ordinary creation paths (office suites,
//! print drivers, headless browsers) rank weak.

use serde::{Deserialize, Serialize};

use crate::info::Metadata;

/// How strongly a recognized tool suggests post-creation editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolSeverity {
    Weak,
    Moderate,
    Strong,
}

/// One recognizer: a case-insensitive substring token, the canonical
/// display name, and the tool's severity bucket.
#[derive(Debug, Clone, Copy)]
pub struct SoftwareSignature {
    pub token: &'static str,
    pub name: &'static str,
    pub severity: ToolSeverity,
}

const fn sig(token: &'static str, name: &'static str, severity: ToolSeverity) -> SoftwareSignature {
    SoftwareSignature {
        token,
        name,
        severity,
    }
}

/// Recognizer table, in match-priority order.
pub static SIGNATURES: &[SoftwareSignature] = &[
    // Online editors
    sig("ilovepdf", "iLovePDF", ToolSeverity::Strong),
    sig("smallpdf", "Smallpdf", ToolSeverity::Strong),
    sig("pdfescape", "PDFescape", ToolSeverity::Strong),
    sig("sejda", "Sejda", ToolSeverity::Strong),
    sig("pdffiller", "pdfFiller", ToolSeverity::Strong),
    sig("dochub", "DocHub", ToolSeverity::Strong),
    sig("pdf24", "PDF24", ToolSeverity::Strong),
    sig("soda pdf", "Soda PDF", ToolSeverity::Strong),
    sig("pdf candy", "PDF Candy", ToolSeverity::Strong),
    // Programmatic libraries and rewriters
    sig("pypdf2", "PyPDF2", ToolSeverity::Strong),
    sig("pypdf", "pypdf", ToolSeverity::Strong),
    sig("pdf-lib", "pdf-lib", ToolSeverity::Strong),
    sig("itext", "iText", ToolSeverity::Strong),
    sig("pdfbox", "Apache PDFBox", ToolSeverity::Strong),
    sig("fpdf", "FPDF", ToolSeverity::Strong),
    sig("tcpdf", "TCPDF", ToolSeverity::Strong),
    sig("pdfsharp", "PDFsharp", ToolSeverity::Strong),
    sig("qpdf", "qpdf", ToolSeverity::Strong),
    // Professional desktop tools
    sig("adobe acrobat", "Adobe Acrobat", ToolSeverity::Moderate),
    sig("foxit", "Foxit", ToolSeverity::Moderate),
    sig("nitro", "Nitro PDF", ToolSeverity::Moderate),
    sig("pdf-xchange", "PDF-XChange", ToolSeverity::Moderate),
    sig("ghostscript", "Ghostscript", ToolSeverity::Moderate),
    // Mobile OS print paths
    sig("quartz pdfcontext", "macOS/iOS Quartz", ToolSeverity::Moderate),
    sig("ios version", "iOS Print", ToolSeverity::Moderate),
    // Ordinary creation paths
    sig("microsoft word", "Microsoft Word", ToolSeverity::Weak),
    sig("microsoft excel", "Microsoft Excel", ToolSeverity::Weak),
    sig("microsoft powerpoint", "Microsoft PowerPoint", ToolSeverity::Weak),
    sig("microsoft office", "Microsoft Office", ToolSeverity::Weak),
    sig("microsoft: print to pdf", "Microsoft Print to PDF", ToolSeverity::Weak),
    sig("libreoffice", "LibreOffice", ToolSeverity::Weak),
    sig("openoffice", "OpenOffice", ToolSeverity::Weak),
    sig("google docs", "Google Docs", ToolSeverity::Weak),
    sig("pdftex", "pdfTeX", ToolSeverity::Weak),
    sig("xetex", "XeTeX", ToolSeverity::Weak),
    sig("luatex", "LuaTeX", ToolSeverity::Weak),
    sig("latex", "LaTeX", ToolSeverity::Weak),
    sig("skia/pdf", "Chromium Print", ToolSeverity::Weak),
    sig("chromium", "Chromium Print", ToolSeverity::Weak),
    sig("chrome", "Chromium Print", ToolSeverity::Weak),
    sig("wkhtmltopdf", "wkhtmltopdf", ToolSeverity::Weak),
    sig("weasyprint", "WeasyPrint", ToolSeverity::Weak),
    sig("prince", "Prince", ToolSeverity::Weak),
];

/// Tools recognized in the document's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingSoftware {
    /// Canonical names of every recognized tool, deduplicated, in table
    /// order.
    pub software: Vec<String>,
    /// The strong-severity subset: tools whose presence alone suggests an
    /// edit pass rather than original authoring.
    pub possible_editors: Vec<String>,
}

/// Signatures matching either the creator or producer string,
/// case-insensitively, deduplicated by canonical name.
pub fn signature_matches(metadata: &Metadata) -> Vec<&'static SoftwareSignature> {
    let creator = metadata.creator.as_deref().unwrap_or("").to_lowercase();
    let producer = metadata.producer.as_deref().unwrap_or("").to_lowercase();

    let mut matches: Vec<&'static SoftwareSignature> = Vec::new();
    for signature in SIGNATURES {
        if !creator.contains(signature.token) && !producer.contains(signature.token) {
            continue;
        }
        // Dedup by canonical name, and let a more specific token that
        // already matched shadow its prefix (pypdf2 over pypdf).
        if matches
            .iter()
            .any(|m| m.name == signature.name || m.token.contains(signature.token))
        {
            continue;
        }
        matches.push(signature);
    }
    matches
}

/// Full recognition result over a document's metadata.
pub fn detect_editing_software(metadata: &Metadata) -> EditingSoftware {
    let matches = signature_matches(metadata);
    let software = matches.iter().map(|m| m.name.to_string()).collect();
    let possible_editors = matches
        .iter()
        .filter(|m| m.severity == ToolSeverity::Strong)
        .map(|m| m.name.to_string())
        .collect();
    EditingSoftware {
        software,
        possible_editors,
    }
}
