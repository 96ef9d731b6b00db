use std::borrow::Cow;

use veriseal_pdf::{
    analyze_structure, decode_text_bounded, detect_editing_software, extract_metadata,
    EditingSoftware, Metadata, StructureInfo,
};

/// Default cap on how much of the file is decoded and scanned. The passes
/// are linear, but several of them run per file; bounding input keeps cost
/// predictable for adversarial sizes.
pub const DEFAULT_MAX_SCAN_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Truncate input past this many bytes before decoding; 0 = unbounded.
    pub max_scan_bytes: usize,
    /// Derive metadata and structure concurrently and run detectors on a
    /// thread pool. Output is identical either way.
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_scan_bytes: DEFAULT_MAX_SCAN_BYTES,
            parallel: false,
        }
    }
}

/// Everything a detector may look at: the raw bytes, the decoded text, and
/// the facts derived from it. Built once per analysis pass and shared
/// immutably by every check.
pub struct ScanContext<'a> {
    pub bytes: &'a [u8],
    pub text: Cow<'a, str>,
    pub metadata: Metadata,
    pub structure: StructureInfo,
    pub editing: EditingSoftware,
    pub options: ScanOptions,
}

impl<'a> ScanContext<'a> {
    pub fn new(bytes: &'a [u8], options: ScanOptions) -> Self {
        let text = decode_text_bounded(bytes, options.max_scan_bytes);
        let file_size = bytes.len() as u64;

        // Metadata extraction and structure scanning are independent pure
        // passes over the same text; rayon::join when asked, otherwise
        // sequential with the same result.
        let (metadata, structure) = if options.parallel {
            rayon::join(
                || extract_metadata(&text),
                || analyze_structure(&text, file_size),
            )
        } else {
            (extract_metadata(&text), analyze_structure(&text, file_size))
        };
        let editing = detect_editing_software(&metadata);

        Self {
            bytes,
            text,
            metadata,
            structure,
            editing,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_derives_all_inputs_once() {
        let bytes = b"%PDF-1.5\n/Producer (iLovePDF)\n/Type /Page\n%%EOF\n";
        let ctx = ScanContext::new(bytes, ScanOptions::default());
        assert_eq!(ctx.structure.pdf_version.as_deref(), Some("1.5"));
        assert_eq!(ctx.structure.page_count, 1);
        assert_eq!(ctx.metadata.producer.as_deref(), Some("iLovePDF"));
        assert_eq!(ctx.editing.possible_editors, vec!["iLovePDF"]);
        assert_eq!(ctx.structure.file_size, bytes.len() as u64);
    }

    #[test]
    fn parallel_and_sequential_derivation_agree() {
        let bytes = b"%PDF-1.4\n/Creator (Word)\n/Annots\n%%EOF\n%%EOF\n";
        let seq = ScanContext::new(bytes, ScanOptions::default());
        let par = ScanContext::new(
            bytes,
            ScanOptions {
                parallel: true,
                ..ScanOptions::default()
            },
        );
        assert_eq!(seq.metadata, par.metadata);
        assert_eq!(seq.structure, par.structure);
    }

    #[test]
    fn scan_bound_truncates_before_derivation() {
        let mut bytes = b"%PDF-1.4\n%%EOF\n".to_vec();
        bytes.extend_from_slice(b"%%EOF");
        let ctx = ScanContext::new(
            &bytes,
            ScanOptions {
                max_scan_bytes: 15,
                parallel: false,
            },
        );
        // The second marker sits past the bound.
        assert_eq!(ctx.structure.incremental_update_count, 1);
        // File size still reflects the real input.
        assert_eq!(ctx.structure.file_size, bytes.len() as u64);
    }
}
