//! Scanning primitives over raw PDF bytes.
//!
//! This crate deliberately does not parse the PDF object graph. It decodes
//! the file as lossy UTF-8 and pattern-matches dictionary syntax in the
//! surrounding text, which is cheap, total, and tolerant of the malformed
//! files that are the most interesting to analyze. Authoritative parsing
//! (cross-reference tables, object streams) is out of scope.

pub mod dates;
pub mod info;
pub mod software;
pub mod structure;
pub mod text;

pub use crate::info::{extract_metadata, Metadata};
pub use crate::software::{detect_editing_software, signature_matches, EditingSoftware, ToolSeverity};
pub use crate::structure::{analyze_structure, StructureInfo};
pub use crate::text::{decode_text, decode_text_bounded};
