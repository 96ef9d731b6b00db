use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use globset::Glob;
use memmap2::Mmap;
use rayon::prelude::*;
use walkdir::WalkDir;

use veriseal_core::report::{self, BatchEntry, BatchReport};
use veriseal_core::scan::{ScanOptions, DEFAULT_MAX_SCAN_BYTES};
use veriseal_detectors::{analyze_document, default_detectors};

const WARN_PDF_BYTES: u64 = 50 * 1024 * 1024;
const MAX_PDF_BYTES: u64 = 500 * 1024 * 1024;
const MAX_BATCH_FILES: usize = 10_000;
const MAX_WALK_DEPTH: usize = 10;

#[derive(Parser)]
#[command(name = "veriseal")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Analyze a PDF for signs of post-creation modification")]
    Analyze {
        #[arg(value_name = "PDF", required_unless_present = "path")]
        pdf: Option<String>,
        /// Analyze every matching file under this directory instead.
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long, default_value = "*.pdf")]
        glob: String,
        #[arg(long)]
        json: bool,
        #[arg(long, default_value_t = DEFAULT_MAX_SCAN_BYTES)]
        max_scan_bytes: usize,
        #[arg(long, alias = "seq")]
        sequential: bool,
    },
    #[command(about = "Extract metadata and structural markers without classification")]
    Metadata {
        pdf: String,
        #[arg(long)]
        json: bool,
        #[arg(long, default_value_t = DEFAULT_MAX_SCAN_BYTES)]
        max_scan_bytes: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Analyze {
            pdf,
            path,
            glob,
            json,
            max_scan_bytes,
            sequential,
        } => {
            let options = ScanOptions {
                max_scan_bytes,
                parallel: !sequential,
            };
            if let Some(dir) = path {
                return run_batch(&dir, &glob, options, json);
            }
            let pdf = pdf.ok_or_else(|| anyhow!("PDF path is required unless --path is set"))?;
            run_single(&pdf, options, json)
        }
        Command::Metadata {
            pdf,
            json,
            max_scan_bytes,
        } => run_metadata(&pdf, max_scan_bytes, json),
    }
}

fn run_single(pdf: &str, options: ScanOptions, json: bool) -> Result<()> {
    let mmap = mmap_file(pdf)?;
    let result = analyze_document(&mmap, options)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report::print_human(&result);
    }
    Ok(())
}

fn run_batch(dir: &Path, glob: &str, options: ScanOptions, json: bool) -> Result<()> {
    let matcher = Glob::new(glob)
        .with_context(|| format!("invalid glob {glob:?}"))?
        .compile_matcher();

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).max_depth(MAX_WALK_DEPTH) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
        if files.len() > MAX_BATCH_FILES {
            return Err(anyhow!("batch exceeds {MAX_BATCH_FILES} files"));
        }
    }
    files.sort();

    let detectors = default_detectors();
    let started = Instant::now();
    let mut entries: Vec<BatchEntry> = files
        .par_iter()
        .filter_map(|path| {
            let file_start = Instant::now();
            let mmap = match mmap_file(&path.to_string_lossy()) {
                Ok(mmap) => mmap,
                Err(err) => {
                    eprintln!("skipping {}: {err}", path.display());
                    return None;
                }
            };
            let per_file = ScanOptions {
                // Detector-level parallelism would oversubscribe the pool
                // that is already running one task per file.
                parallel: false,
                ..options.clone()
            };
            let result = veriseal_core::runner::run_analysis_with_detectors(
                &mmap, per_file, &detectors,
            )
            .ok()?;
            Some(BatchEntry {
                path: path.display().to_string(),
                overall_status: result.overall_status,
                confidence: result.confidence,
                counts: report::tally(&result.modifications),
                duration_ms: file_start.elapsed().as_millis() as u64,
            })
        })
        .collect();
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    let batch = BatchReport::from_entries(entries, started.elapsed().as_millis() as u64);
    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }
    for entry in &batch.entries {
        println!(
            "{}  {} ({})  findings={}",
            entry.path,
            entry.overall_status.as_str(),
            entry.confidence.as_str(),
            entry.counts.total
        );
    }
    println!(
        "Analyzed {} files in {} ms ({} flagged as modified; avg {} ms, max {} ms)",
        batch.entries.len(),
        batch.timing.total_ms,
        batch.modified_files,
        batch.timing.avg_ms,
        batch.timing.max_ms
    );
    Ok(())
}

fn run_metadata(pdf: &str, max_scan_bytes: usize, json: bool) -> Result<()> {
    let mmap = mmap_file(pdf)?;
    let text = veriseal_pdf::decode_text_bounded(&mmap, max_scan_bytes);
    let metadata = veriseal_pdf::extract_metadata(&text);
    let structure = veriseal_pdf::analyze_structure(&text, mmap.len() as u64);

    if json {
        let value = serde_json::json!({
            "metadata": metadata,
            "structureInfo": structure,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    for (label, value) in [
        ("Title", &metadata.title),
        ("Author", &metadata.author),
        ("Subject", &metadata.subject),
        ("Keywords", &metadata.keywords),
        ("Creator", &metadata.creator),
        ("Producer", &metadata.producer),
        ("CreationDate", &metadata.creation_date),
        ("ModDate", &metadata.modification_date),
        ("Trapped", &metadata.trapped),
    ] {
        match value {
            Some(value) => println!("{label}: {value}"),
            None => println!("{label}: -"),
        }
    }
    println!(
        "Version: {}  Pages (est.): {}  EOF markers: {}  Size: {} bytes",
        structure.pdf_version.as_deref().unwrap_or("unknown"),
        structure.page_count,
        structure.incremental_update_count,
        structure.file_size
    );
    Ok(())
}

fn mmap_file(path: &str) -> Result<Mmap> {
    let file = fs::File::open(path).with_context(|| format!("opening {path}"))?;
    let len = file.metadata()?.len();
    if len > MAX_PDF_BYTES {
        return Err(anyhow!(
            "{path} is {len} bytes, over the {MAX_PDF_BYTES} byte limit"
        ));
    }
    if len > WARN_PDF_BYTES {
        eprintln!("warning: {path} is {len} bytes; analysis may be slow");
    }
    // Safety: the mapping is read-only and lives shorter than the file handle.
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(mmap)
}
