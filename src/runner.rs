//! Orchestration: discover, extract, persist.
//!
//! The pipeline is a single linear pass. Per-file failures are printed and
//! skipped; only the final write can abort the run.

use crate::config::KbConfig;
use crate::core::{ExtractReport, KnowledgeRecord};
use crate::fs::find_pdfs;
use crate::output::write_knowledge_base;
use crate::pdf;
use anyhow::Result;

/// Scans the configured directory and extracts every matching PDF.
///
/// Returns the records in listing order (successes only; a failed file
/// contributes nothing) together with the run counters. A corrupt or
/// unreadable document never aborts the batch.
pub fn extract_all(config: &KbConfig) -> Result<(Vec<KnowledgeRecord>, ExtractReport)> {
    let paths = find_pdfs(&config.directory)?;
    println!("Found {} PDF files.", paths.len());

    let mut report = ExtractReport {
        found: paths.len(),
        ..Default::default()
    };
    let mut records = Vec::with_capacity(paths.len());

    for path in &paths {
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();

        if !config.quiet {
            println!("Processing: {}", name);
        }

        // Document handle lives only for this iteration; nothing is held
        // across file boundaries.
        match pdf::extract_document_text(path) {
            Ok(content) => {
                records.push(KnowledgeRecord {
                    source: name,
                    content,
                });
                report.extracted += 1;
            }
            Err(err) => {
                println!("Error processing {}: {}", name, err);
                report.failed += 1;
            }
        }
    }

    Ok((records, report))
}

/// Runs one full extraction pass and writes the knowledge base.
pub fn run(config: &KbConfig) -> Result<ExtractReport> {
    config.validate()?;

    let (records, report) = extract_all(config)?;
    write_knowledge_base(&records, &config.output)?;

    println!(
        "Successfully extracted text from {} files to {}",
        records.len(),
        config.output.display()
    );

    Ok(report)
}
