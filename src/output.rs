//! Knowledge base serialization.

use crate::core::KnowledgeRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `records` to `path` as a pretty-printed JSON array of
/// `{source, content}` objects, in input order.
///
/// The parent directory chain is created when absent, and an existing file
/// is overwritten. Non-ASCII text is written literally, not escaped.
pub fn write_knowledge_base(records: &[KnowledgeRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("Failed to write knowledge base to {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write knowledge base to {:?}", path))?;

    Ok(())
}
