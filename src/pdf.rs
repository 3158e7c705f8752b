//! Per-page PDF text extraction.

use std::path::Path;
use thiserror::Error;

/// Failure to pull text out of a single document.
///
/// Encrypted, truncated, and non-PDF files all land here; callers treat the
/// document as unreadable and move on to the next file.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to extract text: {0}")]
    Extract(#[from] pdf_extract::OutputError),
}

/// Extracts the plain text of every page of the document at `path`, in page
/// order, with a newline appended after each page (including the last).
///
/// A document with no pages yields an empty string.
pub fn extract_document_text(path: &Path) -> Result<String, PdfError> {
    let bytes = std::fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;
    Ok(join_pages(&pages))
}

/// Concatenates page texts, terminating every page with `\n`.
pub(crate) fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_join_pages_newline_per_page() {
        let pages = vec!["Hello".to_string(), "World".to_string()];
        assert_eq!(join_pages(&pages), "Hello\nWorld\n");
    }

    #[test]
    fn test_join_pages_empty_document() {
        assert_eq!(join_pages(&[]), "");
    }

    #[test]
    fn test_join_pages_single_empty_page() {
        let pages = vec![String::new()];
        assert_eq!(join_pages(&pages), "\n");
    }

    #[test]
    fn test_invalid_header_is_an_error() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"this is not a pdf")?;

        let result = extract_document_text(file.path());
        assert!(matches!(result, Err(PdfError::Extract(_))));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = extract_document_text(Path::new("no_such_file_xyz.pdf"));
        assert!(matches!(result, Err(PdfError::Read(_))));
    }
}
