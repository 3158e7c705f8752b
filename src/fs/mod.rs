use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Lists the `*.pdf` files directly inside `dir`.
///
/// The match is non-recursive and case-sensitive: `notes.pdf` matches,
/// `NOTES.PDF` does not. Directories whose names happen to end in `.pdf`
/// are excluded.
pub fn find_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    // Escape the directory component so a path like "my [docs]" is taken
    // literally; only the trailing *.pdf is a wildcard.
    let pattern = format!("{}/*.pdf", glob::Pattern::escape(&dir.to_string_lossy()));

    let entries =
        glob::glob(&pattern).with_context(|| format!("Invalid scan directory: {:?}", dir))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    files.push(path);
                }
            }
            Err(err) => eprintln!("Error listing {}: {}", err.path().display(), err),
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_find_pdfs_filters_and_sorts() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        File::create(root.join("beta.pdf"))?;
        File::create(root.join("alpha.pdf"))?;
        File::create(root.join("notes.txt"))?;
        File::create(root.join("UPPER.PDF"))?;

        // A subdirectory PDF must not be picked up (non-recursive scan)
        fs::create_dir(root.join("sub"))?;
        File::create(root.join("sub/nested.pdf"))?;

        // A directory with a .pdf name must not be picked up either
        fs::create_dir(root.join("folder.pdf"))?;

        let paths = find_pdfs(root)?;
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["alpha.pdf", "beta.pdf"]);
        Ok(())
    }

    #[test]
    fn test_find_pdfs_empty_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let paths = find_pdfs(temp_dir.path())?;
        assert!(paths.is_empty());
        Ok(())
    }

    #[test]
    fn test_find_pdfs_glob_chars_in_directory_name() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("my [docs]");
        fs::create_dir(&root)?;
        File::create(root.join("doc.pdf"))?;

        let paths = find_pdfs(&root)?;
        assert_eq!(paths.len(), 1);
        Ok(())
    }
}
