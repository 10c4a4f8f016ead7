use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content path: {0}")]
    InvalidContentPath(String),
}

/// Read a content file and return its text
pub fn read_file(path: &Path) -> Result<String, FilesError> {
    if !path.exists() {
        return Err(FilesError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Markdown files to preview: `root` itself when it is a file, otherwise
/// every `.md` file below it, sorted.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, FilesError> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(FilesError::InvalidContentPath(
            "content path not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    log::debug!("found {} markdown files under {}", files.len(), root.display());
    Ok(files)
}

/// Name shown in the file list: the path relative to `root`, or the file name
/// when `root` is the file itself.
pub fn display_name(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), FilesError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}
