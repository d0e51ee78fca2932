use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(String),
    #[error("Path is outside the input directory: {0}")]
    OutsideRoot(PathBuf),
}

/// Extension of the Markdown files picked up by [`scan_markdown_files`].
pub const MARKDOWN_EXTENSION: &str = "md";
/// Extension given to converted files by [`output_path_for`].
pub const HTML_EXTENSION: &str = "html";

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write converted output, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files below `root`, sorted by path
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_input_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    log::debug!("found {} markdown files under {}", files.len(), root.display());
    Ok(files)
}

/// Maps `root/a/b.md` to `out_dir/a/b.html`.
pub fn output_path_for(root: &Path, file: &Path, out_dir: &Path) -> Result<PathBuf, IoError> {
    let relative = file
        .strip_prefix(root)
        .map_err(|_| IoError::OutsideRoot(file.to_path_buf()))?;
    let relative = RelativePathBuf::from_path(relative)
        .map_err(|_| IoError::OutsideRoot(file.to_path_buf()))?;
    Ok(relative.with_extension(HTML_EXTENSION).to_path(out_dir))
}

pub fn validate_input_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidInputDir(format!(
            "input directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}
