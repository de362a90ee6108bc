//! Path utilities: expand ~, resolve export destinations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute paths are kept, relative ones are placed under `base_dir`.
pub fn resolve_under(base_dir: &str, file: &str) -> PathBuf {
    let p = expand_tilde(file);
    if p.is_absolute() {
        p
    } else {
        expand_tilde(base_dir).join(p)
    }
}

/// Append `ext` when the file has no extension yet.
pub fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ext)
    }
}
