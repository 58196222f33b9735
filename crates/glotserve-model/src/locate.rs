//! Local model file resolution.
//!
//! The configured model path may point at the file itself or at a directory
//! somewhere under which a `model.bin` lives (volume mounts and cache layouts
//! add nesting). Resolution is deterministic: entries are visited in name
//! order, and files at a level win over anything deeper.

use std::path::{Path, PathBuf};

/// File name the pretrained model is distributed under.
pub const MODEL_FILE_NAME: &str = "model.bin";

/// Resolve the configured path to a concrete model file, if one exists.
///
/// A file path resolves to itself; a directory is searched recursively for
/// [`MODEL_FILE_NAME`]. `None` means nothing usable exists locally.
pub fn resolve_model_path(configured: &Path) -> Option<PathBuf> {
    if configured.is_file() {
        return Some(configured.to_path_buf());
    }
    if configured.is_dir() {
        return find_model_file(configured);
    }
    None
}

/// Check this directory's files before descending into subdirectories,
/// both passes in name order.
fn find_model_file(dir: &Path) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in &entries {
        if path.is_file() && path.file_name().is_some_and(|name| name == MODEL_FILE_NAME) {
            return Some(path.clone());
        }
    }
    for path in &entries {
        if path.is_dir() {
            if let Some(found) = find_model_file(path) {
                return Some(found);
            }
        }
    }
    None
}
