//! Scene sources: one TOML or JSON file per scene in a directory.
//!
//! The scene id is the file stem. Files are read in file-name order so the
//! graph's declaration order, and everything derived from it, is stable.

use std::path::{Path, PathBuf};
use story_core::RawScene;
use tracing::debug;

/// Errors that can occur while reading scene files.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("scene directory {dir} not found")]
    MissingDir { dir: PathBuf },

    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Supported scene file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

/// Detect the format of a file from its extension.
pub fn detect_format(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

/// Read every scene file in `dir`. Files with other extensions are skipped.
pub fn read_scene_dir(dir: &Path) -> Result<Vec<RawScene>, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::MissingDir {
            dir: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && detect_format(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort();

    let scenes = paths
        .iter()
        .map(|path| read_scene_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(dir = %dir.display(), scene_files = scenes.len(), "scene_dir_read");
    Ok(scenes)
}

/// Read a single scene file.
pub fn read_scene_file(path: &Path) -> Result<RawScene, SourceError> {
    let content = std::fs::read_to_string(path)?;
    let parse_error = |detail: String| SourceError::Parse {
        file: path.to_path_buf(),
        detail,
    };

    let mut scene: RawScene = match detect_format(path) {
        Some(Format::Toml) => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
        Some(Format::Json) => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
        None => return Err(parse_error("unsupported file extension".to_string())),
    };

    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        scene.id = stem.to_string();
    }
    scene.body = scene.body.trim_end_matches(['\n', '\r']).to_string();
    Ok(scene)
}
