use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A transcript loaded from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFile {
    /// File stem, e.g. `call3` for `call3.txt`
    pub call_id: String,
    pub path: PathBuf,
    pub text: String,
}

/// Path of the transcript for `call_id` inside `dir`
pub fn transcript_path(dir: &Path, call_id: &str) -> PathBuf {
    dir.join(format!("{}.txt", call_id))
}

/// Read a single transcript file
pub fn load_transcript(path: &Path) -> Result<TranscriptFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    let call_id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(TranscriptFile {
        call_id,
        path: path.to_path_buf(),
        text,
    })
}

/// Load every `.txt` transcript in `dir`, sorted by file name
pub fn load_transcript_dir(dir: &Path) -> Result<Vec<TranscriptFile>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read transcript directory: {:?}", dir))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list directory: {:?}", dir))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|p| load_transcript(p)).collect()
}
