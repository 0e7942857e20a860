use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use shared::domain::{OutputLog, StarredOutput};

/// File-backed store for pattern outputs, rooted at the studio config
/// directory. Records live as JSON documents under `outputs/`.
#[derive(Debug, Clone)]
pub struct Storage {
    config_dir: PathBuf,
}

/// Everything `load_saved_outputs` recovered from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedOutputs {
    pub outputs: Vec<OutputLog>,
    pub starred: Vec<StarredOutput>,
}

impl Storage {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn outputs_path(&self) -> PathBuf {
        self.config_dir.join("outputs").join("outputs.json")
    }

    pub fn starred_path(&self) -> PathBuf {
        self.config_dir.join("outputs").join("starred_outputs.json")
    }

    /// Missing files read as empty lists; malformed content is an error for
    /// the caller to decide about.
    pub fn read_outputs(&self) -> Result<Vec<OutputLog>> {
        read_json_list(&self.outputs_path())
    }

    pub fn write_outputs(&self, logs: &[OutputLog]) -> Result<()> {
        write_json(&self.outputs_path(), &logs)
    }

    pub fn read_starred(&self) -> Result<Vec<StarredOutput>> {
        read_json_list(&self.starred_path())
    }

    pub fn write_starred(&self, items: &[StarredOutput]) -> Result<()> {
        write_json(&self.starred_path(), &items)
    }

    /// Load hook consumed by session initialization. May fail; callers treat
    /// any failure as non-fatal.
    pub fn load_saved_outputs(&self) -> Result<SavedOutputs> {
        let outputs = self.read_outputs()?;
        let starred = self.read_starred()?;
        info!(
            outputs = outputs.len(),
            starred = starred.len(),
            "storage: loaded persisted outputs"
        );
        Ok(SavedOutputs { outputs, starred })
    }
}

fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("malformed JSON in '{}'", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize records for '{}'", path.display()))?;
    atomic_write_text(path, &serialized)
}

/// Write-then-rename so readers never observe a half-written file. Files are
/// made user-private (0o600) where the platform supports it.
fn atomic_write_text(path: &Path, data: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("no parent directory for '{}'", path.display()))?;
    fs::create_dir_all(parent)
        .with_context(|| format!("failed to create directory '{}'", parent.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create temp file in '{}'", parent.display()))?;
    tmp.write_all(data.as_bytes())
        .with_context(|| format!("failed to write temp file for '{}'", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(err) = fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o600)) {
            warn!(path = %path.display(), %err, "storage: could not restrict file permissions");
        }
    }

    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("failed to replace '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
