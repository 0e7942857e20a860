use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::debug;

use shared::domain::{PatternName, PatternSpec};
use shared::error::StudioException;

/// Read-only catalog of pattern definitions on disk. A pattern is either a
/// `<name>.md` file or a `<name>/system.md` directory under the root.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    root: PathBuf,
}

impl PatternCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| {
            format!(
                "failed to create patterns directory '{}'",
                self.root.display()
            )
        })
    }

    /// Entries whose names fail validation are skipped, not errors: the
    /// catalog only promises to surface patterns it could later load.
    pub fn list_patterns(&self) -> Result<Vec<PatternSpec>> {
        self.ensure_root()?;
        let mut specs = Vec::new();

        let entries = fs::read_dir(&self.root).with_context(|| {
            format!(
                "failed to list patterns directory '{}'",
                self.root.display()
            )
        })?;
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("failed to read entry in '{}'", self.root.display())
            })?;
            let path = entry.path();

            let (raw_name, definition_path) = if path.is_dir() {
                let system = path.join("system.md");
                if !system.exists() {
                    continue;
                }
                (entry.file_name().to_string_lossy().into_owned(), system)
            } else if path.extension().is_some_and(|ext| ext == "md") {
                let Some(stem) = path.file_stem() else {
                    continue;
                };
                (stem.to_string_lossy().into_owned(), path.clone())
            } else {
                continue;
            };

            let name = match PatternName::new(raw_name) {
                Ok(name) => name,
                Err(err) => {
                    debug!(%err, path = %path.display(), "patterns: skipping entry");
                    continue;
                }
            };

            specs.push(self.read_spec(&name, &definition_path)?);
        }

        specs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(specs)
    }

    pub fn load_pattern(&self, name: &PatternName) -> Result<PatternSpec> {
        let path = self.resolved_path_for(name)?;
        self.read_spec(name, &path)
    }

    fn read_spec(&self, name: &PatternName, path: &Path) -> Result<PatternSpec> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read pattern '{}'", path.display()))?;
        let modified_at = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .ok()
            .map(DateTime::<Utc>::from);
        Ok(PatternSpec {
            name: name.as_str().to_string(),
            path: path.to_path_buf(),
            content,
            modified_at,
        })
    }

    /// Resolves a validated name to its definition file, preferring the
    /// directory layout. The resolved path must stay under the catalog root.
    fn resolved_path_for(&self, name: &PatternName) -> Result<PathBuf> {
        self.ensure_root()?;
        let root = self.root.canonicalize().with_context(|| {
            format!(
                "failed to resolve patterns directory '{}'",
                self.root.display()
            )
        })?;

        let candidates = [
            root.join(name.as_str()).join("system.md"),
            root.join(format!("{name}.md")),
        ];
        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            let resolved = candidate
                .canonicalize()
                .with_context(|| format!("failed to resolve '{}'", candidate.display()))?;
            if !resolved.starts_with(&root) {
                return Err(StudioException::validation(format!(
                    "pattern '{name}' resolves outside the catalog root"
                ))
                .into());
            }
            return Ok(resolved);
        }

        Err(StudioException::not_found(format!("pattern '{name}' not found")).into())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
