use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ErrorCode, StudioException};

/// One persisted record of a pattern run: the input that was fed in and the
/// output that came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputLog {
    pub id: Uuid,
    pub pattern: String,
    pub input_text: String,
    pub output_text: String,
    pub created_at: DateTime<Utc>,
}

impl OutputLog {
    pub fn new(
        pattern: impl Into<String>,
        input_text: impl Into<String>,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            pattern: pattern.into(),
            input_text: input_text.into(),
            output_text: output_text.into(),
            created_at: Utc::now(),
        }
    }
}

/// An output the user marked as a favorite, under a name of their choosing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarredOutput {
    pub id: Uuid,
    pub name: String,
    pub pattern: String,
    pub output_text: String,
    pub created_at: DateTime<Utc>,
}

impl StarredOutput {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pattern: pattern.into(),
            output_text: output_text.into(),
            created_at: Utc::now(),
        }
    }
}

/// A pattern definition as found on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Pattern names double as file names, so they are restricted to letters,
/// digits, '.', '_' and '-', at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternName(String);

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[A-Za-z0-9._-]{1,100}$").expect("literal regex"))
}

impl PatternName {
    pub fn new(raw: impl Into<String>) -> Result<Self, StudioException> {
        let raw = raw.into();
        if name_pattern().is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(StudioException::new(
                ErrorCode::Validation,
                format!(
                    "invalid pattern name '{raw}': allowed are letters, digits, '.', '_', '-' (max 100 chars)"
                ),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
