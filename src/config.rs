//! Runtime configuration for the task assistant.
//!
//! Configuration is plain data with sensible defaults. It is usually built
//! in code or read from a JSON document whose keys mirror the field names;
//! missing keys take their default values.

use chrono::{FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

/// Seconds in one minute, for offset conversion.
const SECONDS_PER_MINUTE: i32 = 60;

/// Largest UTC offset accepted, in minutes (14 hours).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// What happens to a task the user reports as finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Remove the task from the store.
    #[default]
    Delete,
    /// Keep the task with its status set to completed.
    MarkCompleted,
}

/// Configuration for the conversation service.
///
/// # Examples
///
/// ```
/// use tasktalk::config::{AssistantConfig, CompletionPolicy};
///
/// let config = AssistantConfig::default();
/// assert_eq!(config.completion_policy, CompletionPolicy::Delete);
///
/// let parsed = AssistantConfig::from_json_str(r#"{"utc_offset_minutes": 120}"#)
///     .expect("valid configuration");
/// assert_eq!(parsed.utc_offset_minutes, 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    /// Offset of the user's wall clock from UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// Seconds an unanswered "which task" question stays valid.
    pub pending_selection_ttl_secs: u64,
    /// Handling of finished tasks.
    pub completion_policy: CompletionPolicy,
    /// Maximum number of tasks shown in one list reply.
    pub max_listed_tasks: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            pending_selection_ttl_secs: 600,
            completion_policy: CompletionPolicy::Delete,
            max_listed_tasks: 50,
        }
    }
}

impl AssistantConfig {
    /// Creates a lenient configuration that keeps finished tasks and waits
    /// an hour for selections.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            pending_selection_ttl_secs: 3600,
            completion_policy: CompletionPolicy::MarkCompleted,
            max_listed_tasks: 200,
            ..Default::default()
        }
    }

    /// Creates a strict configuration with short selection windows and
    /// compact lists.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            utc_offset_minutes: 0,
            pending_selection_ttl_secs: 120,
            completion_policy: CompletionPolicy::Delete,
            max_listed_tasks: 10,
        }
    }

    /// Sets the UTC offset in minutes.
    #[must_use]
    pub const fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Sets the completion policy.
    #[must_use]
    pub const fn with_completion_policy(mut self, policy: CompletionPolicy) -> Self {
        self.completion_policy = policy;
        self
    }

    /// Sets the selection time-to-live in seconds.
    #[must_use]
    pub const fn with_pending_selection_ttl_secs(mut self, seconds: u64) -> Self {
        self.pending_selection_ttl_secs = seconds;
        self
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or a value is
    /// out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or its contents
    /// are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            reason: source.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    /// Checks every value is within range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.offset()?;
        self.pending_ttl()?;
        if self.max_listed_tasks == 0 {
            return Err(ConfigError::ZeroListLimit);
        }
        Ok(())
    }

    /// Returns the configured offset from UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] beyond fourteen hours either
    /// way.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        let minutes = self.utc_offset_minutes;
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::InvalidOffset(minutes));
        }
        minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(minutes))
    }

    /// Returns how long a pending selection stays valid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSelectionTtl`] for zero or a value too
    /// large to represent.
    pub fn pending_ttl(&self) -> Result<TimeDelta, ConfigError> {
        let seconds = self.pending_selection_ttl_secs;
        i64::try_from(seconds)
            .ok()
            .filter(|value| *value > 0)
            .and_then(TimeDelta::try_seconds)
            .ok_or(ConfigError::InvalidSelectionTtl(seconds))
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}: {reason}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The document is not valid configuration JSON.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The UTC offset is out of range.
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),

    /// The selection time-to-live is zero or too large.
    #[error("pending selection TTL of {0} seconds is invalid")]
    InvalidSelectionTtl(u64),

    /// Lists would never show any task.
    #[error("max_listed_tasks must be at least 1")]
    ZeroListLimit,
}
