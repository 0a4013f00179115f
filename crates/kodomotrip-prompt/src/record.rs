//! In-memory prompt state and its persisted wire format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("malformed install prompt record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lastDismissed timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}

/// Install prompt state owned by [`crate::InstallPrompt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstallPromptState {
    pub visit_count: u32,
    /// Set only by "remind me later"
    pub last_dismissed_at: Option<DateTime<Utc>>,
    pub should_show_dialog: bool,
}

/// Persisted form: `{"shouldShowDialog":bool,"visitCount":int,"lastDismissed":ms|null}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub should_show_dialog: bool,
    pub visit_count: u32,
    /// Unix epoch milliseconds
    #[serde(default)]
    pub last_dismissed: Option<i64>,
}

impl From<&InstallPromptState> for PromptRecord {
    fn from(state: &InstallPromptState) -> Self {
        Self {
            should_show_dialog: state.should_show_dialog,
            visit_count: state.visit_count,
            last_dismissed: state.last_dismissed_at.map(|t| t.timestamp_millis()),
        }
    }
}

impl TryFrom<PromptRecord> for InstallPromptState {
    type Error = RecordError;

    fn try_from(record: PromptRecord) -> Result<Self, Self::Error> {
        let last_dismissed_at = record
            .last_dismissed
            .map(|ms| {
                DateTime::from_timestamp_millis(ms).ok_or(RecordError::TimestampOutOfRange(ms))
            })
            .transpose()?;

        Ok(Self {
            visit_count: record.visit_count,
            last_dismissed_at,
            should_show_dialog: record.should_show_dialog,
        })
    }
}

pub(crate) fn decode(raw: &str) -> Result<InstallPromptState, RecordError> {
    let record: PromptRecord = serde_json::from_str(raw)?;
    InstallPromptState::try_from(record)
}

pub(crate) fn encode(state: &InstallPromptState) -> Result<String, RecordError> {
    Ok(serde_json::to_string(&PromptRecord::from(state))?)
}
