//! Domain-level error types for schedule construction.
//!
//! `ScheduleError` is the only error a caller ever receives from the engine.
//! `SkipReason` never escapes as an error: it explains why a completed match
//! record was dropped during sanitization and is only logged or inspected.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Fatal, caller-facing failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Insufficient players: need at least {required}, got {actual}")]
    InsufficientPlayers { required: usize, actual: usize },
    #[error("Numbering error: {detail}")]
    Numbering { detail: String },
    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },
}

impl ScheduleError {
    pub fn numbering(detail: impl Into<String>) -> Self {
        Self::Numbering {
            detail: detail.into(),
        }
    }

    pub fn invalid_config(detail: impl Into<String>) -> Self {
        Self::InvalidConfig {
            detail: detail.into(),
        }
    }

    /// Stable code for surfacing the rejection to a UI.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScheduleError::InsufficientPlayers { .. } => ErrorCode::InsufficientPlayers,
            ScheduleError::Numbering { .. } => ErrorCode::NumberingError,
            ScheduleError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
        }
    }
}

/// Why a completed match record contributed nothing to history or quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record itself is not a JSON object.
    NotAnObject,
    /// No `players` key.
    PlayersMissing,
    /// `players` is present but null.
    PlayersNull,
    /// `players` is a string, number, object, ...
    PlayersNotASequence,
    /// Fewer than four distinct ids could be resolved.
    TooFewPlayers { usable: usize },
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SkipReason::NotAnObject => write!(f, "record is not an object"),
            SkipReason::PlayersMissing => write!(f, "players field missing"),
            SkipReason::PlayersNull => write!(f, "players field is null"),
            SkipReason::PlayersNotASequence => write!(f, "players field is not a sequence"),
            SkipReason::TooFewPlayers { usable } => {
                write!(f, "only {usable} usable player ids (need 4)")
            }
        }
    }
}
