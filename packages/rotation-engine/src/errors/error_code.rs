//! Error codes surfaced by the rotation engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a
//! request handler puts in its response body. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Fewer than four confirmed players
    InsufficientPlayers,
    /// A generated match number would be missing, repeated or non-positive
    NumberingError,
    /// Rotation policy values are unusable
    InvalidConfig,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 3] = [
        ErrorCode::InsufficientPlayers,
        ErrorCode::NumberingError,
        ErrorCode::InvalidConfig,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientPlayers => "INSUFFICIENT_PLAYERS",
            Self::NumberingError => "NUMBERING_ERROR",
            Self::InvalidConfig => "INVALID_CONFIG",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
