//! Error handling for the rotation engine.

pub mod domain;
pub mod error_code;

pub use domain::{ScheduleError, SkipReason};
pub use error_code::ErrorCode;
