//! Rotation test support utilities
//!
//! Shared by the engine's integration tests: unified logging initialization,
//! proptest configuration, and fixtures for confirmed players and completed
//! match records in every shape persistence hands back.

pub mod fixtures;
pub mod logging;
pub mod proptest_prelude;
