//! Explicit configuration values for the rotation engine and its neighbours.
//!
//! Nothing here is ambient: callers construct these values (from JSON, from
//! the environment, or with `Default`) and pass them in.

pub mod rotation;
pub mod tiers;

pub use rotation::RotationConfig;
pub use tiers::{TierPoints, TierPointsTable};
