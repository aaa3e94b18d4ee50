pub mod rotation;

pub use rotation::{Regeneration, RotationService};
