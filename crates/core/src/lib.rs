#![forbid(unsafe_code)]

pub mod model;
pub mod progression;

pub use progression::{DEFAULT_MAX_TIER, DEFAULT_TIER_SIZE, Progression, tier};
