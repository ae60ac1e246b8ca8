//! CLI command implementations.

pub mod estimate;
pub mod synth;
pub mod theory;
pub mod version;
