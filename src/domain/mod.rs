//! Domain layer - Manifest model and tag validation

pub mod manifest;
pub mod version;

pub use manifest::{ImageSelector, PatchedImage};
pub use version::ReleaseTag;
