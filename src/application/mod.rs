//! Application layer - Use cases and orchestration

pub mod patch_tag;
pub mod show_tag;

pub use patch_tag::{patch_tag, PatchOptions, PatchReport};
pub use show_tag::current_tag;
