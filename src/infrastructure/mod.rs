//! Infrastructure layer - Configuration and file I/O

pub mod config;
pub mod store;

pub use config::Config;
pub use store::ManifestStore;
