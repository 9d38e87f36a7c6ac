//! kustag - Release tag patcher for kustomization overlays
//!
//! A command-line tool that rewrites the `newTag` field of an images entry in
//! a Kubernetes kustomization overlay, intended to run as a pre-commit hook of
//! release automation.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::KustagError;
