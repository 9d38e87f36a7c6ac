//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kustag")]
#[command(about = "Patch container image tags in kustomization overlays", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Version to patch into the overlay (e.g., 1.2.3, v2.0.0-rc.1)
    #[arg(value_name = "VERSION")]
    pub release_version: Option<String>,

    /// Path to the kustomization overlay
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Name of the images entry to patch (default: first entry)
    #[arg(short, long, global = true, value_name = "NAME")]
    pub image: Option<String>,

    /// Report what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the current tag of the selected images entry
    Current,
}
