//! Patch tag use case

use crate::domain::manifest;
use crate::domain::{ImageSelector, ReleaseTag};
use crate::error::Result;
use crate::infrastructure::ManifestStore;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PatchOptions {
    pub version: String,
    pub image: Option<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub manifest: PathBuf,
    pub image: Option<String>,
    pub previous_tag: Option<String>,
    pub new_tag: String,
    pub changed: bool,
    pub dry_run: bool,
}

/// Set the selected image's `newTag` in the manifest to the given version and
/// write the document back in place.
///
/// The version is validated before any file I/O, and the manifest is parsed
/// fully before anything is written, so every failure leaves the file as it
/// was.
pub fn patch_tag(store: &ManifestStore, options: PatchOptions) -> Result<PatchReport> {
    let tag = ReleaseTag::parse(&options.version)?;
    let selector = image_selector(options.image.as_deref());

    let original = store.read()?;
    let mut doc = manifest::parse(&original)?;

    let patched = manifest::set_image_tag(&mut doc, &selector, &tag)?;
    let changed = patched.previous_tag.as_deref() != Some(tag.as_str());

    if !options.dry_run {
        store.write_atomic(&manifest::to_yaml(&doc)?)?;
    }

    Ok(PatchReport {
        manifest: store.path().to_path_buf(),
        image: patched.name,
        previous_tag: patched.previous_tag,
        new_tag: tag.as_str().to_string(),
        changed,
        dry_run: options.dry_run,
    })
}

pub(crate) fn image_selector(name: Option<&str>) -> ImageSelector {
    match name {
        Some(name) => ImageSelector::Name(name.to_string()),
        None => ImageSelector::First,
    }
}
