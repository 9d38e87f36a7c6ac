//! Show current tag use case

use crate::application::patch_tag::image_selector;
use crate::domain::manifest;
use crate::error::Result;
use crate::infrastructure::ManifestStore;

/// Read the selected image's current `newTag` without modifying the manifest.
pub fn current_tag(store: &ManifestStore, image: Option<&str>) -> Result<Option<String>> {
    let selector = image_selector(image);
    let doc = manifest::parse(&store.read()?)?;
    manifest::image_tag(&doc, &selector)
}
