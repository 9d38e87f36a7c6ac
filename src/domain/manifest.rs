//! Kustomization overlay document model
//!
//! Works on `serde_yaml::Value` rather than a typed kustomization struct so
//! that every field the overlay carries besides the patched tag survives the
//! round trip untouched. Comment and quoting style are at the mercy of the
//! serializer.

use crate::domain::ReleaseTag;
use crate::error::{KustagError, Result};
use serde_yaml::Value;

/// Which entry of the `images` list to address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelector {
    /// The first entry, matching the original release hook behavior
    First,
    /// The entry whose `name` field matches
    Name(String),
}

/// Details of the entry a patch touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedImage {
    pub name: Option<String>,
    pub previous_tag: Option<String>,
}

/// Parse an overlay document. Fails with `MalformedManifest` if the text is
/// not valid YAML or the root is not a mapping.
pub fn parse(text: &str) -> Result<Value> {
    let doc: Value = serde_yaml::from_str(text)
        .map_err(|e| KustagError::MalformedManifest(e.to_string()))?;

    if !doc.is_mapping() {
        return Err(KustagError::MalformedManifest(
            "document root is not a mapping".to_string(),
        ));
    }

    Ok(doc)
}

/// Serialize an overlay document back to YAML.
pub fn to_yaml(doc: &Value) -> Result<String> {
    serde_yaml::to_string(doc).map_err(KustagError::YamlSerialize)
}

/// Read the current `newTag` of the selected image entry.
pub fn image_tag(doc: &Value, selector: &ImageSelector) -> Result<Option<String>> {
    let images = images_list(doc)?;
    let entry = select_entry(images, selector)?;
    Ok(field_string(entry, "newTag"))
}

/// Set the selected image entry's `newTag` to the given tag, returning the
/// entry's name and the tag it previously carried.
pub fn set_image_tag(
    doc: &mut Value,
    selector: &ImageSelector,
    tag: &ReleaseTag,
) -> Result<PatchedImage> {
    let images = images_list_mut(doc)?;
    let entry = select_entry_mut(images, selector)?;

    let patched = PatchedImage {
        name: field_string(entry, "name"),
        previous_tag: field_string(entry, "newTag"),
    };

    let mapping = entry.as_mapping_mut().ok_or_else(|| {
        KustagError::MalformedManifest("images entry is not a mapping".to_string())
    })?;
    // Mapping preserves insertion order, so replacing an existing key keeps
    // the entry's field layout intact.
    mapping.insert(
        Value::String("newTag".to_string()),
        Value::String(tag.as_str().to_string()),
    );

    Ok(patched)
}

fn images_list(doc: &Value) -> Result<&Vec<Value>> {
    match doc.get("images") {
        Some(Value::Sequence(images)) => Ok(images),
        Some(_) => Err(KustagError::MalformedManifest(
            "'images' is not a list".to_string(),
        )),
        None => Err(KustagError::MalformedManifest(
            "missing 'images' list".to_string(),
        )),
    }
}

fn images_list_mut(doc: &mut Value) -> Result<&mut Vec<Value>> {
    match doc.get_mut("images") {
        Some(Value::Sequence(images)) => Ok(images),
        Some(_) => Err(KustagError::MalformedManifest(
            "'images' is not a list".to_string(),
        )),
        None => Err(KustagError::MalformedManifest(
            "missing 'images' list".to_string(),
        )),
    }
}

fn select_entry<'a>(images: &'a [Value], selector: &ImageSelector) -> Result<&'a Value> {
    match selector {
        ImageSelector::First => images.first().ok_or_else(|| {
            KustagError::MalformedManifest("'images' list is empty".to_string())
        }),
        ImageSelector::Name(name) => images
            .iter()
            .find(|entry| field_string(entry, "name").as_deref() == Some(name))
            .ok_or_else(|| KustagError::ImageNotFound(name.clone())),
    }
}

fn select_entry_mut<'a>(images: &'a mut [Value], selector: &ImageSelector) -> Result<&'a mut Value> {
    match selector {
        ImageSelector::First => images.first_mut().ok_or_else(|| {
            KustagError::MalformedManifest("'images' list is empty".to_string())
        }),
        ImageSelector::Name(name) => images
            .iter_mut()
            .find(|entry| field_string(entry, "name").as_deref() == Some(name))
            .ok_or_else(|| KustagError::ImageNotFound(name.clone())),
    }
}

fn field_string(entry: &Value, key: &str) -> Option<String> {
    entry.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAY: &str = "\
apiVersion: kustomize.config.k8s.io/v1beta1
kind: Kustomization
resources:
- manager.yaml
images:
- name: controller
  newName: example.com/keyhub-vault-operator
  newTag: \"0.0.1\"
- name: sidecar
  newTag: \"2.4.0\"
";

    #[test]
    fn parse_accepts_kustomization_overlay() {
        let doc = parse(OVERLAY).unwrap();
        assert!(doc.get("images").is_some());
    }

    #[test]
    fn parse_rejects_invalid_yaml() {
        let result = parse("images: [unbalanced");
        assert!(matches!(result, Err(KustagError::MalformedManifest(_))));
    }

    #[test]
    fn parse_rejects_non_mapping_root() {
        let result = parse("- just\n- a\n- list\n");
        assert!(matches!(result, Err(KustagError::MalformedManifest(_))));
    }

    #[test]
    fn image_tag_reads_first_entry() {
        let doc = parse(OVERLAY).unwrap();
        let tag = image_tag(&doc, &ImageSelector::First).unwrap();
        assert_eq!(tag.as_deref(), Some("0.0.1"));
    }

    #[test]
    fn image_tag_reads_named_entry() {
        let doc = parse(OVERLAY).unwrap();
        let selector = ImageSelector::Name("sidecar".to_string());
        let tag = image_tag(&doc, &selector).unwrap();
        assert_eq!(tag.as_deref(), Some("2.4.0"));
    }

    #[test]
    fn image_tag_reports_absent_field() {
        let doc = parse("images:\n- name: controller\n").unwrap();
        let tag = image_tag(&doc, &ImageSelector::First).unwrap();
        assert_eq!(tag, None);
    }

    #[test]
    fn set_image_tag_patches_first_entry() {
        let mut doc = parse(OVERLAY).unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();

        let patched = set_image_tag(&mut doc, &ImageSelector::First, &tag).unwrap();

        assert_eq!(patched.name.as_deref(), Some("controller"));
        assert_eq!(patched.previous_tag.as_deref(), Some("0.0.1"));
        assert_eq!(
            image_tag(&doc, &ImageSelector::First).unwrap().as_deref(),
            Some("1.2.3")
        );
        // Other entries are untouched
        let sidecar = ImageSelector::Name("sidecar".to_string());
        assert_eq!(
            image_tag(&doc, &sidecar).unwrap().as_deref(),
            Some("2.4.0")
        );
    }

    #[test]
    fn set_image_tag_preserves_other_fields() {
        let mut doc = parse(OVERLAY).unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();

        set_image_tag(&mut doc, &ImageSelector::First, &tag).unwrap();

        assert_eq!(
            doc.get("kind").and_then(Value::as_str),
            Some("Kustomization")
        );
        let first = &doc.get("images").unwrap().as_sequence().unwrap()[0];
        assert_eq!(
            first.get("newName").and_then(Value::as_str),
            Some("example.com/keyhub-vault-operator")
        );
    }

    #[test]
    fn set_image_tag_adds_missing_field() {
        let mut doc = parse("images:\n- name: controller\n").unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();

        let patched = set_image_tag(&mut doc, &ImageSelector::First, &tag).unwrap();

        assert_eq!(patched.previous_tag, None);
        assert_eq!(
            image_tag(&doc, &ImageSelector::First).unwrap().as_deref(),
            Some("1.2.3")
        );
    }

    #[test]
    fn set_image_tag_fails_without_images_list() {
        let mut doc = parse("resources:\n- manager.yaml\n").unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();

        let result = set_image_tag(&mut doc, &ImageSelector::First, &tag);
        assert!(matches!(result, Err(KustagError::MalformedManifest(_))));
    }

    #[test]
    fn set_image_tag_fails_on_scalar_images() {
        let mut doc = parse("images: nope\n").unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();

        let result = set_image_tag(&mut doc, &ImageSelector::First, &tag);
        assert!(matches!(result, Err(KustagError::MalformedManifest(_))));
    }

    #[test]
    fn set_image_tag_fails_on_empty_images() {
        let mut doc = parse("images: []\n").unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();

        let result = set_image_tag(&mut doc, &ImageSelector::First, &tag);
        assert!(matches!(result, Err(KustagError::MalformedManifest(_))));
    }

    #[test]
    fn set_image_tag_fails_on_unknown_name() {
        let mut doc = parse(OVERLAY).unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();
        let selector = ImageSelector::Name("missing".to_string());

        let result = set_image_tag(&mut doc, &selector, &tag);
        match result {
            Err(KustagError::ImageNotFound(name)) => assert_eq!(name, "missing"),
            other => panic!("Expected ImageNotFound, got {:?}", other),
        }
    }

    #[test]
    fn set_image_tag_fails_on_scalar_entry() {
        let mut doc = parse("images:\n- just-a-string\n").unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();

        let result = set_image_tag(&mut doc, &ImageSelector::First, &tag);
        assert!(matches!(result, Err(KustagError::MalformedManifest(_))));
    }

    #[test]
    fn round_trip_is_stable() {
        let mut doc = parse(OVERLAY).unwrap();
        let tag = ReleaseTag::parse("1.2.3").unwrap();
        set_image_tag(&mut doc, &ImageSelector::First, &tag).unwrap();

        let first_pass = to_yaml(&doc).unwrap();
        let reparsed = parse(&first_pass).unwrap();
        let second_pass = to_yaml(&reparsed).unwrap();
        assert_eq!(first_pass, second_pass);
    }
}
