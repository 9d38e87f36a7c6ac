//! Output formatting utilities

use crate::application::PatchReport;

/// Format a patch report for display
pub fn format_patch_report(report: &PatchReport) -> String {
    let target = match &report.image {
        Some(name) => format!("image '{}'", name),
        None => "first images entry".to_string(),
    };

    let transition = match &report.previous_tag {
        Some(previous) if report.changed => format!("{} -> {}", previous, report.new_tag),
        Some(previous) => format!("already {}", previous),
        None => format!("(unset) -> {}", report.new_tag),
    };

    let prefix = if report.dry_run {
        "Would patch"
    } else {
        "Patched"
    };

    format!(
        "{} {} in {}: {}",
        prefix,
        target,
        report.manifest.display(),
        transition
    )
}

/// Format the result of a current-tag lookup
pub fn format_current_tag(tag: Option<&str>) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => "(unset)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report() -> PatchReport {
        PatchReport {
            manifest: PathBuf::from("config/manager/kustomization.yaml"),
            image: Some("controller".to_string()),
            previous_tag: Some("0.0.1".to_string()),
            new_tag: "1.2.3".to_string(),
            changed: true,
            dry_run: false,
        }
    }

    #[test]
    fn test_format_changed_report() {
        let output = format_patch_report(&report());
        assert!(output.contains("Patched image 'controller'"));
        assert!(output.contains("config/manager/kustomization.yaml"));
        assert!(output.contains("0.0.1 -> 1.2.3"));
    }

    #[test]
    fn test_format_unchanged_report() {
        let mut report = report();
        report.previous_tag = Some("1.2.3".to_string());
        report.changed = false;

        let output = format_patch_report(&report);
        assert!(output.contains("already 1.2.3"));
    }

    #[test]
    fn test_format_dry_run_report() {
        let mut report = report();
        report.dry_run = true;

        let output = format_patch_report(&report);
        assert!(output.starts_with("Would patch"));
    }

    #[test]
    fn test_format_unnamed_entry() {
        let mut report = report();
        report.image = None;
        report.previous_tag = None;

        let output = format_patch_report(&report);
        assert!(output.contains("first images entry"));
        assert!(output.contains("(unset) -> 1.2.3"));
    }

    #[test]
    fn test_format_current_tag() {
        assert_eq!(format_current_tag(Some("1.2.3")), "1.2.3");
        assert_eq!(format_current_tag(None), "(unset)");
    }
}
