//! Conditional artifact handling for the generated tree.
//!
//! The template engine materializes some files unconditionally that are
//! conditional by design. Two rules apply after generation: the license
//! file must begin with the canonical header for the selected license,
//! and the template auto-update workflow is disabled (renamed, not
//! deleted) unless the template is distributed from a public GitHub
//! link. A file that is expected but absent is a packaging defect and
//! aborts generation.

use std::path::Path;

use serde::Serialize;

use crate::context::{License, ProjectContext};
use crate::error::{Error, Result};
use crate::utils::io;

pub const LICENSE_FILE: &str = "LICENSE";
pub const UPDATE_WORKFLOW_FILE: &str = ".github/workflows/template-update.yml";
pub const DISABLED_EXTENSION: &str = "yml.disabled";
pub const PUBLIC_TEMPLATE_PREFIX: &str = "https://www.github.com/";

/// What the pruning pass did, for the pipeline result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PruneOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_header: Option<String>,
    pub workflow_disabled: bool,
}

pub fn apply(root: &Path, context: &ProjectContext) -> Result<PruneOutcome> {
    let license_header = verify_license_header(root, context.license)?;

    let workflow_disabled = if should_disable_update_workflow(context.template_link.as_deref()) {
        disable_update_workflow(root)?;
        true
    } else {
        false
    };

    Ok(PruneOutcome {
        license_header: license_header.map(str::to_string),
        workflow_disabled,
    })
}

/// Check the license file begins with the canonical header for the
/// selected license. With the no-license sentinel the file was never
/// generated and there is nothing to check.
fn verify_license_header(root: &Path, license: License) -> Result<Option<&'static str>> {
    let Some(expected) = license.canonical_header() else {
        return Ok(None);
    };

    let path = root.join(LICENSE_FILE);
    if !path.is_file() {
        return Err(Error::artifact_missing(
            path.display().to_string(),
            format!("license file for the selected '{}' license", license.as_str()),
        ));
    }

    let content = io::read_file(&path, "read license file")?;
    // The MIT file carries its title on the very first line; the GPL file
    // centres its title, so leading blank lines and indentation are
    // tolerated there.
    let matched = if matches!(license, License::Mit) {
        content.lines().next() == Some(expected)
    } else {
        first_nonblank_line(&content).map(str::trim_start) == Some(expected)
    };

    if !matched {
        return Err(Error::artifact_header_mismatch(
            path.display().to_string(),
            expected,
            first_nonblank_line(&content).map(|l| l.trim_start().to_string()),
        ));
    }

    Ok(Some(expected))
}

fn first_nonblank_line(content: &str) -> Option<&str> {
    content.lines().find(|line| !line.trim().is_empty())
}

/// The auto-update workflow only works against a public GitHub template
/// link; anything else (including no link at all) means the workflow
/// must not run in the generated project.
fn should_disable_update_workflow(template_link: Option<&str>) -> bool {
    !template_link.is_some_and(|link| link.starts_with(PUBLIC_TEMPLATE_PREFIX))
}

/// Rename the workflow so no automation runner picks it up, keeping it
/// in the tree as inert reference material.
fn disable_update_workflow(root: &Path) -> Result<()> {
    let path = root.join(UPDATE_WORKFLOW_FILE);
    if !path.is_file() {
        return Err(Error::artifact_missing(
            path.display().to_string(),
            "template auto-update workflow due to be disabled",
        ));
    }

    let disabled = path.with_extension(DISABLED_EXTENSION);
    io::rename_file(&path, &disabled, "disable update workflow")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MIT_TEXT: &str = "MIT License\n\nCopyright (c) 2024 Jane Doe\n";
    const GPL_TEXT: &str = "\n                    GNU GENERAL PUBLIC LICENSE\n                       Version 3, 29 June 2007\n";

    fn context(license: &str, template_link: Option<&str>) -> ProjectContext {
        let mut json = format!(
            r#"{{"project_name": "Example Project", "license": "{}""#,
            license
        );
        if let Some(link) = template_link {
            json.push_str(&format!(r#", "template_link": "{}""#, link));
        }
        json.push('}');
        ProjectContext::from_json(&json).unwrap()
    }

    fn write_workflow(root: &Path) {
        let path = root.join(UPDATE_WORKFLOW_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "on: schedule\n").unwrap();
    }

    #[test]
    fn mit_license_with_canonical_header_passes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(LICENSE_FILE), MIT_TEXT).unwrap();
        write_workflow(tmp.path());

        let outcome = apply(tmp.path(), &context("MIT", None)).unwrap();
        assert_eq!(outcome.license_header.as_deref(), Some("MIT License"));
    }

    #[test]
    fn gpl_license_tolerates_centred_header() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(LICENSE_FILE), GPL_TEXT).unwrap();
        write_workflow(tmp.path());

        let outcome = apply(tmp.path(), &context("GNU GPL", None)).unwrap();
        assert_eq!(
            outcome.license_header.as_deref(),
            Some("GNU GENERAL PUBLIC LICENSE")
        );
    }

    #[test]
    fn no_license_sentinel_checks_nothing() {
        let tmp = TempDir::new().unwrap();
        write_workflow(tmp.path());

        let outcome = apply(tmp.path(), &context("None", None)).unwrap();
        assert!(outcome.license_header.is_none());
        assert!(!tmp.path().join(LICENSE_FILE).exists());
    }

    #[test]
    fn missing_license_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write_workflow(tmp.path());

        let err = apply(tmp.path(), &context("MIT", None)).unwrap_err();
        assert_eq!(err.code.as_str(), "artifact.missing");
    }

    #[test]
    fn wrong_license_header_is_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(LICENSE_FILE), "Apache License 2.0\n").unwrap();
        write_workflow(tmp.path());

        let err = apply(tmp.path(), &context("MIT", None)).unwrap_err();
        assert_eq!(err.code.as_str(), "artifact.header_mismatch");
    }

    #[test]
    fn mit_header_must_be_on_first_line() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(LICENSE_FILE), "\nMIT License\n").unwrap();
        write_workflow(tmp.path());

        let err = apply(tmp.path(), &context("MIT", None)).unwrap_err();
        assert_eq!(err.code.as_str(), "artifact.header_mismatch");
    }

    #[test]
    fn private_template_link_disables_workflow() {
        let tmp = TempDir::new().unwrap();
        write_workflow(tmp.path());

        let outcome = apply(
            tmp.path(),
            &context("None", Some("git@internal:templates/base.git")),
        )
        .unwrap();

        assert!(outcome.workflow_disabled);
        assert!(!tmp.path().join(UPDATE_WORKFLOW_FILE).exists());
        let disabled = tmp
            .path()
            .join(".github/workflows/template-update.yml.disabled");
        assert!(disabled.is_file());
    }

    #[test]
    fn missing_template_link_disables_workflow() {
        let tmp = TempDir::new().unwrap();
        write_workflow(tmp.path());

        let outcome = apply(tmp.path(), &context("None", None)).unwrap();
        assert!(outcome.workflow_disabled);
    }

    #[test]
    fn public_template_link_keeps_workflow_active() {
        let tmp = TempDir::new().unwrap();
        write_workflow(tmp.path());

        let outcome = apply(
            tmp.path(),
            &context("None", Some("https://www.github.com/org/template")),
        )
        .unwrap();

        assert!(!outcome.workflow_disabled);
        assert!(tmp.path().join(UPDATE_WORKFLOW_FILE).is_file());
    }

    #[test]
    fn missing_workflow_when_rename_due_is_fatal() {
        let tmp = TempDir::new().unwrap();

        let err = apply(tmp.path(), &context("None", None)).unwrap_err();
        assert_eq!(err.code.as_str(), "artifact.missing");
    }
}
