use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::naming;
use crate::utils::io;

/// Licenses the template can materialize. `None` is the no-license sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "GNU GPL")]
    GnuGpl,
    #[serde(rename = "None")]
    None,
}

impl License {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MIT" => Some(License::Mit),
            "GNU GPL" => Some(License::GnuGpl),
            "None" => Some(License::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::GnuGpl => "GNU GPL",
            License::None => "None",
        }
    }

    /// Canonical first line of the license file, or `None` for the
    /// no-license sentinel.
    pub fn canonical_header(&self) -> Option<&'static str> {
        match self {
            License::Mit => Some("MIT License"),
            License::GnuGpl => Some("GNU GENERAL PUBLIC LICENSE"),
            License::None => None,
        }
    }
}

/// Context as written by the template engine. Derived keys are optional
/// here; they are computed (and checked when supplied) during resolution.
#[derive(Debug, Deserialize)]
struct RawContext {
    #[serde(default)]
    project_name: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    remote_username: Option<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default, alias = "_template")]
    template_link: Option<String>,
    #[serde(default)]
    repository_name: Option<String>,
    #[serde(default)]
    package_name: Option<String>,
}

/// Fully resolved generation context.
///
/// Constructed once, before the pipeline runs, and consumed read-only.
/// `package_name` is always a valid identifier derived deterministically
/// from `repository_name`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    pub project_name: String,
    pub repository_name: String,
    pub package_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_username: Option<String>,
    pub license: License,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_link: Option<String>,
}

impl ProjectContext {
    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_file(path, "read context file")?;
        Self::from_json_named(&content, &path.display().to_string())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_named(json, "<inline>")
    }

    fn from_json_named(json: &str, source: &str) -> Result<Self> {
        let raw: RawContext = serde_json::from_str(json)
            .map_err(|e| Error::context_invalid_json(source, e))?;
        Self::resolve(raw, source)
    }

    fn resolve(raw: RawContext, source: &str) -> Result<Self> {
        let project_name = raw
            .project_name
            .ok_or_else(|| Error::context_missing_key("project_name", Some(source.to_string())))?;

        let license_name = raw
            .license
            .ok_or_else(|| Error::context_missing_key("license", Some(source.to_string())))?;
        let license = License::from_name(&license_name).ok_or_else(|| {
            Error::context_invalid_value(
                "license",
                Some(license_name.clone()),
                "expected one of 'MIT', 'GNU GPL', 'None'",
            )
        })?;

        let derived = naming::derive_names(&project_name)?;

        // Derived keys supplied by the engine must agree with our own
        // derivation; a mismatch means the engine and this pipeline have
        // diverged.
        if let Some(supplied) = raw.repository_name {
            if supplied != derived.repository_name {
                return Err(Error::context_invalid_value(
                    "repository_name",
                    Some(supplied),
                    format!(
                        "does not match the value derived from project_name ('{}')",
                        derived.repository_name
                    ),
                ));
            }
        }
        if let Some(supplied) = raw.package_name {
            if supplied != derived.package_name {
                return Err(Error::context_invalid_value(
                    "package_name",
                    Some(supplied),
                    format!(
                        "does not match the value derived from repository_name ('{}')",
                        derived.package_name
                    ),
                ));
            }
        }

        Ok(Self {
            project_name,
            repository_name: derived.repository_name,
            package_name: derived.package_name,
            author: raw.author,
            remote_username: raw.remote_username,
            license,
            template_link: raw.template_link,
        })
    }
}
