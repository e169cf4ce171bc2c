use serde::Serialize;

use crate::error::{Error, Result};

/// Identifiers derived from a free-text project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedNames {
    pub repository_name: String,
    pub package_name: String,
}

pub fn derive_names(project_name: &str) -> Result<DerivedNames> {
    let repository_name = derive_repository_name(project_name)?;
    let package_name = derive_package_name(&repository_name);
    Ok(DerivedNames {
        repository_name,
        package_name,
    })
}

/// Derive a repository slug from a free-text project name.
///
/// The result is lowercase, hyphen-delimited, contains only `[a-z0-9-]`,
/// and has no leading, trailing, or repeated hyphens.
pub fn derive_repository_name(project_name: &str) -> Result<String> {
    let trimmed = project_name.trim();
    if trimmed.is_empty() {
        return Err(Error::name_invalid(
            "project_name",
            "Project name cannot be empty",
            None,
        ));
    }

    let mut out = String::new();
    let mut prev_was_dash = false;

    for ch in trimmed.chars() {
        let normalized = match ch {
            'a'..='z' | '0'..='9' => Some(ch),
            'A'..='Z' => Some(ch.to_ascii_lowercase()),
            _ if ch.is_whitespace() || ch == '_' || ch == '-' => Some('-'),
            _ => None,
        };

        if let Some(c) = normalized {
            if c == '-' {
                if out.is_empty() || prev_was_dash {
                    continue;
                }
                out.push('-');
                prev_was_dash = true;
            } else {
                out.push(c);
                prev_was_dash = false;
            }
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        return Err(Error::name_invalid(
            "project_name",
            "Project name must contain at least one letter or number",
            Some(project_name.to_string()),
        ));
    }

    Ok(out)
}

/// Derive a package identifier from a repository slug.
///
/// Hyphens become underscores. A slug that starts with a digit would not be
/// a valid identifier, so it is prefixed with `pkg_` (e.g. `123-project`
/// becomes `pkg_123_project`). The derivation is deterministic.
pub fn derive_package_name(repository_name: &str) -> String {
    let ident = repository_name.replace('-', "_");
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("pkg_{}", ident)
    } else {
        ident
    }
}
