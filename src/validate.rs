use url::Url;

use crate::{
    error::{ProjectError, Result},
    project::Project,
};

fn invalid(
    index: usize,
    field: &'static str,
    value: &str,
    reason: impl Into<String>,
) -> ProjectError {
    ProjectError::Invalid {
        index,
        field,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn require_text(index: usize, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(index, field, value, "must not be empty or whitespace-only"));
    }
    Ok(())
}

// Url::parse trims, so padding would otherwise reach the renderer.
fn require_unpadded(index: usize, field: &'static str, value: &str) -> Result<()> {
    if value.trim() != value {
        return Err(invalid(index, field, value, "has leading or trailing whitespace"));
    }
    Ok(())
}

fn web_url(index: usize, field: &'static str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| invalid(index, field, value, format!("not a URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(index, field, value, format!("unsupported URL scheme: {scheme}"))),
    }
}

/// Check one record. `index` is its position in the list, used in errors.
pub fn validate_project(index: usize, p: &Project) -> Result<()> {
    require_text(index, "title", &p.title)?;
    require_text(index, "description", &p.description)?;

    if let Some(href) = p.href() {
        require_text(index, "href", href)?;
        require_unpadded(index, "href", href)?;
        web_url(index, "href", href)?;
    }

    if let Some(src) = p.img_src() {
        require_text(index, "imgSrc", src)?;
        require_unpadded(index, "imgSrc", src)?;
        if src.contains('\0') {
            return Err(invalid(index, "imgSrc", src, "contains a NUL byte"));
        }
        // site-relative asset path, otherwise a full URL
        if !src.starts_with('/') {
            web_url(index, "imgSrc", src)?;
        }
    }

    Ok(())
}

/// Check every record, stopping at the first bad one.
pub fn validate_all(projects: &[Project]) -> Result<()> {
    for (i, p) in projects.iter().enumerate() {
        validate_project(i, p)?;
    }
    tracing::debug!(count = projects.len(), "project list validated");
    Ok(())
}
