use crate::{config::ProjectsFileRef, error::Result, project::Project};

/// Pretty JSON array in the shape the site renderer imports.
pub fn to_json(projects: &[Project]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(projects)?;
    out.push('\n');
    Ok(out)
}

/// A data file that `Catalog::load_from_path` reads back unchanged.
pub fn to_toml(projects: &[Project]) -> Result<String> {
    Ok(toml::to_string(&ProjectsFileRef::new(projects))?)
}
