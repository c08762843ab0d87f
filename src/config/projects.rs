// src/config/projects.rs
use crate::project::Project;

pub const SCHEMA_VERSION: u32 = 1;

/// On-disk shape of a project data file.
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectsFile {
	pub schema_version: u32,

	#[serde(default)]
	pub projects: Vec<Project>,
}

/// Borrowing counterpart of [`ProjectsFile`], used when writing one out.
#[derive(Debug, serde::Serialize)]
pub struct ProjectsFileRef<'a> {
	pub schema_version: u32,
	pub projects: &'a [Project],
}

impl<'a> ProjectsFileRef<'a> {
	pub fn new(projects: &'a [Project]) -> Self {
		Self {
			schema_version: SCHEMA_VERSION,
			projects,
		}
	}
}
