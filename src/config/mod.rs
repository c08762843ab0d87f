// src/config/mod.rs
use std::{
	borrow::Cow,
	ffi::OsString,
	fmt,
	path::{Path, PathBuf},
};

use crate::{
	data::projects_data,
	error::{ProjectError, Result},
	project::Project,
	validate::validate_all,
};

pub mod projects;

pub use projects::{ProjectsFile, ProjectsFileRef, SCHEMA_VERSION};

pub const DATA_ENV: &str = "PORTFOLIO_PROJECTS";

/// `<config_dir>/portfolio-projects/projects.toml`, if the platform has a config dir.
pub fn default_data_path() -> Option<PathBuf> {
	dirs::config_dir().map(|d| d.join("portfolio-projects").join("projects.toml"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
	Builtin,
	File(PathBuf),
}

impl fmt::Display for CatalogSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CatalogSource::Builtin => f.write_str("built-in"),
			CatalogSource::File(p) => write!(f, "{}", p.display()),
		}
	}
}

/// An ordered project list plus where it came from.
///
/// The built-in list is borrowed from the static; a loaded file is owned.
#[derive(Debug, Clone)]
pub struct Catalog {
	source: CatalogSource,
	projects: Cow<'static, [Project]>,
}

impl Catalog {
	pub fn builtin() -> Self {
		Self {
			source: CatalogSource::Builtin,
			projects: Cow::Borrowed(projects_data()),
		}
	}

	pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)?;
		let projects = parse_projects(&text)?;

		if projects.is_empty() {
			tracing::warn!(path = %path.display(), "data file declares no projects");
		}
		tracing::info!(path = %path.display(), count = projects.len(), "loaded project data");

		Ok(Self {
			source: CatalogSource::File(path.to_path_buf()),
			projects: Cow::Owned(projects),
		})
	}

	/// Data file precedence:
	/// 1) `--data` (must exist)
	/// 2) `PORTFOLIO_PROJECTS` (must exist)
	/// 3) the default path under the user config dir, when present
	/// 4) the built-in list
	pub fn resolve(cli_data: Option<&Path>) -> Result<Self> {
		let env = std::env::var_os(DATA_ENV);
		let located = locate_data_file(cli_data, env, default_data_path())?;
		match located {
			Some(path) => Self::load_from_path(path),
			None => {
				tracing::debug!("no data file found, using built-in projects");
				Ok(Self::builtin())
			}
		}
	}

	pub fn source(&self) -> &CatalogSource {
		&self.source
	}

	pub fn projects(&self) -> &[Project] {
		&self.projects
	}

	pub fn len(&self) -> usize {
		self.projects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.projects.is_empty()
	}
}

/// Parse and validate a TOML data file body.
pub fn parse_projects(text: &str) -> Result<Vec<Project>> {
	let file: ProjectsFile = toml::from_str(text)?;
	if file.schema_version != SCHEMA_VERSION {
		return Err(ProjectError::SchemaVersion {
			found: file.schema_version,
			expected: SCHEMA_VERSION,
		});
	}
	validate_all(&file.projects)?;
	Ok(file.projects)
}

/// Pure precedence logic behind [`Catalog::resolve`].
pub fn locate_data_file(
	cli_data: Option<&Path>,
	env_value: Option<OsString>,
	default_path: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
	if let Some(p) = cli_data {
		if !p.exists() {
			return Err(ProjectError::MissingDataFile {
				origin: "--data",
				path: p.to_path_buf(),
			});
		}
		return Ok(Some(p.to_path_buf()));
	}

	if let Some(v) = env_value.filter(|v| !v.is_empty()) {
		let p = PathBuf::from(v);
		if !p.exists() {
			return Err(ProjectError::MissingDataFile { origin: DATA_ENV, path: p });
		}
		return Ok(Some(p));
	}

	Ok(default_path.filter(|p| p.is_file()))
}
