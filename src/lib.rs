pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod logger;
pub mod project;
pub mod report;
pub mod validate;

pub use config::{Catalog, CatalogSource};
pub use data::projects_data;
pub use error::{ProjectError, Result};
pub use project::Project;
