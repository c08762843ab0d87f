use anyhow::{Context as _, Result};
use clap::Parser;

use portfolio_projects::{
    cli::{Args, Format},
    export, logger, report, Catalog,
};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let catalog = Catalog::resolve(args.data.as_deref()).context("failed to load project data")?;
    tracing::debug!(source = %catalog.source(), count = catalog.len(), "catalog ready");

    let out = match args.format {
        Format::Json => export::to_json(catalog.projects())?,
        Format::Toml => export::to_toml(catalog.projects())?,
        Format::Summary => report::build_report(&catalog),
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, &out)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote projects");
        }
        None => print!("{out}"),
    }

    Ok(())
}
