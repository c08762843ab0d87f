use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "portfolio-projects", version, about)]
pub struct Args {
    /// Path to a projects.toml (overrides PORTFOLIO_PROJECTS and the default location)
    #[arg(long)]
    pub data: Option<std::path::PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<std::path::PathBuf>,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Toml,
    Summary,
}
