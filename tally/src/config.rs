use project_root::get_project_root;

use clap::Parser;
use figment::{
    Figment,
    providers::{Format, Toml},
};

use std::path::PathBuf;

/// A single, unified struct holding all application settings.
/// It is deserialized from the TOML file.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub input: InputConfig,
    pub report: ReportConfig,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct InputConfig {
    pub path: PathBuf,
    pub delimiter: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ReportConfig {
    pub similarity: bool,
}

/// Parses command-line arguments using the clap derive macro.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file with one location id pair per line.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Literal string separating the two ids on every line.
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Report the total distance only.
    #[arg(long)]
    pub distance_only: bool,
}

/// Loads configuration from the TOML file and merges it with CLI arguments.
pub fn get_config() -> anyhow::Result<Config> {
    let cli = Cli::parse();

    let config_path = get_project_root()?.join("config/settings.toml");
    let mut figment = Figment::new().merge(Toml::file(config_path));

    if let Some(input) = cli.input {
        figment = figment.merge(("input.path", input.display().to_string()));
    }
    if let Some(delimiter) = cli.delimiter {
        figment = figment.merge(("input.delimiter", delimiter));
    }
    if cli.distance_only {
        figment = figment.merge(("report.similarity", false));
    }

    let config: Config = figment.extract()?;
    Ok(config)
}
