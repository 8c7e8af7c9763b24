mod application;
mod config;
mod infrastructure;

use anyhow::Result;
use config::get_config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use application::service::TallyService;
use infrastructure::{loader::FileLoader, reporter::StdoutReporter};

fn setup_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.parse()?)
        .from_env_lossy();

    // Logs go to stderr; stdout carries nothing but the report lines.
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = get_config()?;
    setup_tracing(&config.logging.level)?;
    tracing::debug!(?config, "Full application configuration");

    let loader = FileLoader::new(&config.input);
    let reporter = StdoutReporter;

    let service = TallyService::new(loader, reporter, config.report.similarity);

    if let Err(e) = service.run() {
        tracing::error!("Run finished with an error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
