use std::path::PathBuf;

use clap::Parser;

use reaction_intermediates::{app, config::Config, logger, Result};

/// Serves the reaction-intermediates query form.
#[derive(Parser)]
#[command(name = "reaction-intermediates", version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config/development.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    logger::init(&config.logger);
    let ctx = app::create_context(config)?;
    app::serve(ctx).await
}
