use anyhow::Result;
use clap::Parser;
use log::debug;

use dyeratio::cli::Cli;
use dyeratio::config::Config;
use dyeratio::core::catalog::StaticCatalog;
use dyeratio::core::traits::CatalogProvider;
use dyeratio::utils::error::{AppError, report_error};
use dyeratio::utils::logging::init_logging;
use dyeratio::utils::output::{OutputStyle, apply_color_preference};

fn main() {
    if let Err(e) = run() {
        match e.downcast_ref::<AppError>() {
            Some(app_error) => report_error(app_error),
            None => eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", e))),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    // Ensure configuration exists and load it
    let (config, config_path) = match &cli.config {
        Some(path) => (Config::load_custom(path)?, path.clone()),
        None => {
            Config::ensure_config_exists()?;
            (Config::load()?, Config::config_file_path())
        }
    };
    debug!("loaded config from {}", config_path.display());

    apply_color_preference(&config, cli.no_color);

    StaticCatalog::new().validate()?;

    cli.command.execute(config, &config_path)
}
