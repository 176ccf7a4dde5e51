use crate::cli::CatalogArgs;
use crate::config::Config;
use crate::core::catalog::StaticCatalog;
use crate::core::traits::CatalogProvider;
use crate::utils::output::DisplayFormatter;
use anyhow::Result;

pub fn handle_catalog_command(config: &Config, args: &CatalogArgs) -> Result<()> {
    let catalog = StaticCatalog::new();
    let compounds = match args.role {
        Some(role) => catalog.by_role(role),
        None => catalog.compounds().iter().collect(),
    };

    DisplayFormatter::print_catalog(&compounds, args.format.unwrap_or(config.general.format))
}
