use crate::commands::{calc, catalog, configure, session};
use crate::config::{Config, OutputFormat};
use crate::core::catalog::Role;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dyeratio")]
#[command(about = "Mole ratio and shade calculator for oxidative hair dye formulations")]
#[command(version)]
pub struct Cli {
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Print debug logs to stderr")]
    pub debug: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config, config_path: &Path) -> Result<()> {
        match self {
            Commands::Catalog(args) => catalog::handle_catalog_command(&config, &args)?,
            Commands::Calc(args) => calc::handle_calc_command(&config, &args)?,
            Commands::Session => session::handle_session_command(&config)?,
            Commands::Config(args) => configure::handle_config_command(&config, config_path, args.command)?,
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the compounds available for a formulation
    Catalog(CatalogArgs),

    /// Calculate the mole ratio and shade for the given entries
    Calc(CalcArgs),

    /// Build a formulation interactively
    Session,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    #[arg(short, long, help = "Only show one side of the reaction")]
    pub role: Option<Role>,

    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct CalcArgs {
    #[arg(
        short = 'p',
        long = "precursor",
        value_name = "NAME=GRAMS",
        help = "Precursor entry, repeatable"
    )]
    pub precursors: Vec<String>,

    #[arg(
        short = 'c',
        long = "coupler",
        value_name = "NAME=GRAMS",
        help = "Coupler entry, repeatable"
    )]
    pub couplers: Vec<String>,

    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Copy)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}
