use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::interactive::prompt_yes_no;
use crate::utils::{OutputStyle, print_success};
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(
    config: &Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(config, config_path),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  dyeratio Configuration");

    let general = &config.general;
    OutputStyle::print_field_colored("File", &config_path.display().to_string(), OutputStyle::muted);
    OutputStyle::print_field_colored("Color", &general.color.to_string(), OutputStyle::info);
    OutputStyle::print_field_colored("Format", &format!("{:?}", general.format).to_lowercase(), OutputStyle::info);
    OutputStyle::print_field_colored("Chart width", &general.chart_width.to_string(), OutputStyle::info);
    OutputStyle::print_field_colored("Show entries", &general.show_entries.to_string(), OutputStyle::info);

    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  Configuration Management");
    println!("Available configuration commands:");
    println!("  dyeratio config show    - Show current configuration");
    println!("  dyeratio config path    - Print the configuration file location");
    println!("  dyeratio config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config_path: &Path) -> Result<()> {
    if prompt_yes_no("Reset configuration to defaults? This overwrites your current settings.")? {
        Config::default().save_to(config_path)?;
        print_success("Configuration reset to defaults!");
    } else {
        println!("{}", OutputStyle::muted("Reset cancelled."));
    }
    Ok(())
}
