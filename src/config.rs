use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MIN_CHART_WIDTH: usize = 10;
pub const MAX_CHART_WIDTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub color: bool,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_show_entries")]
    pub show_entries: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_chart_width() -> usize {
    40
}

fn default_show_entries() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                color: true,
                format: OutputFormat::Text,
                chart_width: default_chart_width(),
                show_entries: default_show_entries(),
            },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save()?;
        }
        Ok(())
    }

    /// Load from `config_path`, writing the defaults there first if it is missing
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let width = self.general.chart_width;
        if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&width) {
            return Err(AppError::Config(format!(
                "chart_width must be between {} and {}, got {}",
                MIN_CHART_WIDTH, MAX_CHART_WIDTH, width
            )));
        }
        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dyeratio")
            .join("config.toml")
    }
}
