use crate::config::Config;
use crate::styles::ThemeType;
use crate::utils::get_config_path;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Sign in to Food Split from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "foodsplit", version, about = "Sign in to Food Split from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/foodsplit/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Delay of the simulated sign in / sign up request, in milliseconds
    #[arg(long, value_name = "MS")]
    pub submit_delay_ms: Option<u64>,

    /// Color theme: dark, light or nocolor
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Disable all UI colors (same as NO_COLOR=1)
    #[arg(long)]
    pub no_colors: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(get_config_path)
    }

    /// Load the config file and apply command line overrides on top.
    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_path();
        let mut config = Config::load_or_create(&config_path)
            .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(delay) = self.submit_delay_ms {
            config.submit_delay_ms = delay;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }

    /// Theme to install, honoring `--no-colors` and `NO_COLOR`.
    pub fn theme_type(&self, config: &Config) -> ThemeType {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if self.no_colors || no_color_env {
            ThemeType::NoColor
        } else {
            config.theme_type()
        }
    }
}
