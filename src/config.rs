//! eventcal configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use eventcal_core::Mode;
use serde::{Deserialize, Serialize};

static DEFAULT_CONTENT_DIR: &str = "content/events";

fn default_content_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CONTENT_DIR)
}

/// Configuration at ~/.config/eventcal/config.toml, overridable with
/// `EVENTCAL_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventcalConfig {
    /// Directory holding the event content files.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Whether duplicate slugs abort (`strict`) or are only reported (`lenient`).
    #[serde(default)]
    pub mode: Mode,
}

impl Default for EventcalConfig {
    fn default() -> Self {
        EventcalConfig {
            content_dir: default_content_dir(),
            mode: Mode::default(),
        }
    }
}

impl EventcalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("eventcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (which may not exist) and the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("EVENTCAL"))
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| format!("Could not load config from {}", path.display()))
    }

    /// Content directory with `~` expanded.
    pub fn content_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.content_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Could not serialize config")
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# eventcal configuration

# Where your event files live:
# content_dir = \"{}\"

# How duplicate slugs are handled: \"strict\" fails, \"lenient\" only warns.
# mode = \"strict\"
",
            DEFAULT_CONTENT_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
