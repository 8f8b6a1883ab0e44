//! Global itinerary configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ItineraryError, ItineraryResult};
use crate::store::JsonFileStore;

const DATA_FILE_NAME: &str = "trip-items.json";
const ENV_PREFIX: &str = "ITINERARY";

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("itinerary").join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from("~/.itinerary").join(DATA_FILE_NAME))
}

/// Which view to show when no subcommand is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    #[default]
    Calendar,
    List,
}

/// Global configuration at ~/.config/itinerary/config.toml
///
/// Every key can be overridden with an `ITINERARY_`-prefixed environment
/// variable, e.g. `ITINERARY_DATA_FILE`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItineraryConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub default_view: DefaultView,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        ItineraryConfig {
            data_file: default_data_file(),
            default_view: DefaultView::default(),
        }
    }
}

impl ItineraryConfig {
    pub fn config_path() -> ItineraryResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ItineraryError::Config("Could not determine config directory".into()))?
            .join("itinerary");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/itinerary/config.toml, creating a commented default file
    /// on first run.
    pub fn load() -> ItineraryResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file plus environment overrides. A missing file
    /// yields the defaults.
    pub fn load_from(path: &Path) -> ItineraryResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| ItineraryError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ItineraryError::Config(e.to_string()))
    }

    /// The data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_path(&self.data_file)
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ItineraryResult<()> {
        let defaults = ItineraryConfig::default();
        let example = toml::to_string_pretty(&defaults)
            .map_err(|e| ItineraryError::Serialization(e.to_string()))?;

        let commented: String = example
            .lines()
            .map(|line| if line.is_empty() { "\n".to_string() } else { format!("# {line}\n") })
            .collect();

        let contents = format!(
            "\
# itinerary configuration
#
# data_file: where trip items are stored
# default_view: \"calendar\" or \"list\", shown when no command is given

{commented}"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ItineraryError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ItineraryError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
