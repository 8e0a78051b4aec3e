//! Configuration for statepages
//!
//! The pipeline takes all of its inputs (template, catalog, output target,
//! the year baked into footers) from an explicit `Config` rather than
//! ambient paths, so a run is a pure function of its configuration.

use chrono::Datelike;
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the HTML page template
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    /// Path to the state catalog (JSON)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Directory the generated pages are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Year substituted into the pages, captured once per run
    #[serde(default = "default_current_year")]
    pub current_year: i32,
}

fn default_template_path() -> PathBuf {
    PathBuf::from("assets/page.template.html")
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/states.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist/states")
}

fn default_current_year() -> i32 {
    chrono::Utc::now().year()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            catalog_path: default_catalog_path(),
            output_dir: default_output_dir(),
            current_year: default_current_year(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("statepages").join("config.yml")),
            Some(PathBuf::from("statepages.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
