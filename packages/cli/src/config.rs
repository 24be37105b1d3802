use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use styleforge_core::{Pipeline, SequentialClassNames};
use styleforge_plugin_global::GlobalPlugin;
use thiserror::Error;

pub const DEFAULT_CONFIG_NAME: &str = "styleforge.config.json";

/// Extension of the style files picked up from the source directory
pub const STYLE_FILE_EXTENSION: &str = "json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown plugin '{name}' (available: global)")]
    UnknownPlugin { name: String },
}

/// Styleforge configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory containing style files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Output directory for compiled CSS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Prepended to every generated class name
    #[serde(default)]
    pub class_name_prefix: String,

    /// Plugins to run, in order
    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_plugins() -> Vec<String> {
    vec!["global".to_string()]
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    /// Get absolute path to output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(self.out_dir.as_deref().unwrap_or("dist"))
    }

    /// Build the compilation pipeline described by this config
    pub fn pipeline(&self) -> Result<Pipeline, ConfigError> {
        let mut pipeline =
            Pipeline::with_class_names(SequentialClassNames::with_prefix(&self.class_name_prefix));

        for name in &self.plugins {
            pipeline = match name.as_str() {
                "global" => pipeline.with_plugin(GlobalPlugin),
                other => {
                    return Err(ConfigError::UnknownPlugin {
                        name: other.to_string(),
                    })
                }
            };
        }

        Ok(pipeline)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: None,
            class_name_prefix: String::new(),
            plugins: default_plugins(),
        }
    }
}
