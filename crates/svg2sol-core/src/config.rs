//! Project configuration (`svg2sol.config.json`) loading and saving.
//!
//! A config file describes one embedding job: where the payload lives, where
//! the generated Solidity source goes, and how the contract is named. The
//! [`Default`] impl reproduces the original mushroom pipeline fixed paths,
//! so running without any config file at all still works.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, Result};

/// Default name of the project config file.
pub const CONFIG_FILE: &str = "svg2sol.config.json";

/// Naming of the generated Solidity contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Contract name emitted in the generated source.
    pub name: String,
    /// Name of the public string constant holding the data URI.
    pub constant: String,
    /// MIME type used in the data URI prefix (e.g., `image/gif`).
    pub mime: String,
}

/// One embedding project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (informational).
    pub name: String,
    /// Path to the Base64 payload file, relative to the project root.
    pub payload: PathBuf,
    /// Path the generated Solidity source is written to.
    pub output: PathBuf,
    pub contract: ContractConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "mushroom-gif-storage".into(),
            payload: PathBuf::from("levelTwoGifBackground.txt"),
            output: PathBuf::from("MushroomGifStorage.sol"),
            contract: ContractConfig {
                name: "MushroomGifStorage".into(),
                constant: "levelTwoGifBackground".into(),
                mime: "image/gif".into(),
            },
        }
    }
}

impl ProjectConfig {
    /// Load a config from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| EmbedError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| EmbedError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write the config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| EmbedError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
