// project layout configuration
//
// every key has a default matching the standard flutter project layout, so a
// project without a config file behaves exactly like the fixed tool.

use crate::error::ToolError;
use crate::utils::read_text;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// name of the optional per-project config file
pub const CONFIG_FILE_NAME: &str = "verse-tools.toml";

/// environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "VERSE_TOOLS_CONFIG";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub layout: ProjectLayout,
    pub assets: AssetList,
}

/// where things live, relative to the project root
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProjectLayout {
    pub manifest: String,
    pub assets_dir: String,
    pub images_dir: String,
    pub icons_dir: String,
    pub source_dir: String,
    pub source_extension: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            manifest: "pubspec.yaml".to_string(),
            assets_dir: "assets".to_string(),
            images_dir: "assets/images".to_string(),
            icons_dir: "assets/icons".to_string(),
            source_dir: "lib".to_string(),
            source_extension: "dart".to_string(),
        }
    }
}

impl ProjectLayout {
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    pub fn assets_path(&self, root: &Path) -> PathBuf {
        root.join(&self.assets_dir)
    }

    pub fn images_path(&self, root: &Path) -> PathBuf {
        root.join(&self.images_dir)
    }

    pub fn icons_path(&self, root: &Path) -> PathBuf {
        root.join(&self.icons_dir)
    }

    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    /// how the images directory is spelled inside the manifest, e.g. `assets/images/`
    pub fn images_declaration(&self) -> String {
        declaration(&self.images_dir)
    }

    /// how the icons directory is spelled inside the manifest, e.g. `assets/icons/`
    pub fn icons_declaration(&self) -> String {
        declaration(&self.icons_dir)
    }
}

fn declaration(dir: &str) -> String {
    format!("{}/", dir.trim_end_matches('/'))
}

/// asset files the project is expected to ship
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AssetList {
    pub required_images: Vec<String>,
    pub required_icons: Vec<String>,
}

impl Default for AssetList {
    fn default() -> Self {
        Self {
            required_images: [
                "profile.jpg",
                "home_bg.jpg",
                "james.jpg",
                "marry.jpg",
                "John.jpg",
                "rosy.jpg",
                "Red_Mountains.jpg",
                "Magical_World.jpg",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            required_icons: ["calendar.svg", "chat.svg", "friendship.svg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// parse a config document
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ToolError> {
        toml::from_str(content).map_err(|e| ToolError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// load configuration for a project
    ///
    /// an explicit path (from `--config` or `VERSE_TOOLS_CONFIG`, resolved by
    /// clap) wins over `verse-tools.toml` in the project root. a missing
    /// project file means defaults; a missing explicit file is an error.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Config::default());
                }
                candidate
            }
        };

        let content = read_text(&path)?;
        Ok(Config::from_toml(&content, &path)?)
    }
}
