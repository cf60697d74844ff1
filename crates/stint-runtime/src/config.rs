use crate::Result;
use crate::workspace;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// Session log directory, relative to the workspace root.
    #[serde(default = "default_sessions_directory")]
    pub directory: PathBuf,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            directory: default_sessions_directory(),
        }
    }
}

fn default_sessions_directory() -> PathBuf {
    PathBuf::from(workspace::SESSIONS_DIRECTORY)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_serve_port")]
    pub port: u16,

    /// Asset directory, relative to the workspace root.
    #[serde(default = "default_serve_root")]
    pub root: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: default_serve_port(),
            root: default_serve_root(),
        }
    }
}

fn default_serve_port() -> u16 {
    8000
}

fn default_serve_root() -> PathBuf {
    PathBuf::from("dist")
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sessions: SessionsConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl Config {
    /// Load the config for a workspace, falling back to defaults when no
    /// config file exists yet.
    pub fn load(workspace_root: &Path) -> Result<Self> {
        Self::load_from(&workspace::config_path(workspace_root))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Absolute session log directory for a workspace root.
    pub fn sessions_dir(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.sessions.directory)
    }

    /// Absolute asset directory for a workspace root.
    pub fn serve_root(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.serve.root)
    }
}
