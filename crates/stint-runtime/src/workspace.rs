use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Directory under the workspace root where session logs live.
pub const SESSIONS_DIRECTORY: &str = ".stint/sessions";

/// Directory under the workspace root holding stint state.
pub const STINT_DIRECTORY: &str = ".stint";

/// Resolve the workspace root based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. STINT_WORKSPACE environment variable (with tilde expansion)
/// 3. Current working directory
pub fn resolve_workspace_root(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("STINT_WORKSPACE") {
        return Ok(expand_tilde(&env_path));
    }

    std::env::current_dir().map_err(|err| {
        Error::Config(format!("Could not determine workspace root: {}", err))
    })
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Config file path for a workspace root.
pub fn config_path(workspace: &Path) -> PathBuf {
    workspace.join(STINT_DIRECTORY).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let root = resolve_workspace_root(Some("/tmp/project")).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/project"));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = std::env::var_os("HOME") {
            let expanded = expand_tilde("~/work");
            assert_eq!(expanded, PathBuf::from(home).join("work"));
        }
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }

    #[test]
    fn test_config_path_layout() {
        let path = config_path(Path::new("/w"));
        assert_eq!(path, PathBuf::from("/w/.stint/config.toml"));
    }
}
