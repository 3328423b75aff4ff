use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::consts::APP_NAME;

/// Environment variable naming an explicit config file
pub(crate) const CONFIG_ENV: &str = "CLAUDE_STATUSLINE_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) model_table: Option<PathBuf>,
    #[serde(default)]
    pub(crate) git_timeout_ms: Option<u64>,
    #[serde(default)]
    pub(crate) no_git: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) tools_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) interpreter: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(&Self::get_config_paths(explicit))
    }

    /// First existing file that parses wins; broken files are skipped with a warning
    fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::parse_file(path) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(e) => warn!(path = %path.display(), "failed to parse config: {e}"),
            }
        }

        Self::default()
    }

    fn parse_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        toml::from_str(&content).map_err(|e| e.to_string())
    }

    fn get_config_paths(explicit: Option<PathBuf>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 0. $CLAUDE_STATUSLINE_CONFIG
        if let Some(path) = explicit {
            paths.push(path);
        }

        // 1. XDG config: ~/.config/claude-statusline/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_NAME).join("config.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support/claude-statusline/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_NAME).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.claude-statusline.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_NAME}.toml")));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_comes_first() {
        let explicit = PathBuf::from("/tmp/statusline.toml");
        let paths = Config::get_config_paths(Some(explicit.clone()));
        assert_eq!(paths.first(), Some(&explicit));
        assert!(paths.len() > 1);
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
model_table = "/opt/prices.json"
git_timeout_ms = 500
no_git = true
no_color = true
timezone = "UTC"
tools_dir = "/opt/tools"
interpreter = "python3.11"
"#,
        )
        .unwrap();
        assert_eq!(config.model_table, Some(PathBuf::from("/opt/prices.json")));
        assert_eq!(config.git_timeout_ms, Some(500));
        assert!(config.no_git);
        assert!(config.no_color);
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
        assert_eq!(config.tools_dir, Some(PathBuf::from("/opt/tools")));
        assert_eq!(config.interpreter.as_deref(), Some("python3.11"));
    }

    #[test]
    fn skips_broken_file_and_uses_next() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        fs::write(&broken, "git_timeout_ms = \"soon\"").unwrap();
        fs::write(&good, "git_timeout_ms = 42").unwrap();

        let config = Config::load_from(&[dir.path().join("missing.toml"), broken, good]);
        assert_eq!(config.git_timeout_ms, Some(42));
    }

    #[test]
    fn nothing_found_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&[dir.path().join("missing.toml")]);
        assert!(config.timezone.is_none());
        assert!(!config.no_git);
    }
}
