use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// Which file is active right after the viewer opens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InitialSelection {
    /// Start with no active file (placeholder pane)
    #[default]
    None,
    /// Start on the first file in depth-first order
    FirstFile,
    /// Start on the file at this `/`-separated name path
    Path(String),
}

/// Viewer behavior and layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ViewerConfig {
    #[serde(default)]
    pub initial_selection: InitialSelection,

    /// Width of the tree pane as a fraction of the screen (0.1 to 0.9)
    #[serde(default = "default_tree_width")]
    pub tree_width: f32,

    /// Show the language tag next to the file name in the content header
    #[serde(default = "default_true")]
    pub show_language: bool,

    /// Columns of indentation per tree level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_tree_width() -> f32 {
    0.3 // 30% of screen width
}

fn default_true() -> bool {
    true
}

fn default_indent_width() -> usize {
    2
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_selection: InitialSelection::None,
            tree_width: default_tree_width(),
            show_language: true,
            indent_width: default_indent_width(),
        }
    }
}

/// Typing playback timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlaybackConfig {
    /// Milliseconds between typed characters
    #[serde(default = "default_char_interval")]
    pub char_interval_ms: u64,

    /// Milliseconds a finished snippet stays on screen before the next one
    #[serde(default = "default_hold")]
    pub hold_ms: u64,
}

fn default_char_interval() -> u64 {
    20
}

fn default_hold() -> u64 {
    4000
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            char_interval_ms: default_char_interval(),
            hold_ms: default_hold(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewer: ViewerConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Load the explicit config file if given, else the user config if it
    /// exists, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match user_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            _ => {
                tracing::debug!("No user config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.1..=0.9).contains(&self.viewer.tree_width) {
            return Err(ConfigError::ValidationError(format!(
                "tree_width must be between 0.1 and 0.9, got {}",
                self.viewer.tree_width
            )));
        }

        if !(1..=8).contains(&self.viewer.indent_width) {
            return Err(ConfigError::ValidationError(format!(
                "indent_width must be between 1 and 8, got {}",
                self.viewer.indent_width
            )));
        }

        if let InitialSelection::Path(path) = &self.viewer.initial_selection {
            if path.trim_matches('/').is_empty() {
                return Err(ConfigError::ValidationError(
                    "initial_selection path cannot be empty".to_string(),
                ));
            }
        }

        if self.playback.char_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "char_interval_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Path of the user config file: `{config_dir}/codeview/config.json`
///
/// Uses the platform config directory (`$XDG_CONFIG_HOME` or `~/.config` on
/// Linux, `%APPDATA%` on Windows). On macOS `~/.config/codeview` wins if it
/// exists.
pub fn user_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    if let Some(home) = dirs::home_dir() {
        let xdg_config = home.join(".config");
        if xdg_config.join("codeview").exists() {
            return Some(config_file_in(&xdg_config));
        }
    }

    dirs::config_dir().map(|dir| config_file_in(&dir))
}

fn config_file_in(config_dir: &Path) -> PathBuf {
    config_dir.join("codeview").join("config.json")
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
