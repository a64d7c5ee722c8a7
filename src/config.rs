//! Configuration for grimoire
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/grimoire/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the spell catalog API (the `/Spells` path is appended)
    pub api_url: String,

    /// Quiet window before a search fetch is issued, in milliseconds.
    /// 0 disables debouncing (one fetch per keystroke).
    pub debounce_ms: u64,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,

    /// Demo mode: serve bundled sample spells instead of hitting the network
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level ("error", "warn", "info", "debug", "trace").
    /// RUST_LOG overrides this when set.
    pub level: String,

    /// Whether to also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://wizard-world-api.herokuapp.com".to_string(),
            debounce_ms: 250,
            request_timeout_secs: 30,
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "grimoire.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Config file structure (everything optional - absent keys keep defaults)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub debounce_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub demo: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<LogRotation>,
}

impl Config {
    /// Get the config file path: ~/.config/grimoire/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("grimoire").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists. A config file that exists but cannot
    /// be parsed fails fast with a clear message - silently falling back to
    /// defaults would have the user debugging the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file {}:", path.display());
                    eprintln!("  {}", e);
                    eprintln!("Fix the file or reset it with: grimoire config --reset");
                    std::process::exit(1);
                }
            },
            // Missing file is fine - defaults apply
            Err(_) => FileConfig::default(),
        }
    }

    /// Load configuration: env vars > config file > defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_file(Self::load_file_config());

        // Environment overrides
        if let Ok(url) = std::env::var("GRIMOIRE_API_URL") {
            config.api_url = url;
        }
        if let Ok(ms) = std::env::var("GRIMOIRE_DEBOUNCE_MS") {
            if let Ok(ms) = ms.parse() {
                config.debounce_ms = ms;
            }
        }
        if let Ok(secs) = std::env::var("GRIMOIRE_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.request_timeout_secs = secs;
            }
        }
        if let Ok(demo) = std::env::var("GRIMOIRE_DEMO") {
            config.demo_mode = demo == "1" || demo.eq_ignore_ascii_case("true");
        }
        if let Ok(level) = std::env::var("GRIMOIRE_LOG") {
            config.logging.level = level;
        }

        config
    }

    /// Merge file values over the defaults
    pub(crate) fn apply_file(&mut self, file: FileConfig) {
        if let Some(url) = file.api_url {
            self.api_url = url;
        }
        if let Some(ms) = file.debounce_ms {
            self.debounce_ms = ms;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(demo) = file.demo {
            self.demo_mode = demo;
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(enabled) = logging.file_enabled {
                self.logging.file_enabled = enabled;
            }
            if let Some(dir) = logging.file_dir {
                self.logging.file_dir = PathBuf::from(dir);
            }
            if let Some(prefix) = logging.file_prefix {
                self.logging.file_prefix = prefix;
            }
            if let Some(rotation) = logging.file_rotation {
                self.logging.file_rotation = rotation;
            }
        }
    }

    /// Debounce window as a Duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// HTTP request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Render the config as a commented TOML template. Single source of
    /// truth for `config --reset` and the first-run template.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# grimoire configuration
# Precedence: environment variables > this file > defaults

# Base URL of the spell catalog API
api_url = {api_url:?}

# Quiet window before a search fetch is issued (milliseconds).
# 0 = fetch on every keystroke.
debounce_ms = {debounce_ms}

# HTTP request timeout (seconds)
request_timeout_secs = {timeout}

# Serve bundled sample spells instead of hitting the network
demo = {demo}

[logging]
# Log level: error, warn, info, debug, trace (RUST_LOG overrides)
level = {level:?}

# Also write logs to rotating files
file_enabled = {file_enabled}
file_dir = {file_dir:?}
file_prefix = {file_prefix:?}
# Rotation: "hourly", "daily", or "never"
file_rotation = {file_rotation:?}
"#,
            api_url = self.api_url,
            debounce_ms = self.debounce_ms,
            timeout = self.request_timeout_secs,
            demo = self.demo_mode,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }
}
