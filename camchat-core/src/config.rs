use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{CamchatError, CamchatResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CamchatConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Only bounds connection setup; a request itself is never timed out.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_theme() -> String {
    "Tokyo Night".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_ms: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate(),
            show_welcome: true,
        }
    }
}

impl CamchatConfig {
    /// Loads `.env` files, config files and `CAMCHAT_*` variables, in that order.
    pub fn load() -> CamchatResult<Self> {
        Self::load_from_paths(get_config_paths())
    }

    pub fn load_from_paths(paths: Vec<PathBuf>) -> CamchatResult<Self> {
        load_dotenv_files();

        let builder = Self::file_sources(paths).add_source(
            Environment::with_prefix("CAMCHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut camchat_config: CamchatConfig = builder.build()?.try_deserialize()?;
        camchat_config.apply_overrides(|key| std::env::var(key).ok());
        camchat_config.validate()?;

        Ok(camchat_config)
    }

    /// Loads only the given files, without touching the environment.
    pub fn from_files(paths: Vec<PathBuf>) -> CamchatResult<Self> {
        let camchat_config: CamchatConfig = Self::file_sources(paths).build()?.try_deserialize()?;
        camchat_config.validate()?;
        Ok(camchat_config)
    }

    fn file_sources(
        paths: Vec<PathBuf>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        let mut builder = ConfigBuilder::builder();
        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }
        builder
    }

    /// Applies the single-variable overrides. `CAMCHAT_API_URL` wins over the
    /// older `API_BASE_URL` name.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CAMCHAT_API_URL").or_else(|| lookup("API_BASE_URL")) {
            self.api.base_url = url;
        }

        if let Some(level) = lookup("CAMCHAT_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            self.logging.level = level;
        }

        if let Some(file) = lookup("CAMCHAT_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }
    }

    pub fn validate(&self) -> CamchatResult<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(CamchatError::InvalidConfigValue {
                key: "api.base_url".to_string(),
                message: "Must not be empty".to_string(),
            });
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CamchatError::InvalidConfigValue {
                key: "api.base_url".to_string(),
                message: format!("'{}' must start with http:// or https://", url),
            });
        }

        if self.tui.tick_rate_ms == 0 {
            return Err(CamchatError::InvalidConfigValue {
                key: "tui.tick_rate_ms".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if !is_valid_filter(&self.logging.level) {
            return Err(CamchatError::InvalidConfigValue {
                key: "logging.level".to_string(),
                message: format!(
                    "Invalid log filter '{}'. Use a level ({}) or directives like 'info,reqwest=warn'",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepts the `EnvFilter` directive forms: `level`, `target`, `target=level`,
/// comma-separated. Span filters (`[...]`) are not accepted.
fn is_valid_filter(filter: &str) -> bool {
    let is_level = |s: &str| LOG_LEVELS.contains(&s.to_lowercase().as_str());
    let is_target = |s: &str| {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.'))
    };

    let mut directives = filter
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .peekable();
    if directives.peek().is_none() {
        return false;
    }

    directives.all(|directive| match directive.split_once('=') {
        Some((target, level)) => is_target(target.trim()) && is_level(level.trim()),
        None => is_level(directive) || is_target(directive),
    })
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config").join("default.toml"));
        paths.push(cwd.join("camchat.toml"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join("config.toml"));
    }

    paths
}

fn load_dotenv_files() {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".env"));
        paths.push(cwd.join(".env.local"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join(".env"));
    }

    for path in paths {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("camchat"))
}

pub fn get_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("camchat"))
}

pub fn ensure_cache_dir() -> Result<PathBuf, std::io::Error> {
    let cache_dir = get_cache_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine cache directory",
        )
    })?;

    if !cache_dir.exists() {
        std::fs::create_dir_all(&cache_dir)?;
    }

    Ok(cache_dir)
}
