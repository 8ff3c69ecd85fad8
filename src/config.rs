use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
pub const DEFAULT_BOT_CHECK_MAX_LEN: usize = 10_000;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Immutable settings handed to [`Fetcher::new`](crate::fetcher::Fetcher::new).
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
    /// Bodies shorter than this (in chars) are scanned for CAPTCHA markers.
    pub bot_check_max_len: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            bot_check_max_len: DEFAULT_BOT_CHECK_MAX_LEN,
        }
    }
}

impl FetchSettings {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fetch: FetchSettings,
    pub debug: bool,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    fetch: FetchSection,
}

#[derive(Debug, Deserialize, Default)]
struct FetchSection {
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
    max_redirects: Option<usize>,
}

/// Raw environment variable values, read once by [`AppConfig::load`].
#[derive(Debug, Default)]
struct EnvOverrides {
    timeout_secs: Option<String>,
    user_agent: Option<String>,
}

impl AppConfig {
    pub fn load(
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
        debug: bool,
    ) -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wishlist-meta");
        let env = EnvOverrides {
            timeout_secs: std::env::var("WISHLIST_META_TIMEOUT_SECS").ok(),
            user_agent: std::env::var("WISHLIST_META_USER_AGENT").ok(),
        };
        Self::load_from(timeout_secs, user_agent, debug, env, &config_dir)
    }

    fn load_from(
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
        debug: bool,
        env: EnvOverrides,
        config_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let file_config = load_config_file(config_dir);

        // Priority: CLI flags → env vars → config file → defaults
        let timeout_env = env
            .timeout_secs
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    ConfigError::Invalid(format!(
                        "WISHLIST_META_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })
            })
            .transpose()?;

        Self::resolve(
            timeout_secs.or(timeout_env),
            user_agent.or(env.user_agent),
            file_config,
            debug,
        )
    }

    fn resolve(
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
        file_config: ConfigFile,
        debug: bool,
    ) -> Result<Self, ConfigError> {
        let defaults = FetchSettings::default();

        let timeout = match timeout_secs.or(file_config.fetch.timeout_secs) {
            Some(0) => {
                return Err(ConfigError::Invalid(
                    "timeout must be at least 1 second".to_string(),
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.timeout,
        };

        let user_agent = user_agent
            .or(file_config.fetch.user_agent)
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        let max_redirects = file_config
            .fetch
            .max_redirects
            .unwrap_or(defaults.max_redirects);

        Ok(AppConfig {
            fetch: FetchSettings {
                timeout,
                user_agent,
                max_redirects,
                bot_check_max_len: defaults.bot_check_max_len,
            },
            debug,
        })
    }
}

fn load_config_file(config_dir: &Path) -> ConfigFile {
    let config_path = config_dir.join("config.toml");
    if !config_path.exists() {
        return ConfigFile::default();
    }
    match read_config_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {}", config_path.display(), e);
            ConfigFile::default()
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
