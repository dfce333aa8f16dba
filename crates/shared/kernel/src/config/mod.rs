use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the config file looked up when no path is given (`countries.toml`, …).
pub const DEFAULT_CONFIG_FILE: &str = "countries";
/// Prefix of environment overrides, e.g. `COUNTRIES__FLAG_URL`.
pub const ENV_PREFIX: &str = "COUNTRIES";

/// Custom error type for config loading.
#[countries_derive::countries_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads settings from a file layered with environment overrides.
///
/// 1. **Base File**: `path` when given (must exist), otherwise an optional
///    [`DEFAULT_CONFIG_FILE`] in the working directory. The format follows the extension.
/// 2. **Environment Overrides**: variables prefixed with `COUNTRIES__`; nested keys use
///    double underscores (`COUNTRIES__LOG__LEVEL` maps to `log.level`). Values are parsed
///    as booleans or numbers when they look like one.
///
/// Missing keys fall back to the `Default` of `T` as long as `T` is `#[serde(default)]`.
///
/// # Errors
/// * An explicit `path` that cannot be found or parsed.
/// * Values that do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use countries_kernel::config::load_config;
/// use countries_kernel::domain::config::CountriesConfig;
///
/// let cfg: CountriesConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.flag_url.contains("{code}"));
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true));

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    debug!("Config loaded");
    Ok(config)
}
