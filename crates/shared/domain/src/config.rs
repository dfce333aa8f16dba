use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Default flag template, relative to [`CountriesConfigInner::static_url`].
pub const DEFAULT_FLAG_URL: &str = "flags/{code}.gif";
/// Default base for relative asset URLs.
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// Settings shared by the field adapters and the shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CountriesConfigInner {
    /// Flag URL template with `{code}` / `{code_upper}` placeholders.
    pub flag_url: String,
    /// Base URL that relative flag URLs are resolved against.
    pub static_url: String,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into fields and forms.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct CountriesConfig {
    #[serde(flatten, default)]
    inner: Arc<CountriesConfigInner>,
}

impl Deref for CountriesConfig {
    type Target = CountriesConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CountriesConfig {
    fn deref_mut(&mut self) -> &mut CountriesConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging knobs, mapped onto the logger builder by the shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Module directives in `RUST_LOG` syntax, e.g. `countries_field=debug`.
    pub filter: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
}

// --- Default ---

impl Default for CountriesConfigInner {
    fn default() -> Self {
        Self {
            flag_url: DEFAULT_FLAG_URL.to_owned(),
            static_url: DEFAULT_STATIC_URL.to_owned(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            directory: None,
            json: false,
        }
    }
}
