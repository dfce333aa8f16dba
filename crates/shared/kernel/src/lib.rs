//! Kernel utilities shared by the field adapters and the shell.
//! Keep this crate lightweight: config loading and flag URL resolution, nothing stateful.
//!
//! ## Flag URLs
//! ```rust
//! # use countries_kernel::domain::{Country, config::CountriesConfig};
//! let mut config = CountriesConfig::default();
//! config.static_url = "/static-assets/".to_owned();
//!
//! let nz = Country::new("nz").unwrap();
//! assert_eq!(countries_kernel::flag::flag_url(&nz, &config), "/static-assets/flags/nz.gif");
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use countries_kernel::config::load_config;
//! use countries_kernel::domain::config::CountriesConfig;
//!
//! let cfg: CountriesConfig = load_config(Some("config/countries.toml"))?;
//! ```
pub mod config;
pub mod flag;

pub use countries_domain as domain;
