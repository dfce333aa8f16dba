//! Facade crate for the country value type and its adapters.
//! Re-exports domain/kernel primitives and the optional field slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `countries` (the `field` feature is on by default).
//! - Build values with [`Country::new`], resolve flags through [`flag_url`].

pub use countries_domain as domain;
#[cfg(feature = "field")]
pub use countries_field as field;
pub use countries_kernel as kernel;

pub use countries_domain::config::CountriesConfig;
pub use countries_domain::{Country, CountryError};
pub use countries_kernel::config::load_config;
pub use countries_kernel::flag::flag_url;

/// Build-time enabled features (by Cargo feature).
pub const ENABLED: &[&str] = &[
    #[cfg(feature = "field")]
    "field",
];

#[must_use]
pub fn is_enabled(name: &str) -> bool {
    ENABLED.contains(&name)
}
