//! # Domain Models
//!
//! The [`Country`] value type and the static tables it reads from.
//! Keep it lean: no I/O and no logging, just data and total lookups.
//!
//! * [`data`]: ISO 3166-1 alpha-2 code → English name.
//! * [`ioc`]: alpha-2 code ↔ IOC code.
//! * [`config`]: settings consumed by the field adapters.

pub mod config;
mod country;
pub mod data;
mod error;
pub mod ioc;

pub use crate::country::{CODE_PLACEHOLDER, CODE_UPPER_PLACEHOLDER, Country};
pub use crate::error::{CountryError, CountryErrorExt};
