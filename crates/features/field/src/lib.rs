//! Country field slice: adapters between a host model layer and [`Country`] values.
//!
//! * [`CountryField`]: reads stored codes into countries and validates writes.
//! * [`CountryLookup`]: filter values compared against stored codes.
//! * [`CountryFormField`]: the choice list and parsing of submitted codes.
//!
//! None of these touch a database; they only define the conversions a host ORM or form
//! library calls into.
//!
//! [`Country`]: countries_domain::Country

mod error;
mod field;
mod form;
mod lookup;

pub use crate::error::{FieldError, FieldErrorExt};
pub use crate::field::{CountryField, FieldInput, MAX_LENGTH};
pub use crate::form::{BLANK_LABEL, Choice, CountryFormField};
pub use crate::lookup::CountryLookup;
