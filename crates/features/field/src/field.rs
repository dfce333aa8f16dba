//! Model field adapter: converts between stored codes and [`Country`] values.

use crate::error::{FieldError, FieldErrorExt};
use crate::form::CountryFormField;
use countries_domain::Country;
use countries_domain::config::CountriesConfig;
use countries_kernel::flag;
use std::borrow::Cow;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Column width of a stored country code.
pub const MAX_LENGTH: usize = 2;

/// A value being assigned to a country field.
///
/// Host code usually doesn't name this type: anything convertible into it
/// (`Country`, `&str`, `String`, `Option<_>` of those) is accepted by
/// [`CountryField::to_storage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Null,
    Code(String),
    Country(Country),
}

impl From<Country> for FieldInput {
    fn from(country: Country) -> Self {
        Self::Country(country)
    }
}

impl From<&Country> for FieldInput {
    fn from(country: &Country) -> Self {
        Self::Country(country.clone())
    }
}

impl From<&str> for FieldInput {
    fn from(code: &str) -> Self {
        Self::Code(code.to_owned())
    }
}

impl From<String> for FieldInput {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A model field holding a two-letter country code.
///
/// Reads produce `Option<Country>`: `None` for a null column, the blank country for an
/// empty one. Writes accept countries, code strings or null.
///
/// ```rust
/// use countries_field::CountryField;
///
/// let field = CountryField::builder().name("country").build();
/// assert_eq!(field.to_storage("nz").unwrap().as_deref(), Some("NZ"));
/// assert!(field.to_storage(None::<&str>).is_err());
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct CountryField {
    /// Field name, used in error messages.
    #[builder(setter(into))]
    name: Cow<'static, str>,
    /// Whether the column accepts null.
    #[builder(default)]
    null: bool,
    /// Whether forms accept an empty selection.
    #[builder(default)]
    blank: bool,
    /// Flag template for countries read through this field.
    #[builder(default, setter(strip_option, into))]
    flag_url: Option<String>,
}

impl CountryField {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.null
    }

    #[must_use]
    pub const fn is_blankable(&self) -> bool {
        self.blank
    }

    #[must_use]
    pub fn flag_url(&self) -> Option<&str> {
        self.flag_url.as_deref()
    }

    /// Builds the value a model sees for a stored column.
    ///
    /// The returned country carries this field's flag template.
    #[must_use]
    pub fn from_storage(&self, stored: Option<&str>) -> Option<Country> {
        let code = stored?;
        if code.is_empty() {
            return Some(Country::blank());
        }

        let country = match &self.flag_url {
            Some(flag_url) => Country::with_flag_url(code, flag_url.as_str()),
            None => Country::new(code),
        };
        // Only whitespace codes fail here; they are read back as blank.
        Some(country.unwrap_or_else(|err| {
            debug!(field = %self.name, stored = code, kind = err.kind(), "Unreadable stored code");
            Country::blank()
        }))
    }

    /// Converts an assigned value into what gets stored.
    ///
    /// Codes are uppercased, the blank country is stored as `""` and null as `None`.
    ///
    /// # Errors
    /// * [`FieldError::NotNull`] for null on a non-nullable field.
    /// * [`FieldError::Country`] for a code made of whitespace.
    /// * [`FieldError::TooLong`] for codes longer than [`MAX_LENGTH`].
    pub fn to_storage(&self, value: impl Into<FieldInput>) -> Result<Option<String>, FieldError> {
        let code = match value.into() {
            FieldInput::Null if self.null => return Ok(None),
            FieldInput::Null => {
                debug!(field = %self.name, "Null written to a non-nullable field");
                return Err(FieldError::NotNull { field: self.name.clone(), context: None });
            }
            FieldInput::Code(code) if code.is_empty() => code,
            FieldInput::Code(code) => Country::try_from(code)
                .map(Country::into_code)
                .context(format!("assigning to '{}'", self.name))?,
            FieldInput::Country(country) => country.into_code(),
        };

        if code.chars().count() > MAX_LENGTH {
            return Err(FieldError::TooLong { value: code, max_length: MAX_LENGTH, context: None });
        }

        trace!(field = %self.name, code = %code, "Storing country code");
        Ok(Some(code))
    }

    /// Assignment: what a model holds after `value` is written and read back.
    ///
    /// # Errors
    /// Same as [`CountryField::to_storage`].
    pub fn assign(&self, value: impl Into<FieldInput>) -> Result<Option<Country>, FieldError> {
        let stored = self.to_storage(value)?;
        Ok(self.from_storage(stored.as_deref()))
    }

    /// Model-level validation of a held value.
    ///
    /// # Errors
    /// * [`FieldError::NotNull`] for `None` on a non-nullable field.
    /// * [`FieldError::Required`] for the blank country on a non-blankable field.
    /// * [`FieldError::InvalidChoice`] for codes missing from the country table.
    pub fn validate(&self, value: Option<&Country>) -> Result<(), FieldError> {
        match value {
            None if self.null => Ok(()),
            None => Err(FieldError::NotNull { field: self.name.clone(), context: None }),
            Some(country) if country.is_empty() => {
                if self.blank {
                    Ok(())
                } else {
                    Err(FieldError::Required { field: self.name.clone(), context: None })
                }
            }
            Some(country) if !country.is_known() => {
                Err(FieldError::InvalidChoice { value: country.code().to_owned(), context: None })
            }
            Some(_) => Ok(()),
        }
    }

    /// Flag URL of `country` as shown through this field.
    ///
    /// The field's own template wins; otherwise the country's, then the configured one.
    #[must_use]
    pub fn flag(&self, country: &Country, config: &CountriesConfig) -> String {
        match &self.flag_url {
            Some(template) => flag::resolve_flag_url(country, template, &config.static_url),
            None => flag::flag_url(country, config),
        }
    }

    /// The form field presenting this model field.
    #[must_use]
    pub fn formfield(&self) -> CountryFormField {
        CountryFormField::new(self.clone())
    }
}
