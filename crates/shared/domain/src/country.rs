//! The [`Country`] value type.
//!
//! A country is identified by its uppercase ISO 3166-1 alpha-2 code. Everything else
//! (display name, IOC code, flag URL) is derived from the code through the static tables
//! in [`crate::data`] and [`crate::ioc`], so every accessor is a total function.

use crate::error::CountryError;
use crate::{data, ioc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Placeholder replaced by the lowercase code in flag URL templates.
pub const CODE_PLACEHOLDER: &str = "{code}";
/// Placeholder replaced by the uppercase code in flag URL templates.
pub const CODE_UPPER_PLACEHOLDER: &str = "{code_upper}";

/// A country identified by its two-letter code.
///
/// Equality, ordering and hashing only look at the uppercase code, and a `Country`
/// compares equal to any string holding the same code in either case. `Hash` matches
/// the hash of the code string and `Country: Borrow<str>`, so maps keyed by `Country`
/// can be queried with `&str`.
///
/// ```rust
/// use countries_domain::Country;
///
/// let nz = Country::new("nz").unwrap();
/// assert_eq!(nz, "NZ");
/// assert_eq!(nz.name(), "New Zealand");
/// assert_eq!(nz.flag("flags/{code}.gif"), "flags/nz.gif");
/// ```
///
/// [`Country::default`] is the blank country: it has an empty code, `len() == 0` and
/// stands for "no country selected". It can't be produced by [`Country::new`].
#[derive(Clone, Default)]
pub struct Country {
    code: String,
    flag_url: Option<String>,
}

impl Country {
    /// Builds a country from a code, uppercasing it.
    ///
    /// # Errors
    /// [`CountryError::InvalidArgument`] if `code` is empty or only whitespace.
    pub fn new(code: impl AsRef<str>) -> Result<Self, CountryError> {
        Ok(Self { code: normalize(code.as_ref())?, flag_url: None })
    }

    /// Builds a country carrying its own flag URL template.
    ///
    /// An empty `flag_url` is kept as given; it shows up in the [`fmt::Debug`] output but
    /// resolvers treat it like an unset template.
    ///
    /// # Errors
    /// [`CountryError::InvalidArgument`] if `code` is empty or only whitespace.
    pub fn with_flag_url(
        code: impl AsRef<str>,
        flag_url: impl Into<String>,
    ) -> Result<Self, CountryError> {
        Ok(Self { code: normalize(code.as_ref())?, flag_url: Some(flag_url.into()) })
    }

    /// The "no country selected" value.
    #[must_use]
    pub const fn blank() -> Self {
        Self { code: String::new(), flag_url: None }
    }

    /// Reverse lookup from an IOC code, ignoring case.
    ///
    /// Empty and unknown codes give `None`.
    #[must_use]
    pub fn country_from_ioc(ioc_code: &str) -> Option<Self> {
        let ioc_code = ioc_code.trim().to_ascii_uppercase();
        ioc::iso_code(&ioc_code)
            .map(|code| Self { code: code.to_owned(), flag_url: None })
    }

    /// The uppercase code; empty for the blank country.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The flag URL template attached at construction, if any.
    #[must_use]
    pub fn flag_url(&self) -> Option<&str> {
        self.flag_url.as_deref()
    }

    /// Display name, or the code itself when it isn't in the name table.
    #[must_use]
    pub fn name(&self) -> &str {
        data::name(&self.code).unwrap_or(self.code.as_str())
    }

    /// IOC code, or `""` when the country has no National Olympic Committee.
    #[must_use]
    pub fn ioc_code(&self) -> &'static str {
        ioc::ioc_code(&self.code).unwrap_or_default()
    }

    /// Whether the code is an assigned ISO 3166-1 code.
    #[must_use]
    pub fn is_known(&self) -> bool {
        data::contains(&self.code)
    }

    /// Substitutes the code into a flag URL template.
    ///
    /// `{code}` becomes the lowercase code and `{code_upper}` the uppercase one; any other
    /// text, including unknown placeholders, is copied verbatim. Relative results are
    /// returned as they are, resolving them is up to the caller.
    #[must_use]
    pub fn flag(&self, url_pattern: &str) -> String {
        let lower = self.code.to_ascii_lowercase();
        let mut out = String::with_capacity(url_pattern.len() + self.code.len());
        let mut rest = url_pattern;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            rest = &rest[start..];

            if let Some(tail) = rest.strip_prefix(CODE_UPPER_PLACEHOLDER) {
                out.push_str(&self.code);
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix(CODE_PLACEHOLDER) {
                out.push_str(&lower);
                rest = tail;
            } else {
                out.push('{');
                rest = &rest[1..];
            }
        }
        out.push_str(rest);
        out
    }

    /// Number of bytes in the code: 2 for a real country, 0 for the blank one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// `true` for the blank country.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Consumes the country, returning the uppercase code.
    #[must_use]
    pub fn into_code(self) -> String {
        self.code
    }
}

fn normalize(code: &str) -> Result<String, CountryError> {
    if code.trim().is_empty() {
        return Err(CountryError::InvalidArgument {
            message: "country code must not be blank".into(),
            context: None,
        });
    }
    Ok(code.to_ascii_uppercase())
}

// --- Equality & hashing ---

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Country {}

impl PartialEq<str> for Country {
    fn eq(&self, other: &str) -> bool {
        self.code.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for Country {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Country {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Country> for str {
    fn eq(&self, other: &Country) -> bool {
        other == self
    }
}

impl PartialEq<Country> for &str {
    fn eq(&self, other: &Country) -> bool {
        other == *self
    }
}

impl PartialEq<Country> for String {
    fn eq(&self, other: &Country) -> bool {
        other == self.as_str()
    }
}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.as_str().hash(state);
    }
}

impl Borrow<str> for Country {
    fn borrow(&self) -> &str {
        &self.code
    }
}

impl PartialOrd for Country {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Country {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl AsRef<str> for Country {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

// --- Formatting ---

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Constructor-style: `Country(code="NZ")`, plus `flag_url` only when one was supplied.
impl fmt::Debug for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country(code={:?}", self.code)?;
        if let Some(flag_url) = &self.flag_url {
            write!(f, ", flag_url={flag_url:?}")?;
        }
        f.write_str(")")
    }
}

// --- Conversions ---

impl FromStr for Country {
    type Err = CountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Country {
    type Error = CountryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Country {
    type Error = CountryError;

    fn try_from(mut value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Self::new(value);
        }
        value.make_ascii_uppercase();
        Ok(Self { code: value, flag_url: None })
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.code
    }
}

// --- Serde ---

impl Serialize for Country {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

/// Accepts a code string; `""` becomes the blank country.
impl<'de> Deserialize<'de> for Country {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        if code.is_empty() {
            return Ok(Self::blank());
        }
        Self::try_from(code).map_err(serde::de::Error::custom)
    }
}
