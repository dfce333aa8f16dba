//! Query adapter: normalizes filter values and matches them against stored codes.

use crate::field::FieldInput;
use fxhash::FxHashSet;
use tracing::trace;

/// A filter on a country column.
///
/// Values may be countries or code strings in any case; they are compared against the
/// stored uppercase code. `exact(None)` becomes an `IS NULL` test.
///
/// ```rust
/// use countries_domain::Country;
/// use countries_field::CountryLookup;
///
/// let by_code = CountryLookup::exact("nz");
/// let by_country = CountryLookup::exact(Country::new("NZ").unwrap());
/// assert_eq!(by_code, by_country);
/// assert!(by_code.matches(Some("NZ")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryLookup {
    Exact(String),
    In(FxHashSet<String>),
    IsNull,
}

impl CountryLookup {
    #[must_use]
    pub fn exact(value: impl Into<FieldInput>) -> Self {
        normalize(value.into()).map_or(Self::IsNull, Self::Exact)
    }

    /// Matches any of `values`; null entries are skipped.
    #[must_use]
    pub fn in_<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldInput>,
    {
        Self::In(values.into_iter().filter_map(|v| normalize(v.into())).collect())
    }

    #[must_use]
    pub const fn is_null() -> Self {
        Self::IsNull
    }

    /// Tests a stored column value.
    #[must_use]
    pub fn matches(&self, stored: Option<&str>) -> bool {
        match (self, stored) {
            (Self::IsNull, stored) => stored.is_none(),
            (_, None) => false,
            (Self::Exact(code), Some(stored)) => code == stored,
            (Self::In(codes), Some(stored)) => codes.contains(stored),
        }
    }

    /// Keeps the rows whose column (read through `column`) matches.
    pub fn filter<T, I, F>(&self, rows: I, column: F) -> impl Iterator<Item = T>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> Option<&str>,
    {
        trace!(lookup = ?self, "Filtering rows");
        rows.into_iter().filter(move |row| self.matches(column(row)))
    }
}

fn normalize(value: FieldInput) -> Option<String> {
    match value {
        FieldInput::Null => None,
        FieldInput::Code(mut code) => {
            code.make_ascii_uppercase();
            Some(code)
        }
        FieldInput::Country(country) => Some(country.into_code()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries_domain::Country;

    #[test]
    fn test_null_lookup() {
        assert_eq!(CountryLookup::exact(None::<&str>), CountryLookup::IsNull);
        assert!(CountryLookup::is_null().matches(None));
        assert!(!CountryLookup::is_null().matches(Some("")));
    }

    #[test]
    fn test_blank_lookup_matches_empty_column() {
        let lookup = CountryLookup::exact(Country::blank());
        assert!(lookup.matches(Some("")));
        assert!(!lookup.matches(Some("NZ")));
        assert!(!lookup.matches(None));
    }

    #[test]
    fn test_in_lookup() {
        let lookup = CountryLookup::in_(["nz", "AU"]);
        assert!(lookup.matches(Some("NZ")));
        assert!(lookup.matches(Some("AU")));
        assert!(!lookup.matches(Some("US")));

        let mixed = CountryLookup::in_([Some(Country::new("us").unwrap()), None]);
        assert_eq!(mixed, CountryLookup::In(std::iter::once("US".to_owned()).collect()));
    }
}
