//! Form adapter: the selectable choice list and parsing of submitted codes.

use crate::error::FieldError;
use crate::field::CountryField;
use countries_domain::{Country, data};
use deunicode::deunicode;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

/// Label of the empty option shown for blank-able fields.
pub const BLANK_LABEL: &str = "---------";

/// One `<option>` of a country select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub code: &'static str,
    pub name: &'static str,
}

/// All countries ordered by name, transliterated so "Åland Islands" sorts with the A's.
static SORTED_CHOICES: LazyLock<Vec<Choice>> = LazyLock::new(|| {
    let mut choices: Vec<_> = data::COUNTRIES
        .iter()
        .map(|&(code, name)| (deunicode(name).to_lowercase(), Choice { code, name }))
        .collect();
    choices.sort_by(|a, b| a.0.cmp(&b.0));
    choices.into_iter().map(|(_, choice)| choice).collect()
});

/// Form counterpart of a [`CountryField`].
#[derive(Debug, Clone)]
pub struct CountryFormField {
    field: CountryField,
}

impl CountryFormField {
    #[must_use]
    pub const fn new(field: CountryField) -> Self {
        Self { field }
    }

    /// `(code, name)` options sorted by name, led by a blank option when the field is blank-able.
    #[must_use]
    pub fn choices(&self) -> Vec<Choice> {
        let blank = self.field.is_blankable().then_some(Choice { code: "", name: BLANK_LABEL });
        blank.into_iter().chain(SORTED_CHOICES.iter().copied()).collect()
    }

    /// Parses a submitted code.
    ///
    /// An empty submission is `None` on nullable fields and the blank country otherwise.
    ///
    /// # Errors
    /// * [`FieldError::Required`] for an empty submission on a non-blankable field.
    /// * [`FieldError::InvalidChoice`] for codes missing from the country table.
    pub fn clean(&self, raw: &str) -> Result<Option<Country>, FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            if !self.field.is_blankable() {
                return Err(FieldError::Required {
                    field: self.field.name().to_owned().into(),
                    context: None,
                });
            }
            return Ok((!self.field.is_nullable()).then(Country::blank));
        }

        let country = self.field.from_storage(Some(raw)).filter(Country::is_known);
        let Some(country) = country else {
            debug!(field = self.field.name(), value = raw, "Rejected form choice");
            return Err(FieldError::InvalidChoice { value: raw.to_owned(), context: None });
        };
        Ok(Some(country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_are_sorted_by_name() {
        let form = CountryField::builder().name("country").build().formfield();
        let choices = form.choices();

        assert_eq!(choices.len(), data::COUNTRIES.len());
        assert_eq!(choices[0], Choice { code: "AF", name: "Afghanistan" });
        assert_eq!(choices[1].code, "AX");
        assert_eq!(choices[2].code, "AL");
    }

    #[test]
    fn test_choices_serialize_as_objects() {
        let choice = Choice { code: "NZ", name: "New Zealand" };
        assert_eq!(
            serde_json::to_value(choice).unwrap(),
            serde_json::json!({ "code": "NZ", "name": "New Zealand" })
        );
    }
}
