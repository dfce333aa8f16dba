use countries_domain::CountryError;
use std::borrow::Cow;

/// Errors raised while converting values between models, storage and forms.
#[countries_derive::countries_error]
pub enum FieldError {
    /// Null written to a column that does not allow it.
    #[error("Field '{field}' cannot be null{}", format_context(.context))]
    NotNull { field: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A blank value where the field requires a country.
    #[error("Field '{field}' is required{}", format_context(.context))]
    Required { field: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A code that is not in the country table.
    #[error(
        "Select a valid choice{}: '{value}' is not one of the available choices",
        format_context(.context)
    )]
    InvalidChoice { value: String, context: Option<Cow<'static, str>> },

    /// A code longer than the column allows.
    #[error("Value '{value}' exceeds {max_length} characters{}", format_context(.context))]
    TooLong { value: String, max_length: usize, context: Option<Cow<'static, str>> },

    /// The value could not be turned into a [`countries_domain::Country`].
    #[error("Invalid country{}: {source}", format_context(.context))]
    Country { source: CountryError, context: Option<Cow<'static, str>> },
}
