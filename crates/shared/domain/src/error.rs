use std::borrow::Cow;

/// The only caller-facing error of the domain: lookups never fail, construction can.
#[countries_derive::countries_error]
pub enum CountryError {
    /// A country was constructed from an empty or blank code.
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
