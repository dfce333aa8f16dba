use countries_derive::countries_error;
use std::borrow::Cow;

#[countries_error]
pub enum LookupError {
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown code{}: {code}", format_context(.context))]
    Unknown { code: String, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = LookupError::Unknown { code: "ZZ".to_owned(), context: None };
    assert_eq!(err.kind(), "Unknown");

    let err: Result<(), LookupError> =
        Err(LookupError::InvalidArgument { message: "empty".into(), context: None });
    let err = err.context("parsing").unwrap_err();
    assert_eq!(err.kind(), "InvalidArgument");
    assert_eq!(err.to_string(), "Invalid argument (parsing): empty");
}
