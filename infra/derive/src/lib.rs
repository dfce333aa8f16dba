#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the countries crates.
//! Currently this is a single attribute macro, [`macro@countries_error`], which keeps every
//! crate's error enum wired the same way (context, source conversions, variant kinds).
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! countries-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
/// * **Kinds**: Generates `fn kind(&self) -> &'static str` returning the variant name,
///   which is what the crates put into structured log fields.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must also carry the `context` field.
/// 4. Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use countries_derive::countries_error;
/// use std::borrow::Cow;
///
/// #[countries_error]
/// pub enum CountryError {
///     #[error("Invalid argument{}: {message}", format_context(.context))]
///     InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// let err = CountryError::from("boom");
/// assert_eq!(err.kind(), "Internal");
/// ```
#[proc_macro_attribute]
pub fn countries_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
