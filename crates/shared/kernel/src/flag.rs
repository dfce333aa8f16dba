//! Flag URL resolution.
//!
//! [`Country::flag`] only substitutes the code into a template. This module picks the
//! template and joins relative results onto the static asset base, the way a browser
//! resolves a relative reference against the page it appears on.

use countries_domain::Country;
use countries_domain::config::CountriesConfig;
use tracing::trace;

/// Resolves the flag URL of `country`.
///
/// The country's own non-empty template wins over `config.flag_url`; relative results
/// are joined onto `config.static_url`.
///
/// ```rust
/// use countries_kernel::domain::{Country, config::CountriesConfig};
/// use countries_kernel::flag::flag_url;
///
/// let nz = Country::new("NZ").unwrap();
/// assert_eq!(flag_url(&nz, &CountriesConfig::default()), "/static/flags/nz.gif");
/// ```
#[must_use]
pub fn flag_url(country: &Country, config: &CountriesConfig) -> String {
    let template =
        country.flag_url().filter(|t| !t.is_empty()).unwrap_or(config.flag_url.as_str());
    resolve_flag_url(country, template, &config.static_url)
}

/// Substitutes `country` into `template` and joins the result onto `static_url`.
///
/// The blank country has no flag and resolves to `""`.
#[must_use]
pub fn resolve_flag_url(country: &Country, template: &str, static_url: &str) -> String {
    if country.is_empty() {
        return String::new();
    }
    let url = join_static(static_url, &country.flag(template));
    trace!(code = country.code(), template, url = %url, "Resolved flag URL");
    url
}

/// Joins `url` onto `base`.
///
/// * absolute URLs (`https://…`) and network-path references (`//host/…`) are kept;
/// * absolute paths (`/img/…`) keep the base's scheme and host, if it has any;
/// * anything else replaces the last path segment of the base.
///
/// Dot segments are not collapsed.
#[must_use]
pub fn join_static(base: &str, url: &str) -> String {
    if url.is_empty() {
        return base.to_owned();
    }
    if has_scheme(url) || url.starts_with("//") {
        return url.to_owned();
    }

    let (origin, path) = split_origin(base);
    if url.starts_with('/') {
        return format!("{origin}{url}");
    }

    match path.rfind('/') {
        Some(idx) => format!("{origin}{}{url}", &path[..=idx]),
        None if !origin.is_empty() => format!("{origin}/{url}"),
        None => url.to_owned(),
    }
}

/// `scheme ":"` per RFC 3986: a letter followed by letters, digits, `+`, `-` or `.`.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Splits `scheme://authority` (or `//authority`) off the path; query and fragment are dropped.
fn split_origin(base: &str) -> (&str, &str) {
    let base = base.split(['?', '#']).next().unwrap_or_default();

    let authority_start = if has_scheme(base) {
        base.find("://").map(|idx| idx + 3)
    } else if base.starts_with("//") {
        Some(2)
    } else {
        None
    };

    let Some(start) = authority_start else {
        return ("", base);
    };
    let end = base[start..].find('/').map_or(base.len(), |idx| start + idx);
    base.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_urls_use_static_base() {
        assert_eq!(join_static("/static-assets/", "flags/nz.gif"), "/static-assets/flags/nz.gif");
        assert_eq!(
            join_static("/static-assets/css", "flags/nz.gif"),
            "/static-assets/flags/nz.gif"
        );
        assert_eq!(join_static("static", "flags/nz.gif"), "flags/nz.gif");
    }

    #[test]
    fn test_absolute_urls_are_kept() {
        assert_eq!(
            join_static("/static/", "https://flags.example.com/NZ.PNG"),
            "https://flags.example.com/NZ.PNG"
        );
        assert_eq!(
            join_static("/static/", "//flags.example.com/us.gif"),
            "//flags.example.com/us.gif"
        );
        assert_eq!(join_static("/static/", "/img/nz.gif"), "/img/nz.gif");
    }

    #[test]
    fn test_base_with_host() {
        assert_eq!(
            join_static("https://cdn.example.com/assets/", "flags/nz.gif"),
            "https://cdn.example.com/assets/flags/nz.gif"
        );
        assert_eq!(
            join_static("https://cdn.example.com", "flags/nz.gif"),
            "https://cdn.example.com/flags/nz.gif"
        );
        assert_eq!(
            join_static("https://cdn.example.com/assets/", "/nz.gif"),
            "https://cdn.example.com/nz.gif"
        );
        assert_eq!(join_static("//cdn.example.com/a/?v=1", "nz.gif"), "//cdn.example.com/a/nz.gif");
    }

    #[test]
    fn test_scheme_detection() {
        assert!(has_scheme("https://x"));
        assert!(has_scheme("data:image/gif;base64,AAAA"));
        assert!(!has_scheme("flags/{code}.gif"));
        assert!(!has_scheme("1http://x"));
        assert!(!has_scheme("img/a:b.gif"));
    }
}
