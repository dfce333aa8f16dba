use countries_domain::{Country, CountryError};
use proptest::prelude::*;
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

#[test]
fn equals_code_strings() {
    let country = Country::new("NZ").unwrap();

    assert_eq!(country, "NZ");
    assert_eq!(country, "nz");
    assert_eq!(country, String::from("Nz"));
    assert_eq!("NZ", country);
    assert_ne!(country, "ZZ");
}

#[test]
fn flag_url_is_ignored_by_equality() {
    let plain = Country::new("NL").unwrap();
    let flagged = Country::with_flag_url("nl", "//flags.example.com/{code}.gif").unwrap();

    assert_eq!(plain, flagged);
}

#[test]
fn hash_matches_code_string() {
    let country = Country::with_flag_url("XX", "").unwrap();
    let state = RandomState::new();

    assert_eq!(state.hash_one(&country), state.hash_one("XX"));
}

#[test]
fn display_is_bare_code() {
    let country = Country::new("nz").unwrap();
    assert_eq!(country.to_string(), "NZ");
}

#[test]
fn debug_omits_default_flag_url() {
    let implicit = Country::new("XX").unwrap();
    let explicit = Country::with_flag_url("XX", "").unwrap();

    assert_eq!(format!("{implicit:?}"), r#"Country(code="XX")"#);
    assert_eq!(format!("{explicit:?}"), r#"Country(code="XX", flag_url="")"#);
}

#[test]
fn no_blank_code() {
    let err = Country::with_flag_url("", "").unwrap_err();

    assert!(matches!(err, CountryError::InvalidArgument { .. }));
    assert_eq!(err.kind(), "InvalidArgument");
}

#[test]
fn blank_country_is_empty() {
    let blank = Country::default();

    assert!(blank.is_empty());
    assert_eq!(blank.len(), 0);
    assert_eq!(blank, "");

    let nz = Country::new("NZ").unwrap();
    assert!(!nz.is_empty());
    assert_eq!(nz.len(), 2);
}

#[test]
fn name_lookup() {
    assert_eq!(Country::new("NZ").unwrap().name(), "New Zealand");
    assert_eq!(Country::new("ax").unwrap().name(), "Åland Islands");
    assert_eq!(Country::new("XX").unwrap().name(), "XX");
    assert!(!Country::new("XX").unwrap().is_known());
}

#[test]
fn ioc_code() {
    assert_eq!(Country::with_flag_url("NL", "").unwrap().ioc_code(), "NED");
    assert_eq!(Country::new("AQ").unwrap().ioc_code(), "");
    assert_eq!(Country::new("XX").unwrap().ioc_code(), "");
}

#[test]
fn country_from_ioc_code() {
    let country = Country::country_from_ioc("NED");
    assert_eq!(country, Some(Country::with_flag_url("NL", "").unwrap()));
    assert_eq!(Country::country_from_ioc("ned"), Some(Country::new("NL").unwrap()));
}

#[test]
fn country_from_blank_or_unknown_ioc_code() {
    assert!(Country::country_from_ioc("").is_none());
    assert!(Country::country_from_ioc("XXX").is_none());
}

#[test]
fn serde_uses_bare_code() {
    let country = Country::new("nz").unwrap();
    assert_eq!(serde_json::to_string(&country).unwrap(), r#""NZ""#);

    let parsed: Country = serde_json::from_str(r#""au""#).unwrap();
    assert_eq!(parsed, "AU");

    let blank: Country = serde_json::from_str(r#""""#).unwrap();
    assert!(blank.is_empty());

    assert!(serde_json::from_str::<Country>(r#""  ""#).is_err());
}

proptest! {
    #[test]
    fn equality_ignores_case(code in "[a-zA-Z]{2}") {
        let country = Country::new(&code).unwrap();

        prop_assert_eq!(country.code(), code.to_uppercase());
        prop_assert!(country == code.to_uppercase());
        prop_assert!(country == code.to_lowercase());
    }

    #[test]
    fn hash_follows_uppercase_code(code in "[a-zA-Z]{2}") {
        let country = Country::new(&code).unwrap();
        let state = RandomState::new();

        prop_assert_eq!(state.hash_one(&country), state.hash_one(code.to_uppercase()));
    }

    #[test]
    fn ioc_round_trip(index in 0..countries_domain::ioc::IOC_CODES.len()) {
        let (iso, ioc) = countries_domain::ioc::IOC_CODES[index];
        let country = Country::new(iso).unwrap();

        prop_assert_eq!(country.ioc_code(), ioc);
        prop_assert_eq!(Country::country_from_ioc(ioc), Some(country));
    }
}
