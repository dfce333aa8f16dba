use countries_domain::Country;
use countries_field::{BLANK_LABEL, Choice, CountryField, FieldError};

#[test]
fn choices_come_from_the_name_table() {
    let form = CountryField::builder().name("country").build().formfield();
    let choices = form.choices();

    assert_eq!(choices.len(), countries_domain::data::COUNTRIES.len());
    assert!(choices.contains(&Choice { code: "NZ", name: "New Zealand" }));
    assert!(choices.iter().all(|c| !c.code.is_empty()));
}

#[test]
fn blankable_field_leads_with_empty_choice() {
    let form = CountryField::builder().name("country").blank(true).build().formfield();
    let choices = form.choices();

    assert_eq!(choices[0], Choice { code: "", name: BLANK_LABEL });
    assert_eq!(choices.len(), countries_domain::data::COUNTRIES.len() + 1);
}

#[test]
fn clean_parses_selected_code() {
    let form = CountryField::builder()
        .name("country")
        .flag_url("flags/{code_upper}.png")
        .build()
        .formfield();

    let country = form.clean("nz").unwrap().expect("selected");
    assert_eq!(country, Country::new("NZ").unwrap());
    assert_eq!(country.flag_url(), Some("flags/{code_upper}.png"));
}

#[test]
fn clean_rejects_unknown_codes() {
    let form = CountryField::builder().name("country").build().formfield();

    let err = form.clean("ZZ").unwrap_err();
    assert!(matches!(err, FieldError::InvalidChoice { ref value, .. } if value == "ZZ"));
}

#[test]
fn clean_empty_submission() {
    let required = CountryField::builder().name("country").build().formfield();
    assert!(matches!(required.clean(""), Err(FieldError::Required { .. })));

    let blankable = CountryField::builder().name("country").blank(true).build().formfield();
    assert_eq!(blankable.clean(" ").unwrap(), Some(Country::blank()));

    let nullable =
        CountryField::builder().name("country").blank(true).null(true).build().formfield();
    assert_eq!(nullable.clean("").unwrap(), None);
}
