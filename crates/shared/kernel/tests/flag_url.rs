use countries_kernel::domain::Country;
use countries_kernel::domain::config::CountriesConfig;
use countries_kernel::flag::{flag_url, resolve_flag_url};

fn config(flag_url: &str, static_url: &str) -> CountriesConfig {
    let mut config = CountriesConfig::default();
    config.flag_url = flag_url.to_owned();
    config.static_url = static_url.to_owned();
    config
}

#[test]
fn default_template_under_static_base() {
    let nz = Country::new("NZ").unwrap();
    let config = config("flags/{code}.gif", "/static-assets/");

    assert_eq!(flag_url(&nz, &config), "/static-assets/flags/nz.gif");
}

#[test]
fn custom_relative_template() {
    let nz = Country::new("NZ").unwrap();
    let config = config("img/flag-{code_upper}.png", "/static-assets/");

    assert_eq!(flag_url(&nz, &config), "/static-assets/img/flag-NZ.png");
}

#[test]
fn custom_absolute_template() {
    let nz = Country::new("NZ").unwrap();
    let config = config("https://flags.example.com/{code_upper}.PNG", "/static-assets/");

    assert_eq!(flag_url(&nz, &config), "https://flags.example.com/NZ.PNG");
}

#[test]
fn country_template_overrides_config() {
    let us = Country::with_flag_url("US", "//flags.example.com/{code}.gif").unwrap();

    assert_eq!(flag_url(&us, &CountriesConfig::default()), "//flags.example.com/us.gif");
}

#[test]
fn empty_country_template_falls_back_to_config() {
    let us = Country::with_flag_url("US", "").unwrap();

    assert_eq!(flag_url(&us, &CountriesConfig::default()), "/static/flags/us.gif");
}

#[test]
fn explicit_template_resolution() {
    let au = Country::new("au").unwrap();

    assert_eq!(
        resolve_flag_url(&au, "{code}.svg", "https://cdn.example.com/flags/"),
        "https://cdn.example.com/flags/au.svg"
    );
}

#[test]
fn blank_country_has_no_flag() {
    let blank = Country::blank();

    assert_eq!(flag_url(&blank, &CountriesConfig::default()), "");
    assert_eq!(resolve_flag_url(&blank, "https://flags.example.com/{code}.gif", "/static/"), "");
}
