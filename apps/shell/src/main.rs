#![allow(clippy::print_stdout)]

mod args;

use crate::args::{Cli, Command};
use anyhow::{Context, bail};
use clap::Parser;
use countries::field::CountryField;
use countries::{CountriesConfig, Country, flag_url, load_config};
use countries_logger::Logger;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: CountriesConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder(env!("CARGO_BIN_NAME")).with_config(&cfg.log)?.init()?;

    match cli.command {
        Command::Show { code } => show(&code, &cfg)?,
        Command::Ioc { code } => ioc(&code, &cfg)?,
        Command::Choices { blank, json } => choices(blank, json)?,
    }

    Ok(())
}

fn show(code: &str, cfg: &CountriesConfig) -> anyhow::Result<()> {
    let country = Country::new(code)?;
    if !country.is_known() {
        debug!(code = %country, "Code is not in the country table");
    }
    print_country(&country, cfg);
    Ok(())
}

fn ioc(code: &str, cfg: &CountriesConfig) -> anyhow::Result<()> {
    let Some(country) = Country::country_from_ioc(code) else {
        bail!("Unknown IOC code '{code}'");
    };
    print_country(&country, cfg);
    Ok(())
}

fn print_country(country: &Country, cfg: &CountriesConfig) {
    println!("code:  {country}");
    println!("name:  {}", country.name());
    println!("ioc:   {}", country.ioc_code());
    println!("flag:  {}", flag_url(country, cfg));
}

fn choices(blank: bool, json: bool) -> anyhow::Result<()> {
    let field = CountryField::builder().name("country").blank(blank).build();
    let choices = field.formfield().choices();

    if json {
        println!("{}", serde_json::to_string_pretty(&choices)?);
    } else {
        for choice in choices {
            println!("{:<2}  {}", choice.code, choice.name);
        }
    }
    Ok(())
}
