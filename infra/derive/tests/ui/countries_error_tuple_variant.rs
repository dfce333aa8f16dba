use countries_derive::countries_error;

#[countries_error]
pub enum LookupError {
    Unknown(String),
}

fn main() {}
