use countries_derive::countries_error;

#[countries_error]
pub enum StoreError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
