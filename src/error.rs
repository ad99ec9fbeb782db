
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatalectError {
    #[error("unrecognized token {token} (charCode: {char_code})")]
    Lexical { token: char, char_code: u32 },
    #[error("could not parse term {term}")]
    Parse { term: String },
}

pub type Result<T> = std::result::Result<T, DatalectError>;
