use thiserror::Error;

pub type Result<T> = std::result::Result<T, BistError>;

#[derive(Debug, Error)]
pub enum BistError {
    #[error("register width must be at least 1")]
    ZeroWidth,
    #[error("{what} has length {actual}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{what}[{index}] = {value} is not a bit")]
    InvalidBit {
        what: &'static str,
        index: usize,
        value: u8,
    },
    #[error("unknown shift mode `{0}` (expected `1-to-m` or `m-to-1`)")]
    InvalidMode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config error: {0}")]
    Config(String),
}

impl From<String> for BistError {
    fn from(s: String) -> Self {
        BistError::Config(s)
    }
}
