use std::io;

#[derive(thiserror::Error, Debug)]
pub enum DeplistError {
    #[error("input error: {0}")]
    Input(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout")]
    Timeout,
    #[error("http error: {0}")]
    Http(String),
    #[error("unknown wordlist: {0}")]
    UnknownWordlist(String),
    #[error("unknown error")]
    Unknown,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for DeplistError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DeplistError::Timeout
        } else if err.is_connect() {
            DeplistError::Network(err.to_string())
        } else if err.is_status() {
            DeplistError::Http(err.to_string())
        } else if err.is_builder() {
            DeplistError::Config(err.to_string())
        } else {
            DeplistError::Unknown
        }
    }
}
