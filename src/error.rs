use std::fmt;

#[derive(Debug)]
pub enum Error {
    Oracle(String),
    RecordLookup(String),
    RecordNotFound(String),
    RecordUpdate(String),
    Format(String),
    Credential(String),
    Config(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Oracle(msg) => write!(f, "IP oracle error: {msg}"),
            Error::RecordLookup(msg) => write!(f, "Record lookup error: {msg}"),
            Error::RecordNotFound(msg) => write!(f, "Record not found: {msg}"),
            Error::RecordUpdate(msg) => write!(f, "Record update error: {msg}"),
            Error::Format(msg) => write!(f, "Comment format error: {msg}"),
            Error::Credential(msg) => write!(f, "Credential error: {msg}"),
            Error::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}
