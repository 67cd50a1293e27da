use crate::core::db::{DbError, ParseHoursError};

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("{input} is not a valid number")]
    InvalidNumber { input: String },
    #[error("{input} is not a valid decimal number: {source}")]
    InvalidDecimal {
        input: String,
        #[source]
        source: ParseHoursError,
    },
    #[error("input is not valid UTF-8")]
    InvalidEncoding,
    #[error("Project name is required")]
    NameRequired,
    #[error("Please select a project")]
    SelectionRequired,
    #[error(transparent)]
    Persistence(#[from] DbError),
    #[error("input stream closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Fatal errors end the session; everything else is reported and the menu continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConsoleError::InputClosed | ConsoleError::Io(_))
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
