use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Messages from the response's `errors` array, joined
    #[error("{0}")]
    GraphQl(String),

    #[error("response carried no data for {0}")]
    MissingData(&'static str),

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("unknown form field '{0}'")]
    UnknownField(String),
}
