use thiserror::Error;

/// Errors raised while assembling or validating client configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("access token cannot be empty")]
    EmptyAccessToken,

    #[error("invalid account id: {id}")]
    InvalidAccountId { id: String },

    #[error("invalid api version: {version}")]
    InvalidApiVersion { version: String },

    #[error("invalid host url: {url}")]
    InvalidHost { url: String },

    #[error("missing required configuration field: {field}")]
    MissingRequiredField { field: &'static str },
}
