use http::StatusCode;
use thiserror::Error;

use crate::ResponseError;

/// Errors that can be turned into an externally visible HTTP error
///
/// The boundary layer only ever reads these three values, keeping raw
/// causes out of responses.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Stable machine-readable error code (e.g. `USER-00010020`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

impl HttpError for ResponseError {
    fn status_code(&self) -> StatusCode {
        Self::status_code(self)
    }

    fn error_type(&self) -> &str {
        self.error().code()
    }

    fn client_message(&self) -> String {
        self.error().message().to_owned()
    }
}

/// Errors raised while assembling a [`Catalog`](crate::Catalog)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A descriptor was registered with an empty code
    #[error("error code must not be empty (message: {message:?})")]
    EmptyCode { message: String },

    /// Two descriptors share the same code
    #[error("duplicate error code: {code}")]
    DuplicateCode { code: String },

    /// A configured status is not a valid HTTP status code
    #[error("invalid HTTP status {status} for error code {code}")]
    InvalidStatus { code: String, status: u16 },

    /// No fallback descriptor was chosen
    #[error("catalog has no fallback error code")]
    MissingFallback,

    /// The fallback code is not part of the catalog
    #[error("fallback error code is not in the catalog: {code}")]
    UnknownFallback { code: String },
}
