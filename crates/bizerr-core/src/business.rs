use std::borrow::Cow;

use http::StatusCode;

/// Descriptor for one class of business failure
///
/// Descriptors are usually declared as constants or loaded once into a
/// [`Catalog`](crate::Catalog). The `code` is the stable, machine-readable
/// identifier exposed to API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BusinessError {
    status: Option<StatusCode>,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl BusinessError {
    /// Declare a descriptor with an explicit HTTP status
    pub const fn new(status: StatusCode, code: &'static str, message: &'static str) -> Self {
        Self {
            status: Some(status),
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
        }
    }

    /// Declare a descriptor that leaves the HTTP status unset
    ///
    /// The boundary reports these as `500 Internal Server Error`.
    pub const fn without_status(code: &'static str, message: &'static str) -> Self {
        Self {
            status: None,
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
        }
    }

    /// Build a descriptor from runtime values, e.g. a configuration file
    pub fn owned(status: Option<StatusCode>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: Cow::Owned(code.into()),
            message: Cow::Owned(message.into()),
        }
    }

    /// Configured HTTP status, `None` when unset
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message safe to show to API consumers
    pub fn message(&self) -> &str {
        &self.message
    }
}
