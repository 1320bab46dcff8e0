use std::{borrow::Cow, error::Error as StdError, fmt, sync::Arc};

use thiserror::Error;

use crate::BusinessError;

/// Placeholder rendered when a layer has no cause
const NIL_CAUSE: &str = "<nil>";

/// A business classification layered on top of an optional cause
///
/// Each layer records "this business failure happened because of `cause`".
/// Values are immutable once built; reclassifying means wrapping again.
#[derive(Debug, Clone)]
pub struct ResponseError {
    error: BusinessError,
    cause: Option<Cause>,
}

impl ResponseError {
    /// Pair a descriptor with the cause it classifies
    pub const fn new(error: BusinessError, cause: Option<Cause>) -> Self {
        Self { error, cause }
    }

    /// Descriptor attached to this layer
    pub const fn error(&self) -> &BusinessError {
        &self.error
    }

    /// Underlying cause, if any
    pub const fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Wrap this error in an outer, usually more generic, classification
    #[must_use]
    pub fn reclassify(self, error: BusinessError) -> Self {
        Self::new(error, Some(Cause::from(self)))
    }

    /// Innermost classified layer reachable from this one
    ///
    /// Returns `self` when no deeper layer carries a classification.
    pub fn innermost(&self) -> &Self {
        self.cause.as_ref().and_then(Cause::classification).unwrap_or(self)
    }

    /// HTTP status to report, `500` when the descriptor leaves it unset
    pub fn status_code(&self) -> http::StatusCode {
        self.error.status().unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Split into descriptor and cause
    pub fn into_parts(self) -> (BusinessError, Option<Cause>) {
        (self.error, self.cause)
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ResponseError code: '{}', message: '{}', cause: (",
            self.error.code(),
            self.error.message()
        )?;

        match &self.cause {
            Some(cause) => write!(f, "{cause}")?,
            None => f.write_str(NIL_CAUSE)?,
        }

        f.write_str(")>")
    }
}

impl StdError for ResponseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// One link in a cause chain
#[derive(Debug, Clone, Error)]
pub enum Cause {
    /// A lower layer that already classified the failure
    #[error(transparent)]
    Response(Arc<ResponseError>),

    /// Free-form annotation around another cause
    #[error("{context}: ({source})")]
    Context {
        context: Cow<'static, str>,
        source: Box<Cause>,
    },

    /// Any other error, terminal for classification purposes
    #[error(transparent)]
    Opaque(Arc<dyn StdError + Send + Sync>),
}

impl Cause {
    /// Wrap an arbitrary error as an unclassified leaf
    pub fn opaque<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Opaque(Arc::new(error))
    }

    /// Build an unclassified leaf from a plain message
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::from(anyhow::Error::msg(message))
    }

    /// Annotate this cause without classifying it
    #[must_use]
    pub fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// This link as a classified layer, if it is one
    pub fn as_response(&self) -> Option<&ResponseError> {
        match self {
            Self::Response(response) => Some(response.as_ref()),
            Self::Context { .. } | Self::Opaque(_) => None,
        }
    }

    /// Next link towards the root cause
    ///
    /// Opaque errors end the chain even when they have their own `source`.
    pub fn inner(&self) -> Option<&Self> {
        match self {
            Self::Response(response) => ResponseError::cause(response),
            Self::Context { source, .. } => Some(source.as_ref()),
            Self::Opaque(_) => None,
        }
    }

    /// Iterate this link and every link below it
    pub const fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Innermost classified layer in the chain starting here
    pub fn classification(&self) -> Option<&ResponseError> {
        self.chain().filter_map(Self::as_response).last()
    }
}

impl From<ResponseError> for Cause {
    fn from(error: ResponseError) -> Self {
        Self::Response(Arc::new(error))
    }
}

impl From<anyhow::Error> for Cause {
    fn from(error: anyhow::Error) -> Self {
        let boxed: Box<dyn StdError + Send + Sync> = error.into();
        Self::Opaque(Arc::from(boxed))
    }
}

/// Iterator over the links of a cause chain, outermost first
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Cause>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Cause;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner();
        Some(current)
    }
}

/// Classify `cause` with `error`
pub const fn wrap(error: BusinessError, cause: Option<Cause>) -> ResponseError {
    ResponseError::new(error, cause)
}

/// Diagnostic rendering of a classified error and its full cause chain
///
/// Intended for logs only, never for decisions.
pub fn render(error: &ResponseError) -> String {
    error.to_string()
}
