use http::{HeaderValue, StatusCode, header};

use crate::{BusinessError, Cause, HttpError, resolve};

/// Status, code and message reported to an external caller
///
/// Built once per failed request at the outermost layer. Only descriptor
/// data ends up here; the raw cause chain is logged and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    status: StatusCode,
    code: String,
    message: String,
}

impl ErrorResponse {
    /// Resolve `err` and keep only what is safe to expose
    ///
    /// The full chain is logged at `warn` level before being discarded.
    pub fn from_error(err: Option<Cause>, fallback: &BusinessError) -> Self {
        if let Some(ref cause) = err {
            tracing::warn!(error = %cause, "request failed");
        }

        Self::from_http_error(&resolve(err, fallback))
    }

    /// Build from any [`HttpError`]
    pub fn from_http_error(error: &impl HttpError) -> Self {
        Self {
            status: error.status_code(),
            code: error.error_type().to_owned(),
            message: error.client_message(),
        }
    }

    /// HTTP status to send
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Client-facing message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// JSON error body
    pub fn body(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        })
    }

    /// Convert into an `http` response with a JSON body
    pub fn into_http(self) -> http::Response<String> {
        let mut response = http::Response::new(self.body().to_string());
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    }
}
