//! Descriptor fixtures shared by the end-to-end tests

use bizerr_core::{BusinessError, Catalog};
use http::StatusCode;

pub const ERROR_INVALID_DATA: BusinessError =
    BusinessError::new(StatusCode::BAD_REQUEST, "USER-00000010", "invalid request body");
pub const ERROR_CREATE_USER: BusinessError = BusinessError::without_status("USER-00010000", "failed to create user");
pub const ERROR_MISSING_USERNAME: BusinessError =
    BusinessError::new(StatusCode::BAD_REQUEST, "USER-00010020", "missing username");
pub const ERROR_USER_EXIST: BusinessError = BusinessError::without_status("USER-00010030", "user already exists");
pub const ERROR_UNKNOWN: BusinessError = BusinessError::without_status("USER-10000010", "unknown error");

/// Catalog holding every descriptor above, with `ERROR_UNKNOWN` as fallback
pub fn catalog() -> Catalog {
    Catalog::builder()
        .errors([
            ERROR_INVALID_DATA,
            ERROR_CREATE_USER,
            ERROR_MISSING_USERNAME,
            ERROR_USER_EXIST,
            ERROR_UNKNOWN,
        ])
        .fallback(ERROR_UNKNOWN.code())
        .build()
        .expect("fixture catalog is valid")
}

