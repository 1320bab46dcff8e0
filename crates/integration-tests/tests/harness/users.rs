//! Mock create-user flow with controller, service and repository layers
//!
//! Each layer classifies or annotates failures the way a real service would.

use bizerr_core::{Catalog, Cause, ErrorResponse, wrap};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use super::catalog::{ERROR_CREATE_USER, ERROR_INVALID_DATA, ERROR_MISSING_USERNAME, ERROR_USER_EXIST};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Outcome of a request as seen by an HTTP client
#[derive(Debug)]
pub struct Outcome {
    pub status: StatusCode,
    pub body: Option<CreateUserResponse>,
    pub code: String,
    pub message: String,
}

/// Boundary handler: the only place errors are resolved
pub fn handle_request(catalog: &Catalog, data: &str) -> Outcome {
    match controller_create_user(data) {
        Ok(body) => Outcome {
            status: StatusCode::OK,
            body: Some(body),
            code: String::new(),
            message: String::new(),
        },
        Err(err) => {
            let response: ErrorResponse = catalog.respond(Some(err));
            Outcome {
                status: response.status(),
                body: None,
                code: response.code().to_owned(),
                message: response.message().to_owned(),
            }
        }
    }
}

/// Controller layer: decodes the request and classifies service failures
///
/// # Errors
///
/// Returns the full cause chain of a failed request
pub fn controller_create_user(data: &str) -> Result<CreateUserResponse, Cause> {
    let request: CreateUserRequest = serde_json::from_str(data)
        .map_err(|e| wrap(ERROR_INVALID_DATA, Some(Cause::opaque(e).context("unmarshal request data"))))?;

    let response = service_create_user(&request)
        .map_err(|e| wrap(ERROR_CREATE_USER, Some(e.context("service create user"))))?;

    Ok(response)
}

fn service_create_user(request: &CreateUserRequest) -> Result<CreateUserResponse, Cause> {
    if request.username.is_empty() {
        return Err(wrap(ERROR_MISSING_USERNAME, Some(Cause::msg("username was empty"))).into());
    }

    let existing = repository_get_user_by_name(&request.username)
        .map_err(|e| e.context("repository get user by name"))?;

    if existing.is_some() {
        return Err(wrap(ERROR_USER_EXIST, Some(Cause::msg("user already exist"))).into());
    }

    let user = repository_create_user(User {
        id: 0,
        username: request.username.clone(),
        email: request.email.clone(),
    })
    .map_err(|e| e.context("repository create user"))?;

    Ok(CreateUserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
    })
}

// Mock lookups keyed on the username prefix

#[allow(clippy::unnecessary_wraps)]
fn repository_get_user_by_name(username: &str) -> Result<Option<User>, Cause> {
    if username.starts_with("exist") {
        return Ok(Some(User {
            id: 1,
            username: username.to_owned(),
            email: "email".to_owned(),
        }));
    }

    Ok(None)
}

fn repository_create_user(user: User) -> Result<User, Cause> {
    if user.username.starts_with("failed") {
        return Err(Cause::msg("database error"));
    }

    Ok(User { id: 100, ..user })
}
