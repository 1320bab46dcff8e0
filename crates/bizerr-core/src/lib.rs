//! Business error classification
//!
//! Low-level failures are wrapped into [`ResponseError`] values that carry a
//! [`BusinessError`] descriptor (HTTP status, stable code, message). At the
//! outer boundary, [`resolve`] walks the cause chain and surfaces the
//! innermost classification, which is the most specific one.

#![allow(clippy::must_use_candidate)]

mod boundary;
mod business;
mod catalog;
mod error;
mod resolve;
mod response;

pub use boundary::ErrorResponse;
pub use business::BusinessError;
pub use catalog::{Catalog, CatalogBuilder};
pub use error::{CatalogError, HttpError};
pub use resolve::resolve;
pub use response::{Cause, Chain, ResponseError, render, wrap};
