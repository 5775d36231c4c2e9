//! Feature functions behind the UI actions.
//!
//! Each function updates the [`crate::models::page::Page`] it is given and
//! returns a [`ServiceResult`]; callers decide how to report errors.

use thiserror::Error;

use crate::api::ApiError;
use crate::forms::FormError;

pub mod clients;
pub mod deals;
pub mod tabs;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Local validation failed; no request was made.
    #[error("{0}")]
    Form(#[from] FormError),

    #[error("Error: {0}")]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
