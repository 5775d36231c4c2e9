//! Form definitions backing the create-client and create-deal panels.

use thiserror::Error;

pub mod client;
pub mod deal;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("First and last name are required!")]
    MissingClientName,

    #[error("Fill in all required fields!")]
    MissingDealFields,
}
