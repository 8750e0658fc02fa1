//! Form client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
