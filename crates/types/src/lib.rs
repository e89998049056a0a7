//! Core types and traits for the veriwork workspace.
//!
//! This crate defines the shared abstractions used across all layers of the
//! veriwork client core, including the error taxonomy, the session
//! credential, and the traits that the store and session layers implement.

pub mod credential;
pub mod error;
pub mod traits;

pub use credential::Credential;
pub use error::{
    ApiError, DEFAULT_SESSION_EXPIRED_MESSAGE, ErrorKind, SESSION_EXPIRED_CODE, VeriworkError,
};
pub use traits::{TokenRenewer, TokenStore};
