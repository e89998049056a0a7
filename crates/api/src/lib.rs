//! Backend API plumbing for the veriwork client core.
//!
//! [`normalize`] converts the inconsistent failure shapes the backends emit
//! into the canonical [`veriwork_types::ApiError`] record; [`envelope`]
//! unwraps their equally inconsistent success payload wrappers; and
//! [`ApiClient`] ties both to the session checkpoint so call sites only ever
//! see typed errors and bare payloads.

pub mod client;
pub mod envelope;
pub mod normalize;

pub use client::ApiClient;
pub use envelope::unwrap_payload;
