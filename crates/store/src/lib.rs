//! Credential storage for the veriwork session layer.

pub mod memory;

pub use memory::MemoryTokenStore;
