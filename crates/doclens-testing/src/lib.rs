//! Internal testing utilities for the doclens workspace.
//!
//! Provides canonical backend payload fixtures and a mock backend wrapper
//! so integration tests across crates exercise the same wire shapes.

pub mod payloads;
pub mod server;

pub use server::MockBackend;
