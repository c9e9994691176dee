//! AEGIS Core — domain models, error types, and the identity storage
//! contract shared across the workspace.
//!
//! This crate provides:
//! - The identity record as the two-factor core sees it
//!   ([`models::identity::Identity`])
//! - Error types ([`error::AegisError`])
//! - The storage collaborator trait ([`repository::IdentityRepository`])
//! - An in-process reference store for tests and embedded use
//!   ([`memory::MemoryIdentityRepository`])

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;

pub use error::{AegisError, AegisResult};
pub use memory::MemoryIdentityRepository;
pub use repository::IdentityRepository;
