//! # waypost-std
//!
//! Standard implementations for the Waypost route registration framework.
//!
//! This crate provides:
//! - **Standard middleware**: Logging, conditional execution, Timeout
//! - **Testing utilities**: recording middleware and an in-memory host

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use waypost_core;

// Modules
pub mod middleware;
pub mod testing;
