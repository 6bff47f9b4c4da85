//! # petal-core
//!
//! Core types and primitives for the Petal configuration system.
//! This crate defines the shared vocabulary used by every other crate in the workspace.

pub mod error;
pub mod types;

pub use error::{PetalError, Result};
pub use types::*;
