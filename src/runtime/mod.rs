//! Runtime support around the builders.
//!
//! # Main Components
//!
//! - [`SharedBuilder`] - External exclusion for a builder shared across threads
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod shared;
pub mod tracing;

pub use shared::*;
pub use self::tracing::*;
