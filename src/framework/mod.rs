//! Generic staged-builder framework.
//!
//! This module provides the building blocks for constructing immutable products in a
//! fixed, reusable order.
//!
//! # Main Components
//!
//! - [`StagedBuilder`] - Capability trait that concrete builders implement
//! - [`Director`] - Generic sequencer that drives any staged builder
//! - [`BuilderError`] - Common error type
//!
//! # Testing
//!
//! See [`mock`] module for a builder that records the steps it receives.

pub mod core;
pub mod error;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use self::error::*;
