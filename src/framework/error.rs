//! # Framework Errors
//!
//! The builders themselves are infallible: a wrong value type is a compile error.
//! The only runtime failure comes from sharing a builder across threads through
//! [`SharedBuilder`](crate::runtime::SharedBuilder).

/// Errors that can occur while driving a builder.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum BuilderError {
    /// A thread panicked while holding the shared builder's lock, so its staged
    /// state may be half-written.
    #[error("Builder lock poisoned: {0}")]
    Poisoned(String),
}
