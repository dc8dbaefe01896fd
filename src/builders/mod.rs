//! Concrete staged builders and the [`Workbench`] they stage into.
//!
//! Each builder fixes the value every staging step assigns, so the same
//! [`Director`](crate::framework::Director) sequence yields a different car per builder.

pub mod custom;
pub mod sedan;
pub mod sports_car;
pub mod workbench;

pub use custom::*;
pub use sedan::*;
pub use sports_car::*;
pub use workbench::*;
