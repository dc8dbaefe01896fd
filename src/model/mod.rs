//! Pure data structures: the finished [`Car`] product and the [`CarSpec`] value set
//! used to configure builders.

pub mod car;
pub mod spec;

pub use car::*;
pub use spec::*;
