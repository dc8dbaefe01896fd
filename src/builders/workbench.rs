//! The mutable staging area shared by every concrete staged builder.

use crate::model::Car;
use tracing::debug;

/// Holds the partially assigned parts of a car that has not been finalized yet.
///
/// Setters take a typed value and assign it with no validation. Each setter targets
/// its own field, so the last write per field wins and setter order does not matter.
/// Fields that were never set keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbench {
    engine: String,
    wheels: u32,
    color: String,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_engine(&mut self, engine: impl Into<String>) {
        self.engine = engine.into();
        debug!(engine = %self.engine, "Engine staged");
    }

    pub fn set_wheels(&mut self, wheels: u32) {
        self.wheels = wheels;
        debug!(wheels, "Wheels staged");
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        debug!(color = %self.color, "Color staged");
    }

    /// Copies the staged parts into a finished [`Car`]. The workbench is left untouched.
    pub fn snapshot(&self) -> Car {
        Car::assemble(self.engine.clone(), self.wheels, self.color.clone())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
