use serde::Serialize;
use std::fmt::Display;

/// The product every builder in this crate produces.
///
/// # Immutability
/// Fields are private and only readable through accessors. The only way to obtain
/// a populated `Car` is a builder's finalize step
/// ([`StagedBuilder::finalize`](crate::framework::StagedBuilder::finalize) or
/// [`FluentCarBuilder::build`](crate::fluent::FluentCarBuilder::build)), so a finished
/// car never changes.
///
/// `Car::default()` is the product of a builder that was never configured:
/// empty engine, zero wheels, empty color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Car {
    engine: String,
    wheels: u32,
    color: String,
}

impl Car {
    /// Assembles a car from staged parts. Crate-private: callers go through a builder.
    pub(crate) fn assemble(engine: impl Into<String>, wheels: u32, color: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            wheels,
            color: color.into(),
        }
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn wheels(&self) -> u32 {
        self.wheels
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} car with {} engine and {} wheels",
            self.color, self.engine, self.wheels
        )
    }
}
