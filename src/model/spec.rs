use serde::{Deserialize, Serialize};

/// A plain set of car part values.
///
/// Unlike [`Car`](crate::model::Car), every field is public: a `CarSpec` is input,
/// not a product. It configures a [`CustomBuilder`](crate::builders::CustomBuilder)
/// or seeds a [`FluentCarBuilder`](crate::fluent::FluentCarBuilder), and derives the
/// serde traits so presets can be loaded from whatever format the caller uses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarSpec {
    pub engine: String,
    pub wheels: u32,
    pub color: String,
}

impl CarSpec {
    pub fn new(engine: impl Into<String>, wheels: u32, color: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            wheels,
            color: color.into(),
        }
    }

    /// Parts staged by [`SedanBuilder`](crate::builders::SedanBuilder).
    pub fn sedan() -> Self {
        Self::new("V6", 4, "Black")
    }

    /// Parts staged by [`SportsCarBuilder`](crate::builders::SportsCarBuilder).
    pub fn sports_car() -> Self {
        Self::new("V8", 4, "Red")
    }
}
