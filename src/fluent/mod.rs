//! Fluent car construction.
//!
//! [`FluentCarBuilder`] is a single concrete component: no trait, no director. The caller
//! picks the order of configuration calls and chains them in one expression.

use crate::builders::Workbench;
use crate::model::{Car, CarSpec};
use tracing::debug;

/// Chainable car builder.
///
/// # Chaining
/// Every setter takes `&mut self` and hands back the same `&mut Self`, never a copy.
/// The caller keeps its one binding for the whole chain:
///
/// ```
/// use builder_recipe::fluent::FluentCarBuilder;
///
/// let mut builder = FluentCarBuilder::new();
/// let car = builder.engine("V8").wheels(4).color("Red").build();
/// assert_eq!(car.to_string(), "Red car with V8 engine and 4 wheels");
/// ```
///
/// # Reuse
/// [`build`](Self::build) borrows the builder and returns a snapshot. Configuration may
/// continue afterwards and the next `build` reflects it. Use [`reset`](Self::reset) to
/// start over from defaults.
#[must_use = "a builder does nothing unless you call `.build()`"]
#[derive(Debug, Clone, Default)]
pub struct FluentCarBuilder {
    bench: Workbench,
}

impl FluentCarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the staging value from a spec. Setters may still override any field.
    pub fn from_spec(spec: CarSpec) -> Self {
        let mut builder = Self::new();
        builder
            .engine(spec.engine)
            .wheels(spec.wheels)
            .color(spec.color);
        builder
    }

    pub fn engine(&mut self, engine: impl Into<String>) -> &mut Self {
        self.bench.set_engine(engine);
        self
    }

    pub fn wheels(&mut self, wheels: u32) -> &mut Self {
        self.bench.set_wheels(wheels);
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.bench.set_color(color);
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.bench.clear();
        self
    }

    /// Returns a snapshot of the current configuration. Legal before any setter call.
    pub fn build(&self) -> Car {
        let car = self.bench.snapshot();
        debug!(%car, "Fluent build");
        car
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_order_does_not_matter() {
        let a = FluentCarBuilder::new()
            .engine("V8")
            .wheels(4)
            .color("Red")
            .build();
        let b = FluentCarBuilder::new()
            .color("Red")
            .engine("V8")
            .wheels(4)
            .build();
        let c = FluentCarBuilder::new()
            .wheels(4)
            .color("Red")
            .engine("V8")
            .build();

        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_setters_return_same_instance() {
        let mut builder = FluentCarBuilder::new();
        let origin: *const FluentCarBuilder = &builder;

        let after_engine: *const FluentCarBuilder = builder.engine("V8");
        assert!(std::ptr::eq(origin, after_engine));

        let after_chain: *const FluentCarBuilder = builder.wheels(4).color("Red");
        assert!(std::ptr::eq(origin, after_chain));

        let after_reset: *const FluentCarBuilder = builder.reset();
        assert!(std::ptr::eq(origin, after_reset));
    }

    #[test]
    fn test_build_twice_yields_equal_products() {
        let mut builder = FluentCarBuilder::new();
        builder.engine("V6").color("Blue");

        assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn test_build_without_configuration() {
        assert_eq!(FluentCarBuilder::new().build(), Car::default());
    }

    #[test]
    fn test_configure_after_build() {
        let mut builder = FluentCarBuilder::new();
        let first = builder.engine("V6").wheels(4).build();

        let second = builder.color("Green").build();

        assert_eq!(first.color(), "");
        assert_eq!(second, Car::assemble("V6", 4, "Green"));
    }

    #[test]
    fn test_from_spec_and_override() {
        let car = FluentCarBuilder::from_spec(CarSpec::sedan())
            .color("White")
            .build();

        assert_eq!(car, Car::assemble("V6", 4, "White"));
    }

    #[test]
    fn test_reset() {
        let mut builder = FluentCarBuilder::from_spec(CarSpec::sports_car());
        assert_eq!(builder.reset().build(), Car::default());
    }
}
