use crate::builders::Workbench;
use crate::framework::StagedBuilder;
use crate::model::{Car, CarSpec};

/// Staged builder for a sports car: a `V8` engine, `4` wheels, painted `Red`.
///
/// Driven by the same [`Director`](crate::framework::Director) as
/// [`SedanBuilder`](crate::builders::SedanBuilder), it yields a different car.
#[derive(Debug, Default)]
pub struct SportsCarBuilder {
    bench: Workbench,
}

impl SportsCarBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StagedBuilder for SportsCarBuilder {
    fn build_engine(&mut self) {
        self.bench.set_engine(CarSpec::sports_car().engine);
    }

    fn build_wheels(&mut self) {
        self.bench.set_wheels(CarSpec::sports_car().wheels);
    }

    fn build_color(&mut self) {
        self.bench.set_color(CarSpec::sports_car().color);
    }

    fn finalize(&self) -> Car {
        self.bench.snapshot()
    }

    fn reset(&mut self) {
        self.bench.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::SedanBuilder;
    use crate::framework::Director;

    #[test]
    fn test_swapping_builder_changes_product() {
        let mut sedan = SedanBuilder::new();
        let mut sports = SportsCarBuilder::new();

        let sedan_car = Director::new(&mut sedan).construct_product();
        let sports_car = Director::new(&mut sports).construct_product();

        assert_ne!(sedan_car, sports_car);
        assert_eq!(sports_car, Car::assemble("V8", 4, "Red"));
    }

    #[test]
    fn test_reset_then_restage() {
        let mut builder = SportsCarBuilder::new();
        Director::new(&mut builder).construct();

        builder.reset();
        assert_eq!(builder.finalize(), Car::default());

        builder.build_color();
        assert_eq!(builder.finalize(), Car::assemble("", 0, "Red"));
    }
}
