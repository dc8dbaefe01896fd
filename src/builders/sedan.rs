use crate::builders::Workbench;
use crate::framework::StagedBuilder;
use crate::model::{Car, CarSpec};

/// Staged builder for a family sedan: a `V6` engine, `4` wheels, painted `Black`.
#[derive(Debug, Default)]
pub struct SedanBuilder {
    bench: Workbench,
}

impl SedanBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StagedBuilder for SedanBuilder {
    fn build_engine(&mut self) {
        self.bench.set_engine(CarSpec::sedan().engine);
    }

    fn build_wheels(&mut self) {
        self.bench.set_wheels(CarSpec::sedan().wheels);
    }

    fn build_color(&mut self) {
        self.bench.set_color(CarSpec::sedan().color);
    }

    fn finalize(&self) -> Car {
        self.bench.snapshot()
    }

    fn reset(&mut self) {
        self.bench.clear();
    }
}
