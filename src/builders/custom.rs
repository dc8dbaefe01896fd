use crate::builders::Workbench;
use crate::framework::StagedBuilder;
use crate::model::{Car, CarSpec};

/// Staged builder whose fixed values come from a [`CarSpec`] chosen at construction.
///
/// Like the preset builders, its staging steps take no input. The difference is only
/// where the fixed values come from, which lets callers define new car models as data.
#[derive(Debug)]
pub struct CustomBuilder {
    spec: CarSpec,
    bench: Workbench,
}

impl CustomBuilder {
    pub fn new(spec: CarSpec) -> Self {
        Self {
            spec,
            bench: Workbench::new(),
        }
    }

    /// The values this builder stages.
    pub fn spec(&self) -> &CarSpec {
        &self.spec
    }
}

impl From<CarSpec> for CustomBuilder {
    fn from(spec: CarSpec) -> Self {
        Self::new(spec)
    }
}

impl StagedBuilder for CustomBuilder {
    fn build_engine(&mut self) {
        self.bench.set_engine(self.spec.engine.clone());
    }

    fn build_wheels(&mut self) {
        self.bench.set_wheels(self.spec.wheels);
    }

    fn build_color(&mut self) {
        self.bench.set_color(self.spec.color.clone());
    }

    fn finalize(&self) -> Car {
        self.bench.snapshot()
    }

    /// Clears the staged parts. The spec is kept, so staging again yields the same car.
    fn reset(&mut self) {
        self.bench.clear();
    }
}
