//! # Mock Framework
//!
//! Utilities for testing code that drives a [`StagedBuilder`].
//!
//! [`RecordingBuilder`] stages values from a [`CarSpec`] like a real builder, and also
//! records every call it receives. Tests can inspect the log with
//! [`calls`](RecordingBuilder::calls) or declare the expected sequence up front and
//! [`verify`](RecordingBuilder::verify) it.
//!
//! This module is compiled into the library (not behind `#[cfg(test)]`) so integration
//! tests can use it too.

use crate::builders::Workbench;
use crate::framework::StagedBuilder;
use crate::model::{Car, CarSpec};
use std::sync::{Arc, Mutex, PoisonError};

/// One call received by a [`RecordingBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Engine,
    Wheels,
    Color,
    Finalize,
    Reset,
}

/// The order a [`Director`](crate::framework::Director) must follow.
pub const DIRECTOR_SEQUENCE: [Step; 3] = [Step::Engine, Step::Wheels, Step::Color];

/// A staged builder that records the calls it receives.
///
/// # Example
/// ```
/// use builder_recipe::framework::mock::{RecordingBuilder, DIRECTOR_SEQUENCE};
/// use builder_recipe::framework::Director;
///
/// let mut builder = RecordingBuilder::default();
/// builder.expect_sequence(&DIRECTOR_SEQUENCE);
///
/// Director::new(&mut builder).construct();
/// builder.verify(); // Panics if the director deviated
/// ```
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    spec: CarSpec,
    bench: Workbench,
    calls: Arc<Mutex<Vec<Step>>>,
    expected: Vec<Step>,
    panic_on: Option<Step>,
}

impl RecordingBuilder {
    /// Creates a recording builder that stages the values of `spec`.
    pub fn new(spec: CarSpec) -> Self {
        Self {
            spec,
            ..Self::default()
        }
    }

    /// Makes the builder panic when it receives `step`, after recording it.
    ///
    /// Used to simulate a holder that dies while a lock on the builder is held.
    pub fn panic_on(mut self, step: Step) -> Self {
        self.panic_on = Some(step);
        self
    }

    /// Declares the exact sequence of calls [`verify`](Self::verify) will check for.
    pub fn expect_sequence(&mut self, steps: &[Step]) {
        self.expected = steps.to_vec();
    }

    /// Returns a copy of every call received so far, in order.
    pub fn calls(&self) -> Vec<Step> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns a handle to the call log that stays valid after the builder moves
    /// (e.g. into a [`SharedBuilder`](crate::runtime::SharedBuilder)).
    pub fn call_log(&self) -> Arc<Mutex<Vec<Step>>> {
        self.calls.clone()
    }

    /// Verifies that the recorded calls match the declared sequence.
    pub fn verify(&self) {
        let calls = self.calls();
        if calls != self.expected {
            panic!(
                "Call sequence mismatch. Expected {:?}, got {:?}",
                self.expected, calls
            );
        }
    }

    fn record(&self, step: Step) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(step);
        if self.panic_on == Some(step) {
            panic!("RecordingBuilder told to panic on {:?}", step);
        }
    }
}

impl StagedBuilder for RecordingBuilder {
    fn build_engine(&mut self) {
        self.record(Step::Engine);
        self.bench.set_engine(self.spec.engine.clone());
    }

    fn build_wheels(&mut self) {
        self.record(Step::Wheels);
        self.bench.set_wheels(self.spec.wheels);
    }

    fn build_color(&mut self) {
        self.record(Step::Color);
        self.bench.set_color(self.spec.color.clone());
    }

    fn finalize(&self) -> Car {
        self.record(Step::Finalize);
        self.bench.snapshot()
    }

    fn reset(&mut self) {
        self.record(Step::Reset);
        self.bench.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Director;

    #[test]
    fn test_records_director_order() {
        let mut builder = RecordingBuilder::new(CarSpec::sedan());
        builder.expect_sequence(&[Step::Engine, Step::Wheels, Step::Color, Step::Finalize]);

        let car = Director::new(&mut builder).construct_product();

        builder.verify();
        assert_eq!(car, Car::assemble("V6", 4, "Black"));
    }

    #[test]
    fn test_each_construct_repeats_full_sequence() {
        let mut builder = RecordingBuilder::default();
        {
            let mut director = Director::new(&mut builder);
            director.construct();
            director.construct();
        }

        let mut expected = DIRECTOR_SEQUENCE.to_vec();
        expected.extend(DIRECTOR_SEQUENCE);
        assert_eq!(builder.calls(), expected);
    }

    #[test]
    #[should_panic(expected = "Call sequence mismatch")]
    fn test_verify_detects_mismatch() {
        let mut builder = RecordingBuilder::default();
        builder.expect_sequence(&DIRECTOR_SEQUENCE);

        builder.build_color();
        builder.verify();
    }

    #[test]
    #[should_panic(expected = "told to panic on Wheels")]
    fn test_panic_on_step() {
        let mut builder = RecordingBuilder::default().panic_on(Step::Wheels);
        Director::new(&mut builder).construct();
    }
}
