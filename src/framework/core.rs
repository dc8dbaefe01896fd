//! # Core Builder Framework
//!
//! This module defines the generic building blocks for staged construction.
//!
//! ## Key Types
//!
//! - [`StagedBuilder`]: The capability trait that all staged builders implement.
//! - [`Director`]: The generic sequencer that drives any staged builder.

use crate::model::Car;
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Capability Trait)
// =============================================================================

/// Capability set that any staged builder must implement to be driven by a [`Director`].
///
/// # Architecture Note
/// By defining a contract that all our concrete builders (Sedan, SportsCar, Custom)
/// must satisfy, we can write the construction order *once* in [`Director`] and reuse
/// it everywhere. Each builder decides *what* value a step stages; the director only
/// decides *when* the step runs.
///
/// # Staging Steps
/// `build_engine`, `build_wheels` and `build_color` take no input: a concrete builder
/// fixes the value it stages. Steps carry no validation and may be called any number
/// of times in any order. The last call for a field wins.
///
/// # Finalize
/// [`finalize`](StagedBuilder::finalize) borrows the builder and returns a snapshot of
/// the staged state. It is legal before any staging (yielding [`Car::default`]) and may
/// be called repeatedly. The builder keeps its state afterwards, so staging can resume
/// and the next finalize reflects it. Call [`reset`](StagedBuilder::reset) for a clean slate.
///
/// The trait is object safe: a director can drive `&mut dyn StagedBuilder`.
pub trait StagedBuilder {
    /// Stages the engine.
    fn build_engine(&mut self);

    /// Stages the wheel count.
    fn build_wheels(&mut self);

    /// Stages the paint color.
    fn build_color(&mut self);

    /// Returns a snapshot of the staged state.
    fn finalize(&self) -> Car;

    /// Restores every staged field to its default.
    fn reset(&mut self);

    /// Short label used in log fields.
    ///
    /// Defaults to the last path segment of the implementing type's name
    /// (e.g. `SedanBuilder` instead of `builder_recipe::builders::sedan::SedanBuilder`).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown")
    }
}

// =============================================================================
// 2. THE DIRECTOR
// =============================================================================

/// Drives a staged builder through one fixed construction sequence.
///
/// # Architecture Note
/// The director borrows its builder (`&'a mut B`) rather than owning it: it exists only
/// for the duration of a construction, and the caller keeps the builder afterwards.
/// It is generic over the [`StagedBuilder`] capability, never over a concrete type, so
/// swapping the builder changes the product without touching the director.
///
/// `B` may be unsized, which lets a director drive `&mut dyn StagedBuilder`.
///
/// # Example
///
/// ```
/// use builder_recipe::builders::SedanBuilder;
/// use builder_recipe::framework::Director;
///
/// let mut builder = SedanBuilder::new();
/// let mut director = Director::new(&mut builder);
/// director.construct();
/// let car = director.get_product();
/// assert_eq!(car.engine(), "V6");
/// ```
pub struct Director<'a, B: StagedBuilder + ?Sized> {
    builder: &'a mut B,
}

impl<'a, B: StagedBuilder + ?Sized> Director<'a, B> {
    pub fn new(builder: &'a mut B) -> Self {
        Self { builder }
    }

    /// Runs the staging steps once each: engine, then wheels, then color.
    ///
    /// There is no conditional logic. Running it again re-stages the same values, so
    /// for fixed-value builders it is idempotent.
    pub fn construct(&mut self) {
        let builder = self.builder.name();
        debug!(builder, "Construct started");

        self.builder.build_engine();
        self.builder.build_wheels();
        self.builder.build_color();

        debug!(builder, "Construct finished");
    }

    /// Delegates to the builder's [`finalize`](StagedBuilder::finalize).
    pub fn get_product(&self) -> Car {
        self.builder.finalize()
    }

    /// [`construct`](Self::construct) followed by [`get_product`](Self::get_product).
    pub fn construct_product(&mut self) -> Car {
        self.construct();
        let car = self.get_product();
        info!(builder = self.builder.name(), %car, "Constructed");
        car
    }

    /// Read access to the borrowed builder.
    pub fn builder(&self) -> &B {
        &*self.builder
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
