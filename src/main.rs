//! # Builder Recipe Demo
//!
//! Walks through both construction styles:
//! 1.  Directing a [`SedanBuilder`] and a [`SportsCarBuilder`] with the same [`Director`].
//! 2.  Directing a [`CustomBuilder`] behind a `dyn StagedBuilder`.
//! 3.  Chaining a [`FluentCarBuilder`].
//! 4.  Sharing one builder across threads with [`SharedBuilder`].

use builder_recipe::builders::{CustomBuilder, SedanBuilder, SportsCarBuilder};
use builder_recipe::fluent::FluentCarBuilder;
use builder_recipe::framework::{BuilderError, Director, StagedBuilder};
use builder_recipe::model::CarSpec;
use builder_recipe::runtime::{setup_tracing, SharedBuilder};
use std::thread;
use tracing::{error, info};

fn main() -> Result<(), BuilderError> {
    setup_tracing();

    info!("Starting builder demo");

    // Same director, different builders
    let span = tracing::info_span!("staged");
    let guard = span.enter();

    let mut sedan = SedanBuilder::new();
    let car = Director::new(&mut sedan).construct_product();
    info!(%car, "Sedan ready");

    let mut sports = SportsCarBuilder::new();
    let car = Director::new(&mut sports).construct_product();
    info!(%car, "Sports car ready");

    // Builder picked at runtime
    let mut custom = CustomBuilder::new(CarSpec::new("Electric", 4, "Silver"));
    let builder: &mut dyn StagedBuilder = &mut custom;
    let car = Director::new(builder).construct_product();
    info!(%car, "Custom car ready");
    drop(guard);

    // Fluent chain
    let span = tracing::info_span!("fluent");
    let guard = span.enter();

    let mut fluent = FluentCarBuilder::new();
    let car = fluent.engine("V8").wheels(4).color("Red").build();
    info!(%car, "Fluent car ready");

    let repainted = fluent.color("Yellow").build();
    info!(car = %repainted, "Fluent car repainted");
    drop(guard);

    // One builder, several threads
    let shared = SharedBuilder::new(SedanBuilder::new());
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || shared.construct())
        })
        .collect();

    for handle in handles {
        match handle.join() {
            Ok(result) => {
                let car = result?;
                info!(%car, "Shared construction finished");
            }
            Err(_) => error!("Construction thread panicked"),
        }
    }

    info!("Builder demo completed successfully");
    Ok(())
}
