#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Builder Recipe
//!
//! > **A Recipe for Building Immutable Values in Rust.**
//!
//! This crate demonstrates two ways to assemble an immutable product (a [`Car`](model::Car))
//! from parts: a **staged builder driven by a director**, and a **fluent builder** whose
//! setters chain in one expression.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Staged Builder + Director
//!
//! - **Builders** decide *what* each part is. A [`SedanBuilder`](builders::SedanBuilder)
//!   always stages a `V6`; a [`SportsCarBuilder`](builders::SportsCarBuilder) a `V8`.
//! - **The director** decides *in which order* parts are staged, and nothing else.
//!
//! Swapping the builder changes the car without changing the director.
//!
//! ### Fluent Builder
//!
//! One concrete type. The caller picks every value and the order of calls:
//!
//! ```
//! use builder_recipe::fluent::FluentCarBuilder;
//!
//! let car = FluentCarBuilder::new().engine("V8").wheels(4).color("Red").build();
//! assert_eq!(car.engine(), "V8");
//! ```
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The Power of `B`
//! You'll see `Director<'a, B: StagedBuilder + ?Sized>`. This means "I can direct *any*
//! builder, as long as it exposes the staging steps."
//! -   **Benefit**: The construction order is written **once**.
//! -   **`?Sized`**: The same director also accepts `&mut dyn StagedBuilder` when the
//!     builder is only known at runtime.
//!
//! ### Reuse: Finalize Is a Snapshot
//! Both `finalize` and `build` borrow the builder and return a copy of the staged state.
//! The builder is not reset: staging may continue and the next finalize reflects it.
//! Call `reset` to start over. Finalizing before any staging is legal and returns
//! [`Car::default()`](model::Car).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Immutability
//! A [`Car`](model::Car) has private fields and read-only accessors; only builders can
//! assemble one.
//!
//! ### 2. Concurrency Model
//! Builders are single-threaded and do no locking. To share one across threads, wrap it
//! in [`SharedBuilder`](runtime::SharedBuilder), which supplies the mutual exclusion and
//! reports poisoning as a [`BuilderError`](framework::BuilderError).
//!
//! ### 3. Observability
//! Staging steps and finished constructions are logged with `tracing`.
//! See the [`runtime::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The [`StagedBuilder`](framework::StagedBuilder) capability trait and the
//!   generic [`Director`](framework::Director).
//! - **Testing**: [`framework::mock`] provides a builder that records the calls it receives.
//!
//! ### 2. The Implementations ([`builders`])
//! - **Role**: Concrete staged builders and the [`Workbench`](builders::Workbench) staging
//!   area they share.
//!
//! ### 3. The Shortcut ([`fluent`])
//! - **Role**: [`FluentCarBuilder`](fluent::FluentCarBuilder), the chainable builder.
//!
//! ### 4. The Data ([`model`])
//! - **Role**: The [`Car`](model::Car) product and the [`CarSpec`](model::CarSpec) value set.
//!
//! ### 5. The Plumbing ([`runtime`])
//! - **Role**: Tracing setup and cross-thread sharing.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod builders;
pub mod fluent;
pub mod framework;
pub mod model;
pub mod runtime;
