//! # Observability & Tracing
//!
//! Builders log through the `tracing` crate:
//!
//! - **Staging**: every [`Workbench`](crate::builders::Workbench) assignment at `debug`
//! - **Construction**: each completed [`Director`](crate::framework::Director) run at `info`
//! - **Locking**: [`SharedBuilder`](crate::runtime::SharedBuilder) lock acquisition at `debug`,
//!   poisoning at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # One line per finished car
//! RUST_LOG=info cargo run
//!
//! # Every staging step
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=builder_recipe::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a sedan construction reads:
//!
//! ```text
//! DEBUG Construct started builder="SedanBuilder"
//! DEBUG Engine staged engine=V6
//! DEBUG Wheels staged wheels=4
//! DEBUG Color staged color=Black
//! DEBUG Construct finished builder="SedanBuilder"
//!  INFO Constructed builder="SedanBuilder" car=Black car with V6 engine and 4 wheels
//! ```

/// Initializes the tracing subscriber.
///
/// Filtering comes from the `RUST_LOG` environment variable. The compact format hides the
/// module path (`with_target(false)`) since the `builder` field already names the source.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
