//! Core domain types, errors, and constants for `check-diff`.
//!
//! Every other crate in the workspace builds on the items defined here, so
//! this crate stays free of I/O and third-party runtime dependencies.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias. Every failure a run can
//!   hit maps onto exactly one variant, and every variant ends up as a
//!   CRITICAL check outcome.
//! - **`types`**: the invocation being checked, its signature, and the
//!   monitoring-check status and outcome types.
//! - **`constants`**: fixed message limits, file name prefixes, and the
//!   environment variable names read at startup.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
