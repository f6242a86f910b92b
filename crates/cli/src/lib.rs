//! `check-diff`: a monitoring check that runs a command and reports whether
//! its output changed since the previous run.

pub mod check;
pub mod settings;

pub use check::{check_diff, Checker};
pub use settings::Settings;
