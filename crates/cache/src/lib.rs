//! Cache layer for check-diff
//!
//! A run is keyed by the [`Signature`](check_diff_core::Signature) of its
//! invocation. The store keeps exactly one snapshot per signature: the
//! standard output of the most recent successful run.

pub mod signature;
pub mod snapshot;

pub use signature::{derive_signature, SignatureHasher};
pub use snapshot::{read_preview, Preview, SnapshotStore};
