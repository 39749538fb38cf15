//! Collect the kernel modaliases of all devices on a Linux system
//!
//! The kernel exposes a `modalias` pseudo-file for (almost) every device under
//! `/sys`. This crate finds all of them, and produces the sorted set of unique
//! lines found in them. That list is what a hardware inventory needs to later
//! decide which drivers or packages apply to the machine.
//!
//! Everything here is Linux only and should work without root access.

pub mod collect;
pub mod config;
pub mod error;
pub mod metadata;
pub mod record;

// Re-export the main entry points
pub use collect::collect_modaliases;
pub use config::CollectorConfiguration;
pub use error::CollectError;
pub use record::ModaliasSet;
