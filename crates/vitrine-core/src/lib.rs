#![forbid(unsafe_code)]

//! Core: pixel geometry, canonical UI events, measurement capability, and
//! deferred actions.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod measure;
pub mod schedule;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
