//! Strata engine crate.
//!
//! Frame orchestration on top of an external device abstraction:
//! - `graph`: logical render targets and passes, scheduled onto pooled surfaces
//! - `inst`: deferred render instructions with template inheritance and sort keys
//! - `uniform`: per-frame dynamic uniform buffer sub-allocation
//! - `format`: packed pixel/vertex format descriptors

pub mod device;
pub mod format;
pub mod graph;
pub mod helpers;
pub mod inst;
pub mod logging;
pub mod render;
pub mod uniform;
