//! Per-context rendering plumbing.
//!
//! [`RenderHelper`] bundles the object cache, render graph and instruction
//! manager that a frame is built from.

mod cache;
mod config;
mod helper;

pub use cache::RenderCache;
pub use config::RenderConfig;
pub use helper::RenderHelper;
