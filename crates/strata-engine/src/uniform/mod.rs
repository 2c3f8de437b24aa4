//! Per-frame dynamic uniform storage.
//!
//! Many small parameter blocks share one device buffer and are addressed by a
//! dynamic offset at draw time, instead of one buffer object per draw.

mod dynamic;

pub use dynamic::DynamicUniformBuffer;
