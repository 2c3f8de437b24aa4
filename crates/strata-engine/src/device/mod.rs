//! Device abstraction consumed by the frame orchestration layer.
//!
//! This module only describes the contract:
//! - opaque resource ids handed out by the backend
//! - plain-data descriptors for every object the core asks the backend to create
//! - capability and vendor queries
//! - the [`GfxDevice`] / [`RenderPass`] traits implemented by a backend
//!
//! Concrete backends live outside this crate.

mod descriptors;
mod handles;
mod limits;
mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use descriptors::{
    BindingLayoutDescriptor, BindingsDescriptor, BufferBinding, BufferFrequencyHint, BufferUsage,
    Color, ColorAttachment, CompareMode, DepthStencilAttachment, IndexBufferBinding,
    InputLayoutDescriptor, PrimitiveTopology, ProgramDescriptor, RenderPassDescriptor,
    RenderPipelineDescriptor, RenderTargetDescriptor, VertexAttributeDescriptor,
    VertexBufferBinding, VertexBufferDescriptor, VertexBufferFrequency,
};
pub use handles::{
    BindingsId, BufferId, InputLayoutId, InputStateId, PipelineId, ProgramId, RenderTargetId,
    TextureId,
};
pub use limits::{ClipSpaceNearZ, DeviceLimits, VendorInfo};
pub use traits::{GfxDevice, RenderPass};
