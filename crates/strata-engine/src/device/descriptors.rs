use crate::format::Format;

use super::{BufferId, InputLayoutId, ProgramId, RenderTargetId, TextureId};

/// Linear RGBA color used for clear values.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT_BLACK: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const OPAQUE_BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const OPAQUE_WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    Vertex,
    Index,
    Uniform,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferFrequencyHint {
    Static,
    Dynamic,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    #[default]
    Triangles,
    TriangleStrip,
    Lines,
    LineStrip,
    Points,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompareMode {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertexBufferFrequency {
    PerVertex,
    PerInstance,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VertexBufferDescriptor {
    pub byte_stride: u32,
    pub frequency: VertexBufferFrequency,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttributeDescriptor {
    pub location: u32,
    pub format: Format,
    pub buffer_index: u32,
    pub buffer_byte_offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputLayoutDescriptor {
    pub vertex_buffers: Vec<VertexBufferDescriptor>,
    pub attributes: Vec<VertexAttributeDescriptor>,
    /// `None` for non-indexed geometry.
    pub index_format: Option<Format>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VertexBufferBinding {
    pub buffer: BufferId,
    pub byte_offset: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IndexBufferBinding {
    pub buffer: BufferId,
    pub byte_offset: u32,
}

/// Already-preprocessed shader sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgramDescriptor {
    pub vertex_source: String,
    pub fragment_source: String,
}

/// Shape of one binding group: how many uniform buffers and samplers it holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct BindingLayoutDescriptor {
    pub num_uniform_buffers: u32,
    pub num_samplers: u32,
}

/// A uniform buffer range bound with a dynamic offset supplied at draw time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BufferBinding {
    pub buffer: BufferId,
    pub word_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingsDescriptor {
    pub layout: BindingLayoutDescriptor,
    pub uniform_buffers: Vec<BufferBinding>,
    pub samplers: Vec<Option<TextureId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderPipelineDescriptor {
    pub program: ProgramId,
    pub input_layout: Option<InputLayoutId>,
    pub binding_layouts: Vec<BindingLayoutDescriptor>,
    pub topology: PrimitiveTopology,
    pub color_formats: Vec<Option<Format>>,
    pub depth_stencil_format: Option<Format>,
    pub sample_count: u32,
}

/// Physical render surface request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderTargetDescriptor {
    pub format: Format,
    pub width: u32,
    pub height: u32,
    pub sample_count: u32,
}

/// `clear: None` loads the existing contents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorAttachment {
    pub target: RenderTargetId,
    pub clear: Option<Color>,
}

/// `None` clear values load the existing contents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthStencilAttachment {
    pub target: RenderTargetId,
    pub depth_clear: Option<f32>,
    pub stencil_clear: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPassDescriptor {
    pub label: String,
    pub color_attachments: Vec<Option<ColorAttachment>>,
    pub depth_stencil_attachment: Option<DepthStencilAttachment>,
}
