use crate::device::{Color, RenderTargetDescriptor};
use crate::format::Format;

/// Attachment point of a render pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    Color0,
    Color1,
    Color2,
    Color3,
    DepthStencil,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 5] = [
        AttachmentSlot::Color0,
        AttachmentSlot::Color1,
        AttachmentSlot::Color2,
        AttachmentSlot::Color3,
        AttachmentSlot::DepthStencil,
    ];

    pub const COLOR_COUNT: usize = 4;

    /// Color attachment index, `None` for the depth-stencil slot.
    #[inline]
    pub const fn color_index(self) -> Option<usize> {
        match self {
            AttachmentSlot::Color0 => Some(0),
            AttachmentSlot::Color1 => Some(1),
            AttachmentSlot::Color2 => Some(2),
            AttachmentSlot::Color3 => Some(3),
            AttachmentSlot::DepthStencil => None,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self.color_index() {
            Some(i) => i,
            None => Self::COLOR_COUNT,
        }
    }
}

/// Logical render target declared for one frame.
///
/// Clear values of `None` mean "load": the first pass using the target keeps
/// whatever the physical surface holds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderTargetDescription {
    pub pixel_format: Format,
    pub width: u32,
    pub height: u32,
    pub sample_count: u32,

    pub color_clear: Option<Color>,
    pub depth_clear: Option<f32>,
    pub stencil_clear: Option<u32>,
}

impl RenderTargetDescription {
    /// Zero-sized, single-sampled target that loads its contents.
    pub fn new(pixel_format: Format) -> Self {
        Self {
            pixel_format,
            width: 0,
            height: 0,
            sample_count: 1,
            color_clear: None,
            depth_clear: None,
            stencil_clear: None,
        }
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32, sample_count: u32) {
        self.width = width;
        self.height = height;
        self.sample_count = sample_count;
    }

    /// Physical surface request matching this target.
    #[inline]
    pub fn surface_descriptor(&self) -> RenderTargetDescriptor {
        RenderTargetDescriptor {
            format: self.pixel_format,
            width: self.width,
            height: self.height,
            sample_count: self.sample_count,
        }
    }
}
