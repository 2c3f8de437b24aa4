use crate::device::{GfxDevice, RenderPass};
use crate::format::Format;

/// Attachment formats of the running pass. Pipelines drawn into it must match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassAttachmentInfo {
    /// One entry per color slot up to the highest one attached.
    pub color_formats: Vec<Option<Format>>,
    pub depth_stencil_format: Option<Format>,
    pub sample_count: u32,
}

/// What a pass callback receives while its pass is recording.
pub struct PassRenderer<'a> {
    pub device: &'a mut dyn GfxDevice,
    pub pass: &'a mut dyn RenderPass,
    pub attachments: &'a PassAttachmentInfo,
}
