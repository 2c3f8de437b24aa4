use crate::device::Color;
use crate::format::Format;
use crate::graph::{AttachmentSlot, RenderTargetDescription};

use super::reversed_depth::{reverse_depth_for_clear_value, IS_DEPTH_REVERSED};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AntialiasingMode {
    #[default]
    None,
    /// Post-process; renders single-sampled.
    Fxaa,
    Msaa4x,
}

impl AntialiasingMode {
    #[inline]
    pub const fn sample_count(self) -> u32 {
        match self {
            AntialiasingMode::None | AntialiasingMode::Fxaa => 1,
            AntialiasingMode::Msaa4x => 4,
        }
    }
}

/// Backbuffer parameters for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderInput {
    pub backbuffer_width: u32,
    pub backbuffer_height: u32,
    pub antialiasing_mode: AntialiasingMode,
    /// Format used for depth-stencil targets.
    pub depth_format: Format,
}

/// Clear values applied to a new render target description.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AttachmentClear {
    /// `None` loads the color contents.
    pub color: Option<Color>,
    pub depth: f32,
    pub stencil: u32,
}

/// Clears color to `color` (or loads with `None`) and depth to the far plane.
pub fn make_attachment_clear_descriptor(color: Option<Color>) -> AttachmentClear {
    make_attachment_clear_descriptor_with(color, IS_DEPTH_REVERSED)
}

pub fn make_attachment_clear_descriptor_with(color: Option<Color>, is_depth_reversed: bool) -> AttachmentClear {
    AttachmentClear {
        color,
        depth: reverse_depth_for_clear_value(1.0, is_depth_reversed),
        stencil: 0,
    }
}

/// Default pixel format for a backbuffer slot.
///
/// # Panics
/// Only `Color0` and `DepthStencil` have a default.
pub fn select_format_simple(slot: AttachmentSlot, depth_format: Format) -> Format {
    match slot {
        AttachmentSlot::Color0 => Format::U8_RGBA_RT,
        AttachmentSlot::DepthStencil => depth_format,
        other => panic!("no default backbuffer format for {other:?}"),
    }
}

pub fn set_backbuffer_desc_simple(desc: &mut RenderTargetDescription, input: &RenderInput) {
    desc.set_dimensions(
        input.backbuffer_width,
        input.backbuffer_height,
        input.antialiasing_mode.sample_count(),
    );
}

/// Full-size backbuffer description for `slot`, with `clear` applied when given.
pub fn make_backbuffer_desc_simple(
    slot: AttachmentSlot,
    input: &RenderInput,
    clear: Option<&AttachmentClear>,
) -> RenderTargetDescription {
    let mut desc = RenderTargetDescription::new(select_format_simple(slot, input.depth_format));
    set_backbuffer_desc_simple(&mut desc, input);

    if let Some(clear) = clear {
        desc.color_clear = clear.color;
        desc.depth_clear = Some(clear.depth);
        desc.stencil_clear = Some(clear.stencil);
    }
    desc
}
