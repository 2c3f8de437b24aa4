use crate::format::Format;
use crate::helpers::{AntialiasingMode, RenderInput};

/// Per-context rendering settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    /// Antialiasing for backbuffer targets; decides their sample count.
    pub antialiasing: AntialiasingMode,

    /// Format of depth-stencil backbuffer targets.
    pub depth_format: Format,

    /// Use reversed-Z (near = 1, far = 0).
    ///
    /// Affects depth clear values produced by [`RenderHelper`](super::RenderHelper).
    pub reversed_depth: bool,

    /// Initial CPU capacity of the dynamic uniform buffer, in words.
    ///
    /// The buffer grows on demand; this only avoids early reallocations.
    pub initial_uniform_words: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            antialiasing: AntialiasingMode::None,
            depth_format: Format::D32F,
            reversed_depth: true,
            initial_uniform_words: 16 * 1024,
        }
    }
}

impl RenderConfig {
    /// Backbuffer parameters for a `width` x `height` frame under this config.
    pub fn render_input(&self, width: u32, height: u32) -> RenderInput {
        RenderInput {
            backbuffer_width: width,
            backbuffer_height: height,
            antialiasing_mode: self.antialiasing,
            depth_format: self.depth_format,
        }
    }
}
