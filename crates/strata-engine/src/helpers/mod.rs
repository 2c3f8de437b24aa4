//! Small conveniences on top of the graph and device layers.

mod backbuffer;
mod buffer;
mod reversed_depth;

pub use backbuffer::{
    make_attachment_clear_descriptor, make_attachment_clear_descriptor_with,
    make_backbuffer_desc_simple, select_format_simple, set_backbuffer_desc_simple,
    AntialiasingMode, AttachmentClear, RenderInput,
};
pub use buffer::make_static_data_buffer;
pub use reversed_depth::{
    compare_depth_values, reverse_depth_for_clear_value, reverse_depth_for_compare_mode,
    reverse_depth_for_depth_offset, IS_DEPTH_REVERSED,
};
