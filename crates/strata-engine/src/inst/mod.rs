//! Deferred render instructions.
//!
//! Draws are recorded as [`RenderInst`] values during the frame and drained
//! into a device pass later, ordered by [`SortKey`].

mod key;
mod manager;
mod render_inst;

pub use key::{make_depth_key, RendererLayer, SortKey, MAX_DEPTH};
pub use manager::{InstId, ManagerState, RenderInstManager};
pub use render_inst::{DrawCall, RenderInst, UniformSlot};
