//! Render graph: logical targets and passes scheduled onto pooled surfaces.
//!
//! Per frame:
//! - [`RenderGraph::new_graph_builder`] starts a declaration
//! - targets, passes and external resolves are declared on the [`GraphBuilder`]
//! - [`RenderGraph::execute`] allocates surfaces and runs the passes in order

mod builder;
mod pass;
mod pool;
mod scheduler;
mod target;

pub use builder::{GraphBuilder, PassBuilder, RenderTargetHandle};
pub use pass::{PassAttachmentInfo, PassRenderer};
pub use scheduler::{GraphStats, RenderGraph};
pub use target::{AttachmentSlot, RenderTargetDescription};
