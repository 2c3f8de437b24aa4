use crate::device::{
    ColorAttachment, DepthStencilAttachment, GfxDevice, RenderPassDescriptor, RenderTargetId,
    TextureId,
};

use super::builder::TargetDecl;
use super::pool::TargetPool;
use super::{AttachmentSlot, GraphBuilder, PassAttachmentInfo, PassRenderer};

/// Counters for one [`RenderGraph::execute`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub passes: usize,
    /// Logical targets bound to a physical surface.
    pub targets_acquired: usize,
    /// Surfaces the device had to create (pool misses).
    pub targets_created: usize,
    pub resolves: usize,
}

/// Schedules declared passes onto pooled physical surfaces.
///
/// The pool is the only state that outlives a frame.
#[derive(Debug, Default)]
pub struct RenderGraph {
    pool: TargetPool,
    next_build: u32,
}

impl RenderGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts describing a frame. Handles from earlier builders are rejected by this one.
    pub fn new_graph_builder<'a>(&mut self) -> GraphBuilder<'a> {
        self.next_build = self.next_build.wrapping_add(1);
        GraphBuilder::new(self.next_build)
    }

    /// Physical surfaces currently pooled.
    #[inline]
    pub fn pooled_targets(&self) -> usize {
        self.pool.len()
    }

    /// Runs every declared pass in declaration order.
    ///
    /// Per pass: bind each attached target to a pooled surface (created on a
    /// miss), clear targets on their first use and load them afterwards, run
    /// the pass callback, then perform resolves whose target is not used by any
    /// later pass. Surfaces return to the pool after their target's last pass.
    ///
    /// # Panics
    /// Panics if a resolved target is never attached to a pass.
    pub fn execute(&mut self, device: &mut dyn GfxDevice, builder: GraphBuilder<'_>) -> GraphStats {
        let GraphBuilder {
            targets,
            passes,
            resolves,
            ..
        } = builder;

        let mut first_use: Vec<Option<usize>> = vec![None; targets.len()];
        let mut last_use: Vec<Option<usize>> = vec![None; targets.len()];
        for (p, pass) in passes.iter().enumerate() {
            for handle in pass.attachments.iter().flatten() {
                let t = handle.index as usize;
                first_use[t].get_or_insert(p);
                last_use[t] = Some(p);
            }
        }

        for (t, target) in targets.iter().enumerate() {
            if last_use[t].is_none() {
                log::warn!("render graph: target '{}' is declared but never attached", target.label);
            }
        }

        let mut resolves_after: Vec<Vec<(usize, TextureId)>> = vec![Vec::new(); passes.len()];
        for (handle, texture) in &resolves {
            let t = handle.index as usize;
            let Some(p) = last_use[t] else {
                panic!(
                    "render target '{}' is resolved but no pass renders to it",
                    targets[t].label
                );
            };
            resolves_after[p].push((t, *texture));
        }

        let mut stats = GraphStats::default();
        let mut physical: Vec<Option<RenderTargetId>> = vec![None; targets.len()];

        for (p, pass) in passes.into_iter().enumerate() {
            let mut desc = RenderPassDescriptor {
                label: pass.label,
                ..RenderPassDescriptor::default()
            };
            let mut info = PassAttachmentInfo {
                sample_count: 1,
                ..PassAttachmentInfo::default()
            };

            for slot in AttachmentSlot::ALL {
                let Some(handle) = pass.attachments[slot.index()] else {
                    continue;
                };
                let t = handle.index as usize;
                let target = &targets[t];
                let id = match physical[t] {
                    Some(id) => id,
                    None => {
                        let (id, created) = self.pool.acquire(device, &target.desc.surface_descriptor());
                        stats.targets_acquired += 1;
                        stats.targets_created += usize::from(created);
                        physical[t] = Some(id);
                        id
                    }
                };
                let first = first_use[t] == Some(p);
                attach(&mut desc, &mut info, slot, id, target, first);
            }

            log::trace!("render graph: pass '{}'", desc.label);
            let mut render_pass = device.create_render_pass(&desc);
            if let Some(exec) = pass.exec {
                let mut renderer = PassRenderer {
                    device: &mut *device,
                    pass: &mut *render_pass,
                    attachments: &info,
                };
                exec(&mut renderer);
            }
            device.submit_pass(render_pass);
            stats.passes += 1;

            for &(t, texture) in &resolves_after[p] {
                if let Some(id) = physical[t] {
                    device.resolve_render_target(id, texture);
                    stats.resolves += 1;
                }
            }

            for handle in pass.attachments.iter().flatten() {
                let t = handle.index as usize;
                if last_use[t] == Some(p) {
                    if let Some(id) = physical[t] {
                        self.pool.release(id);
                    }
                }
            }
        }

        let destroyed = self.pool.end_frame(device);
        log::trace!(
            "render graph: {} passes, {} targets ({} created, {} destroyed), {} resolves",
            stats.passes,
            stats.targets_acquired,
            stats.targets_created,
            destroyed,
            stats.resolves
        );
        stats
    }

    /// Destroys every pooled surface.
    pub fn destroy(&mut self, device: &mut dyn GfxDevice) {
        self.pool.destroy(device);
    }
}

fn attach(
    desc: &mut RenderPassDescriptor,
    info: &mut PassAttachmentInfo,
    slot: AttachmentSlot,
    id: RenderTargetId,
    target: &TargetDecl,
    first_use: bool,
) {
    let format = target.desc.pixel_format;
    info.sample_count = target.desc.sample_count;

    match slot.color_index() {
        Some(i) => {
            if desc.color_attachments.len() <= i {
                desc.color_attachments.resize(i + 1, None);
                info.color_formats.resize(i + 1, None);
            }
            desc.color_attachments[i] = Some(ColorAttachment {
                target: id,
                clear: target.desc.color_clear.filter(|_| first_use),
            });
            info.color_formats[i] = Some(format);
        }
        None => {
            desc.depth_stencil_attachment = Some(DepthStencilAttachment {
                target: id,
                depth_clear: target.desc.depth_clear.filter(|_| first_use),
                stencil_clear: target
                    .desc
                    .stencil_clear
                    .filter(|_| first_use && format.has_stencil()),
            });
            info.depth_stencil_format = Some(format);
        }
    }
}
