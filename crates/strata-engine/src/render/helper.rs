use crate::device::{Color, GfxDevice};
use crate::graph::RenderGraph;
use crate::helpers::{make_attachment_clear_descriptor_with, AttachmentClear, RenderInput};
use crate::inst::{RenderInst, RenderInstManager};
use crate::uniform::DynamicUniformBuffer;

use super::{RenderCache, RenderConfig};

/// Everything one rendering context needs for a frame.
///
/// Fields are public so a frame can borrow them independently: the graph
/// builder's pass callbacks typically hold the instruction manager and the
/// cache while [`RenderGraph::execute`] runs.
pub struct RenderHelper {
    pub render_cache: RenderCache,
    pub render_graph: RenderGraph,
    pub render_inst_manager: RenderInstManager,
    config: RenderConfig,
}

impl RenderHelper {
    pub fn new(device: &dyn GfxDevice, config: RenderConfig) -> Self {
        Self::with_cache(device, config, RenderCache::new())
    }

    /// Like [`new`](Self::new), sharing a cache the caller already populated.
    pub fn with_cache(device: &dyn GfxDevice, config: RenderConfig, render_cache: RenderCache) -> Self {
        let uniform_buffer = DynamicUniformBuffer::with_capacity(device, config.initial_uniform_words);
        let vendor = device.vendor_info();
        log::debug!(
            "render helper: platform {}, clip-space near z {:?}, uniform page {} words, {:?}",
            vendor.platform,
            vendor.clip_space_near_z,
            uniform_buffer.word_alignment(),
            config.antialiasing
        );

        Self {
            render_cache,
            render_graph: RenderGraph::new(),
            render_inst_manager: RenderInstManager::new(uniform_buffer),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn push_template_render_inst(&mut self) -> &mut RenderInst {
        self.render_inst_manager.push_template_render_inst()
    }

    /// Backbuffer parameters for a `width` x `height` frame.
    pub fn render_input(&self, width: u32, height: u32) -> RenderInput {
        self.config.render_input(width, height)
    }

    /// Clear values for new targets, following the configured depth convention.
    pub fn attachment_clear(&self, color: Option<Color>) -> AttachmentClear {
        make_attachment_clear_descriptor_with(color, self.config.reversed_depth)
    }

    /// Uploads this frame's uniform data. Call once, after the last
    /// allocation and before executing the graph.
    ///
    /// If the upload outgrew the device buffer, cached bindings pointing at
    /// the old buffer are destroyed.
    pub fn prepare_to_render(&mut self, device: &mut dyn GfxDevice) {
        let previous = self.render_inst_manager.uniform_buffer().buffer();
        self.render_inst_manager.uniform_buffer_mut().flush(device);
        let current = self.render_inst_manager.uniform_buffer().buffer();

        if let Some(old) = previous {
            if current != Some(old) {
                self.render_cache.destroy_bindings_using_buffer(device, old);
            }
        }
    }

    pub fn destroy(&mut self, device: &mut dyn GfxDevice) {
        self.render_inst_manager.destroy(device);
        self.render_cache.destroy(device);
        self.render_graph.destroy(device);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::MockDevice;
    use crate::device::{BindingLayoutDescriptor, ProgramDescriptor, ProgramId, TextureId};
    use crate::graph::AttachmentSlot;
    use crate::helpers::make_backbuffer_desc_simple;
    use crate::inst::{RendererLayer, SortKey};

    const BACKBUFFER: TextureId = TextureId(500);

    fn program(helper: &mut RenderHelper, device: &mut MockDevice) -> ProgramId {
        helper.render_cache.create_program(
            device,
            &ProgramDescriptor {
                vertex_source: "triangle.vs".to_string(),
                fragment_source: "triangle.fs".to_string(),
            },
        )
    }

    /// One triangle with a color uniform into a cleared backbuffer.
    fn render_frame(helper: &mut RenderHelper, device: &mut MockDevice, program: ProgramId, color: [f32; 4]) {
        let template = helper.push_template_render_inst();
        template.set_binding_layouts(&[BindingLayoutDescriptor {
            num_uniform_buffers: 1,
            num_samplers: 0,
        }]);
        template.set_program(program);
        template.set_input_layout_and_state(None, None);

        let insts = &mut helper.render_inst_manager;
        let id = insts.new_render_inst();
        insts.allocate_uniform_buffer(id, 0, 4);
        insts.map_uniform_buffer_f32(id, 0).copy_from_slice(&color);
        insts[id].draw_primitives(3, 0);
        insts[id].sort_key = SortKey::opaque(RendererLayer::OPAQUE, program.0 as u16);
        insts.submit_render_inst(id);
        insts.pop_template_render_inst();

        helper.prepare_to_render(device);

        let input = helper.render_input(640, 480);
        let clear = helper.attachment_clear(Some(Color::OPAQUE_BLACK));
        let mut builder = helper.render_graph.new_graph_builder();
        let main = builder.create_render_target(
            &make_backbuffer_desc_simple(AttachmentSlot::Color0, &input, Some(&clear)),
            "Main Color",
        );

        let insts = &mut helper.render_inst_manager;
        let cache = &mut helper.render_cache;
        builder.push_pass(move |pass| {
            pass.set_debug_name("Main");
            pass.attach_render_target(AttachmentSlot::Color0, main);
            pass.exec(move |renderer| insts.draw_on_pass_renderer(cache, renderer));
        });
        builder.resolve_render_target_to_external_texture(main, BACKBUFFER);

        let stats = helper.render_graph.execute(device, builder);
        assert_eq!(stats.targets_acquired, 1);
        assert_eq!(stats.resolves, 1);

        helper.render_inst_manager.reset_render_insts();
    }

    #[test]
    fn full_frame_draws_and_resolves() {
        let mut device = MockDevice::with_alignment(16);
        let mut helper = RenderHelper::new(&device, RenderConfig::default());
        let program = program(&mut helper, &mut device);

        render_frame(&mut helper, &mut device, program, [1.0, 0.5, 0.25, 1.0]);

        assert_eq!(device.draw_count(), 1);
        assert_eq!(device.resolves.len(), 1);
        assert_eq!(device.resolves[0].1, BACKBUFFER);
        assert_eq!(device.uploads.len(), 1);
        assert_eq!(&device.uploads[0].words()[..4], &[1.0f32, 0.5, 0.25, 1.0]);

        let pass = &device.passes()[0];
        assert_eq!(pass.label, "Main");
        assert_eq!(pass.color_attachments[0].and_then(|c| c.clear), Some(Color::OPAQUE_BLACK));
    }

    #[test]
    fn steady_state_frames_reuse_device_objects() {
        let mut device = MockDevice::with_alignment(16);
        let mut helper = RenderHelper::new(&device, RenderConfig::default());
        let program = program(&mut helper, &mut device);

        for frame in 0..3 {
            render_frame(&mut helper, &mut device, program, [frame as f32; 4]);
        }

        assert_eq!(device.draw_count(), 3);
        assert_eq!(device.targets_created.len(), 1);
        assert_eq!(device.pipelines_created.len(), 1);
        assert_eq!(device.bindings_created.len(), 1);
        assert_eq!(device.buffers_created.len(), 1);
        assert_eq!(device.uploads.len(), 3);
        assert_eq!(device.uploads[2].words()[0], 2.0);
    }

    #[test]
    fn outgrown_uniform_buffer_drops_stale_bindings() {
        let mut device = MockDevice::with_alignment(16);
        let config = RenderConfig {
            initial_uniform_words: 16,
            ..RenderConfig::default()
        };
        let mut helper = RenderHelper::new(&device, config);
        let program = program(&mut helper, &mut device);
        render_frame(&mut helper, &mut device, program, [1.0; 4]);
        assert_eq!(helper.render_cache.num_bindings(), 1);

        helper
            .push_template_render_inst()
            .set_binding_layouts(&[BindingLayoutDescriptor {
                num_uniform_buffers: 1,
                num_samplers: 0,
            }]);
        let insts = &mut helper.render_inst_manager;
        for _ in 0..2 {
            let id = insts.new_render_inst();
            insts.allocate_uniform_buffer(id, 0, 4);
        }
        insts.pop_template_render_inst();
        helper.prepare_to_render(&mut device);

        assert_eq!(device.buffers_created.len(), 2);
        assert_eq!(device.bindings_destroyed, 1);
        assert_eq!(helper.render_cache.num_bindings(), 0);
        helper.render_inst_manager.reset_render_insts();
    }

    #[test]
    fn attachment_clear_follows_depth_convention() {
        let device = MockDevice::default();
        let reversed = RenderHelper::new(&device, RenderConfig::default());
        assert_eq!(reversed.attachment_clear(None).depth, 0.0);

        let conventional = RenderHelper::new(
            &device,
            RenderConfig {
                reversed_depth: false,
                ..RenderConfig::default()
            },
        );
        assert_eq!(conventional.attachment_clear(None).depth, 1.0);
    }

    #[test]
    fn caller_supplied_cache_is_used() {
        let mut device = MockDevice::default();
        let mut cache = RenderCache::new();
        let shared = cache.create_program(
            &mut device,
            &ProgramDescriptor {
                vertex_source: "triangle.vs".to_string(),
                fragment_source: "triangle.fs".to_string(),
            },
        );

        let mut helper = RenderHelper::with_cache(&device, RenderConfig::default(), cache);
        assert_eq!(program(&mut helper, &mut device), shared);
        assert_eq!(device.programs_created, 1);
    }

    #[test]
    fn destroy_releases_all_device_objects() {
        let mut device = MockDevice::with_alignment(16);
        let mut helper = RenderHelper::new(&device, RenderConfig::default());
        let program = program(&mut helper, &mut device);
        render_frame(&mut helper, &mut device, program, [0.0; 4]);

        helper.destroy(&mut device);
        assert_eq!(device.buffers_destroyed.len(), 1);
        assert_eq!(device.pipelines_destroyed, 1);
        assert_eq!(device.programs_destroyed, 1);
        assert_eq!(device.targets_destroyed.len(), 1);
        assert_eq!(helper.render_graph.pooled_targets(), 0);
    }
}
