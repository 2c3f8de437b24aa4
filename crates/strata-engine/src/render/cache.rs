use std::collections::HashMap;
use std::hash::Hash;

use crate::device::{
    BindingsDescriptor, BindingsId, BufferId, GfxDevice, InputLayoutDescriptor, InputLayoutId, PipelineId,
    ProgramDescriptor, ProgramId, RenderPipelineDescriptor,
};

/// Device objects memoized by descriptor.
///
/// Lookups are by value, so two equal descriptors always resolve to the same
/// object. Everything lives until [`destroy`](Self::destroy).
#[derive(Debug, Default)]
pub struct RenderCache {
    programs: HashMap<ProgramDescriptor, ProgramId>,
    input_layouts: HashMap<InputLayoutDescriptor, InputLayoutId>,
    bindings: HashMap<BindingsDescriptor, BindingsId>,
    pipelines: HashMap<RenderPipelineDescriptor, PipelineId>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_program(&mut self, device: &mut dyn GfxDevice, desc: &ProgramDescriptor) -> ProgramId {
        get_or_create(&mut self.programs, desc, || device.create_program(desc))
    }

    pub fn create_input_layout(&mut self, device: &mut dyn GfxDevice, desc: &InputLayoutDescriptor) -> InputLayoutId {
        get_or_create(&mut self.input_layouts, desc, || device.create_input_layout(desc))
    }

    pub fn create_bindings(&mut self, device: &mut dyn GfxDevice, desc: &BindingsDescriptor) -> BindingsId {
        get_or_create(&mut self.bindings, desc, || device.create_bindings(desc))
    }

    pub fn create_render_pipeline(&mut self, device: &mut dyn GfxDevice, desc: &RenderPipelineDescriptor) -> PipelineId {
        get_or_create(&mut self.pipelines, desc, || {
            log::debug!(
                "render cache: new pipeline for {:?} ({} color targets, x{})",
                desc.program,
                desc.color_formats.len(),
                desc.sample_count
            );
            device.create_render_pipeline(desc)
        })
    }

    /// Destroys cached bindings that reference `buffer`, returning how many
    /// were dropped. Call when the buffer itself is destroyed.
    pub fn destroy_bindings_using_buffer(&mut self, device: &mut dyn GfxDevice, buffer: BufferId) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|desc, bindings| {
            let stale = desc.uniform_buffers.iter().any(|b| b.buffer == buffer);
            if stale {
                device.destroy_bindings(*bindings);
            }
            !stale
        });
        let dropped = before - self.bindings.len();
        if dropped > 0 {
            log::debug!("render cache: dropped {dropped} bindings for replaced {buffer:?}");
        }
        dropped
    }

    #[inline]
    pub fn num_pipelines(&self) -> usize {
        self.pipelines.len()
    }

    #[inline]
    pub fn num_bindings(&self) -> usize {
        self.bindings.len()
    }

    /// Destroys every cached object. The cache is empty and reusable afterwards.
    pub fn destroy(&mut self, device: &mut dyn GfxDevice) {
        for (_, pipeline) in self.pipelines.drain() {
            device.destroy_render_pipeline(pipeline);
        }
        for (_, bindings) in self.bindings.drain() {
            device.destroy_bindings(bindings);
        }
        for (_, layout) in self.input_layouts.drain() {
            device.destroy_input_layout(layout);
        }
        for (_, program) in self.programs.drain() {
            device.destroy_program(program);
        }
    }
}

fn get_or_create<K, V>(map: &mut HashMap<K, V>, key: &K, create: impl FnOnce() -> V) -> V
where
    K: Eq + Hash + Clone,
    V: Copy,
{
    if let Some(&value) = map.get(key) {
        return value;
    }
    let value = create();
    map.insert(key.clone(), value);
    value
}
