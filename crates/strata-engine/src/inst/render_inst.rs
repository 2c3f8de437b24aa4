use crate::device::{
    BindingLayoutDescriptor, InputLayoutId, InputStateId, PrimitiveTopology, ProgramId, TextureId,
};

use super::SortKey;

/// Dynamic-uniform reservation recorded on an instruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UniformSlot {
    pub word_offset: u32,
    pub word_count: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawCall {
    Primitives { vertex_count: u32, first_vertex: u32 },
    Indexed { index_count: u32, first_index: u32 },
}

/// One deferred draw: the state it needs plus the draw itself.
///
/// Instructions are created through
/// [`RenderInstManager`](super::RenderInstManager), which copies the current
/// template into each new one. Every field set here overrides the inherited value.
#[derive(Debug, Clone, Default)]
pub struct RenderInst {
    pub sort_key: SortKey,

    program: Option<ProgramId>,
    input_layout: Option<InputLayoutId>,
    input_state: Option<InputStateId>,
    topology: PrimitiveTopology,

    binding_layouts: Vec<BindingLayoutDescriptor>,
    uniform_slots: Vec<Option<UniformSlot>>,
    samplers: Vec<Option<TextureId>>,

    draw: Option<DrawCall>,
}

impl RenderInst {
    pub fn set_program(&mut self, program: ProgramId) {
        self.program = Some(program);
    }

    #[inline]
    pub fn program(&self) -> Option<ProgramId> {
        self.program
    }

    /// `layout: None` draws without vertex input (e.g. full-screen triangles).
    pub fn set_input_layout_and_state(
        &mut self,
        layout: Option<InputLayoutId>,
        state: Option<InputStateId>,
    ) {
        self.input_layout = layout;
        self.input_state = state;
    }

    #[inline]
    pub fn input_layout(&self) -> Option<InputLayoutId> {
        self.input_layout
    }

    #[inline]
    pub fn input_state(&self) -> Option<InputStateId> {
        self.input_state
    }

    pub fn set_topology(&mut self, topology: PrimitiveTopology) {
        self.topology = topology;
    }

    #[inline]
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Sets the binding group shapes.
    ///
    /// Uniform slots and samplers are laid out across the groups in order.
    /// Existing entries are kept where the new shape still has room for them.
    pub fn set_binding_layouts(&mut self, layouts: &[BindingLayoutDescriptor]) {
        self.binding_layouts.clear();
        self.binding_layouts.extend_from_slice(layouts);

        let uniforms: u32 = layouts.iter().map(|l| l.num_uniform_buffers).sum();
        let samplers: u32 = layouts.iter().map(|l| l.num_samplers).sum();
        self.uniform_slots.resize(uniforms as usize, None);
        self.samplers.resize(samplers as usize, None);
    }

    #[inline]
    pub fn binding_layouts(&self) -> &[BindingLayoutDescriptor] {
        &self.binding_layouts
    }

    /// Binds textures starting at sampler slot 0.
    ///
    /// # Panics
    /// Panics if more textures are given than the binding layouts declare.
    pub fn set_samplers(&mut self, textures: &[Option<TextureId>]) {
        assert!(
            textures.len() <= self.samplers.len(),
            "{} samplers bound but binding layouts declare {}",
            textures.len(),
            self.samplers.len()
        );
        self.samplers[..textures.len()].copy_from_slice(textures);
    }

    #[inline]
    pub fn samplers(&self) -> &[Option<TextureId>] {
        &self.samplers
    }

    #[inline]
    pub fn uniform_slot(&self, binding_index: u32) -> Option<UniformSlot> {
        self.uniform_slots.get(binding_index as usize).copied().flatten()
    }

    #[inline]
    pub fn uniform_slots(&self) -> &[Option<UniformSlot>] {
        &self.uniform_slots
    }

    pub(crate) fn set_uniform_slot(&mut self, binding_index: u32, slot: UniformSlot) {
        let declared = self.uniform_slots.len();
        let Some(entry) = self.uniform_slots.get_mut(binding_index as usize) else {
            panic!(
                "uniform binding {binding_index} is out of range: binding layouts declare {declared} uniform buffers"
            );
        };
        *entry = Some(slot);
    }

    pub fn draw_primitives(&mut self, vertex_count: u32, first_vertex: u32) {
        self.draw = Some(DrawCall::Primitives {
            vertex_count,
            first_vertex,
        });
    }

    pub fn draw_indexes(&mut self, index_count: u32, first_index: u32) {
        self.draw = Some(DrawCall::Indexed {
            index_count,
            first_index,
        });
    }

    #[inline]
    pub fn draw_call(&self) -> Option<DrawCall> {
        self.draw
    }
}
