use std::ops::{Index, IndexMut};

use bytemuck::Pod;

use crate::device::{
    BindingLayoutDescriptor, BindingsDescriptor, BindingsId, BufferBinding, GfxDevice, InputStateId,
    PipelineId, ProgramId, RenderPass, RenderPipelineDescriptor,
};
use crate::graph::PassRenderer;
use crate::render::RenderCache;
use crate::uniform::DynamicUniformBuffer;

use super::{DrawCall, RenderInst, UniformSlot};

/// Handle to an instruction created this frame.
///
/// Handles are slot indices into the manager's arena and go stale at
/// [`RenderInstManager::reset_render_insts`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct InstId {
    index: u32,
    frame: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ManagerState {
    /// Nothing recorded since the last reset.
    Idle,
    Building,
    /// The list has been drawn; only a reset is accepted.
    Draining,
}

/// Deferred draw list with template inheritance and sort-key ordering.
///
/// Frame protocol:
/// - push a template, set shared state on it
/// - create instructions (each starts as a copy of the template top), allocate
///   their uniform data, submit them
/// - pop the template
/// - flush the uniform buffer, then draw the list from a pass callback
/// - [`reset_render_insts`](Self::reset_render_insts)
///
/// Slot storage survives resets so steady-state frames do not allocate.
#[derive(Debug)]
pub struct RenderInstManager {
    pool: Vec<RenderInst>,
    submitted: Vec<bool>,
    used: usize,
    frame: u32,

    templates: Vec<RenderInst>,
    draw_list: Vec<InstId>,

    uniform_buffer: DynamicUniformBuffer,
    state: ManagerState,
}

#[derive(Default)]
struct BoundState {
    pipeline: Option<PipelineId>,
    input_state: Option<Option<InputStateId>>,
    bindings: Vec<Option<(BindingsId, Vec<u32>)>>,
}

impl RenderInstManager {
    pub fn new(uniform_buffer: DynamicUniformBuffer) -> Self {
        Self {
            pool: Vec::new(),
            submitted: Vec::new(),
            used: 0,
            frame: 0,
            templates: Vec::new(),
            draw_list: Vec::new(),
            uniform_buffer,
            state: ManagerState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> ManagerState {
        self.state
    }

    #[inline]
    pub fn uniform_buffer(&self) -> &DynamicUniformBuffer {
        &self.uniform_buffer
    }

    #[inline]
    pub fn uniform_buffer_mut(&mut self) -> &mut DynamicUniformBuffer {
        &mut self.uniform_buffer
    }

    /// Number of instructions submitted this frame.
    #[inline]
    pub fn submitted_len(&self) -> usize {
        self.draw_list.len()
    }

    // ── templates ─────────────────────────────────────────────────────────

    /// Pushes a copy of the current template (or a blank one) and returns it for editing.
    pub fn push_template_render_inst(&mut self) -> &mut RenderInst {
        self.begin_building("push a template");
        let top = self.templates.last().cloned().unwrap_or_default();
        self.templates.push(top);
        let depth = self.templates.len();
        log::trace!("render insts: push template (depth {depth})");
        self.current_template_mut()
    }

    /// # Panics
    /// Panics without a matching [`push_template_render_inst`](Self::push_template_render_inst).
    pub fn pop_template_render_inst(&mut self) {
        assert!(
            self.templates.pop().is_some(),
            "pop_template_render_inst called without a matching push"
        );
    }

    /// Template stack depth.
    #[inline]
    pub fn template_depth(&self) -> usize {
        self.templates.len()
    }

    /// # Panics
    /// Panics if no template is pushed.
    pub fn current_template_mut(&mut self) -> &mut RenderInst {
        self.templates
            .last_mut()
            .unwrap_or_else(|| panic!("no render inst template is pushed"))
    }

    pub fn allocate_template_uniform_buffer(&mut self, binding_index: u32, word_count: u32) -> u32 {
        self.begin_building("allocate uniform data");
        let word_offset = self.uniform_buffer.allocate(word_count);
        self.current_template_mut().set_uniform_slot(
            binding_index,
            UniformSlot {
                word_offset,
                word_count,
            },
        );
        word_offset
    }

    pub fn map_template_uniform_buffer_f32(&mut self, binding_index: u32) -> &mut [f32] {
        let slot = required_slot(self.current_template_mut(), binding_index);
        self.uniform_buffer.map_f32(slot.word_offset, slot.word_count)
    }

    // ── instructions ──────────────────────────────────────────────────────

    /// Creates an instruction initialized from the current template.
    ///
    /// It is not drawn unless passed to [`submit_render_inst`](Self::submit_render_inst).
    pub fn new_render_inst(&mut self) -> InstId {
        self.begin_building("create a render inst");

        let index = self.used;
        let template = self.templates.last();
        if index < self.pool.len() {
            let slot = &mut self.pool[index];
            match template {
                Some(t) => slot.clone_from(t),
                None => *slot = RenderInst::default(),
            }
            self.submitted[index] = false;
        } else {
            self.pool.push(template.cloned().unwrap_or_default());
            self.submitted.push(false);
        }
        self.used += 1;

        InstId {
            index: index as u32,
            frame: self.frame,
        }
    }

    /// Reserves dynamic uniform space for binding `binding_index` of `inst`.
    /// Returns the word offset.
    pub fn allocate_uniform_buffer(&mut self, inst: InstId, binding_index: u32, word_count: u32) -> u32 {
        self.begin_building("allocate uniform data");
        self.check(inst);
        let word_offset = self.uniform_buffer.allocate(word_count);
        self[inst].set_uniform_slot(
            binding_index,
            UniformSlot {
                word_offset,
                word_count,
            },
        );
        word_offset
    }

    /// Writable view of the uniform data allocated for `binding_index`.
    ///
    /// # Panics
    /// Panics if nothing was allocated for that binding.
    pub fn map_uniform_buffer_f32(&mut self, inst: InstId, binding_index: u32) -> &mut [f32] {
        let slot = required_slot(&self[inst], binding_index);
        self.uniform_buffer.map_f32(slot.word_offset, slot.word_count)
    }

    /// Copies a plain-data block into the uniform data allocated for `binding_index`.
    pub fn write_uniform<T: Pod>(&mut self, inst: InstId, binding_index: u32, value: &T) {
        let slot = required_slot(&self[inst], binding_index);
        let size = std::mem::size_of::<T>();
        assert!(
            size <= slot.word_count as usize * 4,
            "uniform block of {size} bytes does not fit binding {binding_index} ({} words)",
            slot.word_count
        );
        self.uniform_buffer.write(slot.word_offset, value);
    }

    /// Appends `inst` to this frame's draw list.
    ///
    /// # Panics
    /// Panics if `inst` was already submitted.
    pub fn submit_render_inst(&mut self, inst: InstId) {
        self.begin_building("submit a render inst");
        self.check(inst);
        let submitted = &mut self.submitted[inst.index as usize];
        assert!(!*submitted, "render inst {} submitted twice", inst.index);
        *submitted = true;
        self.draw_list.push(inst);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws every submitted instruction into the active pass, ascending by
    /// sort key with ties in submission order.
    ///
    /// Pipelines and bindings are resolved through `cache`. Pipeline, input
    /// state and bindings are only re-set when they differ from the previous
    /// instruction.
    ///
    /// # Panics
    /// Panics if the uniform buffer has unflushed allocations, or an
    /// instruction lacks a program, a draw call, an index source for an
    /// indexed draw, or an allocation for one of its uniform bindings.
    pub fn draw_on_pass_renderer(&mut self, cache: &mut RenderCache, renderer: &mut PassRenderer<'_>) {
        assert!(
            self.uniform_buffer.words_allocated() == 0,
            "uniform buffer has {} unflushed words; call prepare_to_render before drawing",
            self.uniform_buffer.words_allocated()
        );
        self.state = ManagerState::Draining;

        let pool = &self.pool;
        self.draw_list
            .sort_by(|a, b| pool[a.index as usize].sort_key.cmp(&pool[b.index as usize].sort_key));

        let device: &mut dyn GfxDevice = &mut *renderer.device;
        let pass: &mut dyn RenderPass = &mut *renderer.pass;
        let attachments = renderer.attachments;
        let uniform_buffer = self.uniform_buffer.buffer();

        // Scratch state reused across instructions.
        let mut bound = BoundState::default();
        let mut pipeline_desc: Option<RenderPipelineDescriptor> = None;
        let mut bindings_desc = BindingsDescriptor {
            layout: BindingLayoutDescriptor::default(),
            uniform_buffers: Vec::new(),
            samplers: Vec::new(),
        };
        let mut offsets: Vec<u32> = Vec::new();

        for id in &self.draw_list {
            let inst = &self.pool[id.index as usize];

            let Some(program) = inst.program() else {
                panic!("render inst {} has no program", id.index);
            };
            let Some(draw) = inst.draw_call() else {
                panic!("render inst {} has no draw call", id.index);
            };
            if matches!(draw, DrawCall::Indexed { .. }) {
                assert!(
                    inst.input_state().is_some(),
                    "render inst {} draws indexed without an input state",
                    id.index
                );
            }

            let pipeline_matches = bound.pipeline.is_some()
                && pipeline_desc
                    .as_ref()
                    .is_some_and(|desc| same_pipeline_state(desc, program, inst));
            if !pipeline_matches {
                let desc = pipeline_desc.get_or_insert_with(|| RenderPipelineDescriptor {
                    program,
                    input_layout: None,
                    binding_layouts: Vec::new(),
                    topology: inst.topology(),
                    color_formats: attachments.color_formats.clone(),
                    depth_stencil_format: attachments.depth_stencil_format,
                    sample_count: attachments.sample_count,
                });
                desc.program = program;
                desc.input_layout = inst.input_layout();
                desc.topology = inst.topology();
                desc.binding_layouts.clear();
                desc.binding_layouts.extend_from_slice(inst.binding_layouts());

                let pipeline = cache.create_render_pipeline(device, desc);
                if bound.pipeline != Some(pipeline) {
                    pass.set_pipeline(pipeline);
                    bound.pipeline = Some(pipeline);
                }
            }

            if bound.input_state != Some(inst.input_state()) {
                pass.set_input_state(inst.input_state());
                bound.input_state = Some(inst.input_state());
            }

            let mut uniform_base = 0;
            let mut sampler_base = 0;
            for (group, layout) in inst.binding_layouts().iter().enumerate() {
                let uniform_count = layout.num_uniform_buffers as usize;
                let sampler_count = layout.num_samplers as usize;
                let slots = &inst.uniform_slots()[uniform_base..uniform_base + uniform_count];
                let samplers = &inst.samplers()[sampler_base..sampler_base + sampler_count];
                uniform_base += uniform_count;
                sampler_base += sampler_count;

                bindings_desc.layout = *layout;
                bindings_desc.uniform_buffers.clear();
                bindings_desc.samplers.clear();
                bindings_desc.samplers.extend_from_slice(samplers);
                offsets.clear();
                for (i, slot) in slots.iter().enumerate() {
                    let Some(slot) = slot else {
                        panic!(
                            "render inst {} has no uniform allocation for binding {}",
                            id.index,
                            uniform_base - uniform_count + i
                        );
                    };
                    let Some(buffer) = uniform_buffer else {
                        panic!("dynamic uniform buffer has never been flushed");
                    };
                    bindings_desc.uniform_buffers.push(BufferBinding {
                        buffer,
                        word_count: slot.word_count,
                    });
                    offsets.push(slot.word_offset);
                }

                let bindings = cache.create_bindings(device, &bindings_desc);

                if bound.bindings.len() <= group {
                    bound.bindings.resize(group + 1, None);
                }
                let current = &mut bound.bindings[group];
                let unchanged = current
                    .as_ref()
                    .is_some_and(|(b, o)| *b == bindings && *o == offsets);
                if !unchanged {
                    pass.set_bindings(group as u32, bindings, &offsets);
                    match current {
                        Some((bound_bindings, bound_offsets)) => {
                            *bound_bindings = bindings;
                            bound_offsets.clone_from(&offsets);
                        }
                        None => *current = Some((bindings, offsets.clone())),
                    }
                }
            }

            match draw {
                DrawCall::Primitives {
                    vertex_count,
                    first_vertex,
                } => pass.draw(vertex_count, first_vertex),
                DrawCall::Indexed {
                    index_count,
                    first_index,
                } => pass.draw_indexed(index_count, first_index),
            }
        }

        log::trace!("render insts: drew {} instructions", self.draw_list.len());
    }

    /// Clears the draw list and recycles all slots. Call once per frame,
    /// including frames that were abandoned before drawing.
    ///
    /// Uniform data that was never flushed is discarded.
    ///
    /// # Panics
    /// Panics if templates are still pushed.
    pub fn reset_render_insts(&mut self) {
        assert!(
            self.templates.is_empty(),
            "render inst templates unbalanced at reset: {} still pushed",
            self.templates.len()
        );
        self.draw_list.clear();
        self.uniform_buffer.rewind();
        self.used = 0;
        self.frame = self.frame.wrapping_add(1);
        self.state = ManagerState::Idle;
    }

    /// Releases the uniform buffer's device storage.
    pub fn destroy(&mut self, device: &mut dyn GfxDevice) {
        self.uniform_buffer.destroy(device);
    }

    fn begin_building(&mut self, action: &str) {
        assert!(
            self.state != ManagerState::Draining,
            "cannot {action} while the draw list is draining; reset first"
        );
        self.state = ManagerState::Building;
    }

    fn check(&self, inst: InstId) {
        assert!(
            inst.frame == self.frame && (inst.index as usize) < self.used,
            "render inst handle {} is from a previous frame",
            inst.index
        );
    }
}

impl Index<InstId> for RenderInstManager {
    type Output = RenderInst;

    fn index(&self, inst: InstId) -> &RenderInst {
        self.check(inst);
        &self.pool[inst.index as usize]
    }
}

impl IndexMut<InstId> for RenderInstManager {
    fn index_mut(&mut self, inst: InstId) -> &mut RenderInst {
        self.check(inst);
        &mut self.pool[inst.index as usize]
    }
}

/// Whether `desc` already describes the pipeline `inst` needs in this pass.
fn same_pipeline_state(desc: &RenderPipelineDescriptor, program: ProgramId, inst: &RenderInst) -> bool {
    desc.program == program
        && desc.input_layout == inst.input_layout()
        && desc.topology == inst.topology()
        && desc.binding_layouts.as_slice() == inst.binding_layouts()
}

fn required_slot(inst: &RenderInst, binding_index: u32) -> UniformSlot {
    inst.uniform_slot(binding_index)
        .unwrap_or_else(|| panic!("uniform binding {binding_index} has no allocation"))
}
