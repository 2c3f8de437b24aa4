//! Recording device for unit tests.
//!
//! Hands out sequential ids and records everything the core asks for, so
//! scheduling and draw behaviour can be asserted without a GPU.

use std::cell::RefCell;
use std::rc::Rc;

use super::{
    BindingsDescriptor, BindingsId, BufferFrequencyHint, BufferId, BufferUsage, ClipSpaceNearZ,
    DeviceLimits, GfxDevice, IndexBufferBinding, InputLayoutDescriptor, InputLayoutId,
    InputStateId, PipelineId, ProgramDescriptor, ProgramId, RenderPass, RenderPassDescriptor,
    RenderPipelineDescriptor, RenderTargetDescriptor, RenderTargetId, TextureId, VendorInfo,
    VertexBufferBinding,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PassCommand {
    Begin(RenderPassDescriptor),
    SetPipeline(PipelineId),
    SetInputState(Option<InputStateId>),
    SetBindings {
        group: u32,
        bindings: BindingsId,
        offsets: Vec<u32>,
    },
    Draw {
        count: u32,
        first: u32,
    },
    DrawIndexed {
        count: u32,
        first: u32,
    },
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Upload {
    pub buffer: BufferId,
    pub byte_offset: u32,
    pub data: Vec<u8>,
}

impl Upload {
    /// Uploaded bytes reinterpreted as little-endian `f32` words.
    pub fn words(&self) -> Vec<f32> {
        self.data
            .chunks_exact(4)
            .map(|w| f32::from_le_bytes([w[0], w[1], w[2], w[3]]))
            .collect()
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockDevice {
    pub limits: DeviceLimits,
    next_id: u32,

    pub buffers_created: Vec<(BufferId, u32, BufferUsage)>,
    pub buffers_destroyed: Vec<BufferId>,
    pub uploads: Vec<Upload>,

    pub programs_created: usize,
    pub programs_destroyed: usize,
    pub input_layouts_created: usize,
    pub bindings_created: Vec<BindingsDescriptor>,
    pub bindings_destroyed: usize,
    pub pipelines_created: Vec<RenderPipelineDescriptor>,
    pub pipelines_destroyed: usize,

    pub targets_created: Vec<(RenderTargetId, RenderTargetDescriptor)>,
    pub targets_destroyed: Vec<RenderTargetId>,
    pub resolves: Vec<(RenderTargetId, TextureId)>,

    pub commands: Rc<RefCell<Vec<PassCommand>>>,
}

impl MockDevice {
    pub fn with_alignment(words: u32) -> Self {
        Self {
            limits: DeviceLimits {
                uniform_buffer_word_alignment: words,
            },
            ..Self::default()
        }
    }

    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Snapshot of all recorded pass commands.
    pub fn commands(&self) -> Vec<PassCommand> {
        self.commands.borrow().clone()
    }

    pub fn draw_count(&self) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| matches!(c, PassCommand::Draw { .. } | PassCommand::DrawIndexed { .. }))
            .count()
    }

    /// Begin descriptors of every submitted pass, in order.
    pub fn passes(&self) -> Vec<RenderPassDescriptor> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|c| match c {
                PassCommand::Begin(desc) => Some(desc.clone()),
                _ => None,
            })
            .collect()
    }
}

struct MockPass {
    commands: Rc<RefCell<Vec<PassCommand>>>,
}

impl MockPass {
    fn push(&self, cmd: PassCommand) {
        self.commands.borrow_mut().push(cmd);
    }
}

impl RenderPass for MockPass {
    fn set_pipeline(&mut self, pipeline: PipelineId) {
        self.push(PassCommand::SetPipeline(pipeline));
    }

    fn set_input_state(&mut self, state: Option<InputStateId>) {
        self.push(PassCommand::SetInputState(state));
    }

    fn set_bindings(&mut self, group: u32, bindings: BindingsId, dynamic_word_offsets: &[u32]) {
        self.push(PassCommand::SetBindings {
            group,
            bindings,
            offsets: dynamic_word_offsets.to_vec(),
        });
    }

    fn draw(&mut self, vertex_count: u32, first_vertex: u32) {
        self.push(PassCommand::Draw {
            count: vertex_count,
            first: first_vertex,
        });
    }

    fn draw_indexed(&mut self, index_count: u32, first_index: u32) {
        self.push(PassCommand::DrawIndexed {
            count: index_count,
            first: first_index,
        });
    }
}

impl GfxDevice for MockDevice {
    fn limits(&self) -> DeviceLimits {
        self.limits
    }

    fn vendor_info(&self) -> VendorInfo {
        VendorInfo {
            platform: "mock".to_string(),
            clip_space_near_z: ClipSpaceNearZ::Zero,
        }
    }

    fn create_buffer(&mut self, word_count: u32, usage: BufferUsage, _hint: BufferFrequencyHint) -> BufferId {
        let id = BufferId(self.next());
        self.buffers_created.push((id, word_count, usage));
        id
    }

    fn upload_buffer_data(&mut self, buffer: BufferId, dst_byte_offset: u32, data: &[u8]) {
        self.uploads.push(Upload {
            buffer,
            byte_offset: dst_byte_offset,
            data: data.to_vec(),
        });
    }

    fn destroy_buffer(&mut self, buffer: BufferId) {
        self.buffers_destroyed.push(buffer);
    }

    fn create_program(&mut self, _desc: &ProgramDescriptor) -> ProgramId {
        self.programs_created += 1;
        ProgramId(self.next())
    }

    fn destroy_program(&mut self, _program: ProgramId) {
        self.programs_destroyed += 1;
    }

    fn create_input_layout(&mut self, _desc: &InputLayoutDescriptor) -> InputLayoutId {
        self.input_layouts_created += 1;
        InputLayoutId(self.next())
    }

    fn destroy_input_layout(&mut self, _layout: InputLayoutId) {}

    fn create_input_state(
        &mut self,
        _layout: InputLayoutId,
        _vertex_buffers: &[VertexBufferBinding],
        _index_buffer: Option<IndexBufferBinding>,
    ) -> InputStateId {
        InputStateId(self.next())
    }

    fn destroy_input_state(&mut self, _state: InputStateId) {}

    fn create_bindings(&mut self, desc: &BindingsDescriptor) -> BindingsId {
        self.bindings_created.push(desc.clone());
        BindingsId(self.next())
    }

    fn destroy_bindings(&mut self, _bindings: BindingsId) {
        self.bindings_destroyed += 1;
    }

    fn create_render_pipeline(&mut self, desc: &RenderPipelineDescriptor) -> PipelineId {
        self.pipelines_created.push(desc.clone());
        PipelineId(self.next())
    }

    fn destroy_render_pipeline(&mut self, _pipeline: PipelineId) {
        self.pipelines_destroyed += 1;
    }

    fn create_render_target(&mut self, desc: &RenderTargetDescriptor) -> RenderTargetId {
        let id = RenderTargetId(self.next());
        self.targets_created.push((id, *desc));
        id
    }

    fn destroy_render_target(&mut self, target: RenderTargetId) {
        self.targets_destroyed.push(target);
    }

    fn create_render_pass(&mut self, desc: &RenderPassDescriptor) -> Box<dyn RenderPass> {
        self.commands.borrow_mut().push(PassCommand::Begin(desc.clone()));
        Box::new(MockPass {
            commands: Rc::clone(&self.commands),
        })
    }

    fn submit_pass(&mut self, _pass: Box<dyn RenderPass>) {
        self.commands.borrow_mut().push(PassCommand::End);
    }

    fn resolve_render_target(&mut self, src: RenderTargetId, dst: TextureId) {
        self.resolves.push((src, dst));
    }
}
