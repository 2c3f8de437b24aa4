use super::{
    BindingsDescriptor, BindingsId, BufferFrequencyHint, BufferId, BufferUsage, DeviceLimits,
    IndexBufferBinding, InputLayoutDescriptor, InputLayoutId, InputStateId, PipelineId,
    ProgramDescriptor, ProgramId, RenderPassDescriptor, RenderPipelineDescriptor,
    RenderTargetDescriptor, RenderTargetId, TextureId, VendorInfo, VertexBufferBinding,
};

/// Backend device as seen by the frame orchestration core.
///
/// Calls are made from a single thread within one frame. Failures inside the
/// backend are its own concern; every method here is infallible.
pub trait GfxDevice {
    fn limits(&self) -> DeviceLimits;
    fn vendor_info(&self) -> VendorInfo;

    fn create_buffer(&mut self, word_count: u32, usage: BufferUsage, hint: BufferFrequencyHint) -> BufferId;
    fn upload_buffer_data(&mut self, buffer: BufferId, dst_byte_offset: u32, data: &[u8]);
    fn destroy_buffer(&mut self, buffer: BufferId);

    fn create_program(&mut self, desc: &ProgramDescriptor) -> ProgramId;
    fn destroy_program(&mut self, program: ProgramId);

    fn create_input_layout(&mut self, desc: &InputLayoutDescriptor) -> InputLayoutId;
    fn destroy_input_layout(&mut self, layout: InputLayoutId);

    fn create_input_state(
        &mut self,
        layout: InputLayoutId,
        vertex_buffers: &[VertexBufferBinding],
        index_buffer: Option<IndexBufferBinding>,
    ) -> InputStateId;
    fn destroy_input_state(&mut self, state: InputStateId);

    fn create_bindings(&mut self, desc: &BindingsDescriptor) -> BindingsId;
    fn destroy_bindings(&mut self, bindings: BindingsId);

    fn create_render_pipeline(&mut self, desc: &RenderPipelineDescriptor) -> PipelineId;
    fn destroy_render_pipeline(&mut self, pipeline: PipelineId);

    fn create_render_target(&mut self, desc: &RenderTargetDescriptor) -> RenderTargetId;
    fn destroy_render_target(&mut self, target: RenderTargetId);

    /// Begins recording a pass. The returned encoder does not borrow the device.
    fn create_render_pass(&mut self, desc: &RenderPassDescriptor) -> Box<dyn RenderPass>;
    /// Ends and submits a pass created by [`GfxDevice::create_render_pass`].
    fn submit_pass(&mut self, pass: Box<dyn RenderPass>);

    /// Copies (and for multisampled targets, resolves) a render target into a
    /// caller-owned texture.
    fn resolve_render_target(&mut self, src: RenderTargetId, dst: TextureId);
}

/// Command recorder for one active render pass.
pub trait RenderPass {
    fn set_pipeline(&mut self, pipeline: PipelineId);
    fn set_input_state(&mut self, state: Option<InputStateId>);
    /// `dynamic_word_offsets` holds one offset per uniform buffer in the group.
    fn set_bindings(&mut self, group: u32, bindings: BindingsId, dynamic_word_offsets: &[u32]);
    fn draw(&mut self, vertex_count: u32, first_vertex: u32);
    fn draw_indexed(&mut self, index_count: u32, first_index: u32);
}
