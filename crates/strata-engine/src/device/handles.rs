//! Opaque ids for backend-owned objects.
//!
//! The backend chooses the numeric values; the core only compares and hashes
//! them.

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);
    };
}

resource_id!(
    /// Device buffer (vertex, index or uniform storage).
    BufferId
);
resource_id!(
    /// Linked shader program.
    ProgramId
);
resource_id!(
    /// Vertex/index layout description.
    InputLayoutId
);
resource_id!(
    /// Concrete vertex/index buffer bindings for an input layout.
    InputStateId
);
resource_id!(
    /// Resource bindings (uniform buffers + sampled textures) for one group.
    BindingsId
);
resource_id!(
    /// Render pipeline (program + layout + fixed-function state).
    PipelineId
);
resource_id!(
    /// Physical render surface owned by the render graph pool.
    RenderTargetId
);
resource_id!(
    /// Caller-owned texture, e.g. a swap chain image.
    TextureId
);
