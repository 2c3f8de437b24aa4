use crate::device::TextureId;

use super::{AttachmentSlot, PassRenderer, RenderTargetDescription};

const SLOT_COUNT: usize = AttachmentSlot::COLOR_COUNT + 1;

pub(crate) type PassExec<'a> = Box<dyn FnOnce(&mut PassRenderer<'_>) + 'a>;

/// Frame-scoped reference to a logical render target.
///
/// Only valid with the [`GraphBuilder`] that created it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderTargetHandle {
    pub(crate) build: u32,
    pub(crate) index: u32,
}

#[derive(Debug)]
pub(crate) struct TargetDecl {
    pub desc: RenderTargetDescription,
    pub label: String,
}

pub(crate) struct PassDecl<'a> {
    pub label: String,
    pub attachments: [Option<RenderTargetHandle>; SLOT_COUNT],
    pub exec: Option<PassExec<'a>>,
}

/// Declarative description of one frame: targets, passes and external resolves.
///
/// Nothing touches the device until the builder is handed to
/// [`RenderGraph::execute`](super::RenderGraph::execute).
pub struct GraphBuilder<'a> {
    build: u32,
    pub(crate) targets: Vec<TargetDecl>,
    pub(crate) passes: Vec<PassDecl<'a>>,
    pub(crate) resolves: Vec<(RenderTargetHandle, TextureId)>,
}

impl<'a> GraphBuilder<'a> {
    pub(crate) fn new(build: u32) -> Self {
        Self {
            build,
            targets: Vec::new(),
            passes: Vec::new(),
            resolves: Vec::new(),
        }
    }

    pub fn create_render_target(&mut self, desc: &RenderTargetDescription, label: &str) -> RenderTargetHandle {
        assert!(
            desc.width > 0 && desc.height > 0,
            "render target '{label}' has zero size ({}x{})",
            desc.width,
            desc.height
        );
        assert!(desc.sample_count > 0, "render target '{label}' has zero samples");

        let handle = RenderTargetHandle {
            build: self.build,
            index: self.targets.len() as u32,
        };
        self.targets.push(TargetDecl {
            desc: *desc,
            label: label.to_string(),
        });
        handle
    }

    pub fn render_target_description(&self, handle: RenderTargetHandle) -> &RenderTargetDescription {
        &target_decl(&self.targets, self.build, handle).desc
    }

    /// Declares a pass. `configure` runs immediately; the callback it registers
    /// with [`PassBuilder::exec`] runs during execute.
    pub fn push_pass(&mut self, configure: impl FnOnce(&mut PassBuilder<'_, 'a>)) {
        let mut pass = PassBuilder {
            targets: &self.targets,
            build: self.build,
            decl: PassDecl {
                label: String::new(),
                attachments: [None; SLOT_COUNT],
                exec: None,
            },
        };
        configure(&mut pass);
        let decl = pass.decl;
        self.passes.push(decl);
    }

    /// Copies `handle` into `texture` after the last pass that renders to it.
    ///
    /// # Panics
    /// Panics if `handle` already has a resolve this frame.
    pub fn resolve_render_target_to_external_texture(&mut self, handle: RenderTargetHandle, texture: TextureId) {
        let label = &target_decl(&self.targets, self.build, handle).label;
        assert!(
            !self.resolves.iter().any(|(h, _)| *h == handle),
            "render target '{label}' is already resolved this frame"
        );
        self.resolves.push((handle, texture));
    }

    #[inline]
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }
}

/// Configures one pass inside [`GraphBuilder::push_pass`].
pub struct PassBuilder<'g, 'a> {
    targets: &'g [TargetDecl],
    build: u32,
    decl: PassDecl<'a>,
}

impl<'a> PassBuilder<'_, 'a> {
    pub fn set_debug_name(&mut self, name: &str) {
        self.decl.label.clear();
        self.decl.label.push_str(name);
    }

    /// # Panics
    /// Panics if the handle belongs to another builder, the slot is taken, the
    /// format does not suit the slot, or the sample count differs from targets
    /// already attached.
    pub fn attach_render_target(&mut self, slot: AttachmentSlot, handle: RenderTargetHandle) {
        let target = target_decl(self.targets, self.build, handle);
        let label = &target.label;
        let pass = &self.decl.label;

        assert!(
            self.decl.attachments[slot.index()].is_none(),
            "pass '{pass}': slot {slot:?} is already attached"
        );
        assert!(
            !self.decl.attachments.contains(&Some(handle)),
            "pass '{pass}': render target '{label}' is attached twice"
        );

        let is_depth = target.desc.pixel_format.is_depth();
        match slot {
            AttachmentSlot::DepthStencil => assert!(
                is_depth,
                "pass '{pass}': render target '{label}' has a color format but is attached to {slot:?}"
            ),
            _ => assert!(
                !is_depth,
                "pass '{pass}': render target '{label}' has a depth format but is attached to {slot:?}"
            ),
        }

        let samples = target.desc.sample_count;
        for other in self.decl.attachments.iter().flatten() {
            let other = &self.targets[other.index as usize];
            assert!(
                other.desc.sample_count == samples,
                "pass '{pass}': render target '{label}' has {samples} samples but '{}' has {}",
                other.label,
                other.desc.sample_count
            );
        }

        self.decl.attachments[slot.index()] = Some(handle);
    }

    /// Registers the body of the pass. It runs once, during execute.
    ///
    /// # Panics
    /// Panics if a callback was already registered.
    pub fn exec(&mut self, callback: impl FnOnce(&mut PassRenderer<'_>) + 'a) {
        assert!(
            self.decl.exec.is_none(),
            "pass '{}' already has an exec callback",
            self.decl.label
        );
        self.decl.exec = Some(Box::new(callback));
    }
}

pub(crate) fn target_decl(targets: &[TargetDecl], build: u32, handle: RenderTargetHandle) -> &TargetDecl {
    match targets.get(handle.index as usize) {
        Some(target) if handle.build == build => target,
        _ => panic!("render target handle {handle:?} was not declared by this graph builder"),
    }
}
