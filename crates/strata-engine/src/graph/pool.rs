use crate::device::{GfxDevice, RenderTargetDescriptor, RenderTargetId};

#[derive(Debug)]
struct PooledTarget {
    id: RenderTargetId,
    desc: RenderTargetDescriptor,
    in_use: bool,
    used_this_frame: bool,
}

/// Physical render surfaces kept across frames, keyed by descriptor.
#[derive(Debug, Default)]
pub(crate) struct TargetPool {
    entries: Vec<PooledTarget>,
}

impl TargetPool {
    /// Returns a free surface matching `desc`, creating one if none is free.
    /// The flag is true when a new surface was created.
    pub fn acquire(&mut self, device: &mut dyn GfxDevice, desc: &RenderTargetDescriptor) -> (RenderTargetId, bool) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| !e.in_use && e.desc == *desc)
        {
            entry.in_use = true;
            entry.used_this_frame = true;
            return (entry.id, false);
        }

        let id = device.create_render_target(desc);
        log::debug!(
            "render graph: created surface {:?} {}x{} x{} ({:?})",
            desc.format,
            desc.width,
            desc.height,
            desc.sample_count,
            id
        );
        self.entries.push(PooledTarget {
            id,
            desc: *desc,
            in_use: true,
            used_this_frame: true,
        });
        (id, true)
    }

    pub fn release(&mut self, id: RenderTargetId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            debug_assert!(entry.in_use, "surface {id:?} released twice");
            entry.in_use = false;
        }
    }

    /// Destroys surfaces that went unused this frame and clears the usage marks.
    /// Returns the number destroyed.
    pub fn end_frame(&mut self, device: &mut dyn GfxDevice) -> usize {
        let before = self.entries.len();
        self.entries.retain_mut(|entry| {
            if entry.used_this_frame {
                entry.used_this_frame = false;
                entry.in_use = false;
                true
            } else {
                device.destroy_render_target(entry.id);
                false
            }
        });
        before - self.entries.len()
    }

    pub fn destroy(&mut self, device: &mut dyn GfxDevice) {
        for entry in self.entries.drain(..) {
            device.destroy_render_target(entry.id);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
