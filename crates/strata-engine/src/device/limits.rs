/// Capabilities the core needs from the device.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeviceLimits {
    /// Minimum alignment of a dynamic uniform offset, in 32-bit words.
    ///
    /// Every dynamic uniform allocation is rounded up to a multiple of this.
    pub uniform_buffer_word_alignment: u32,
}

impl Default for DeviceLimits {
    fn default() -> Self {
        // 256 bytes, the common requirement on desktop hardware.
        Self {
            uniform_buffer_word_alignment: 64,
        }
    }
}

impl From<&wgpu::Limits> for DeviceLimits {
    fn from(limits: &wgpu::Limits) -> Self {
        Self {
            uniform_buffer_word_alignment: (limits.min_uniform_buffer_offset_alignment / 4).max(1),
        }
    }
}

/// Clip-space depth range convention of the device.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClipSpaceNearZ {
    /// Near plane at -1 (OpenGL style).
    NegativeOne,
    /// Near plane at 0 (Vulkan, Metal, D3D, WebGPU).
    Zero,
}

/// Vendor / convention query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorInfo {
    pub platform: String,
    pub clip_space_near_z: ClipSpaceNearZ,
}

impl VendorInfo {
    /// Vendor info for a wgpu adapter. wgpu always uses a `[0, 1]` depth range.
    pub fn from_wgpu_adapter(info: &wgpu::AdapterInfo) -> Self {
        Self {
            platform: format!("wgpu/{:?} {}", info.backend, info.name),
            clip_space_near_z: ClipSpaceNearZ::Zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgpu_alignment_converts_to_words() {
        let limits = wgpu::Limits {
            min_uniform_buffer_offset_alignment: 256,
            ..wgpu::Limits::default()
        };
        assert_eq!(DeviceLimits::from(&limits).uniform_buffer_word_alignment, 64);
    }
}
