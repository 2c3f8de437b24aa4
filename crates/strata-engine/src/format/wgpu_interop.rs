//! Mapping to wgpu format enums.
//!
//! Three-component texture formats and the packed 5551 format have no wgpu
//! counterpart and map to `None`; callers decide whether to widen or reject
//! them.

use super::{ComponentLayout as C, Format, FormatType as T};

impl Format {
    /// Returns the wgpu texture format for this descriptor, if one exists.
    pub fn to_wgpu_texture_format(self) -> Option<wgpu::TextureFormat> {
        use wgpu::TextureFormat as W;

        // Render-target color formats are always sampled as normalized.
        let norm = self.is_normalized() || self.is_render_target();
        let srgb = self.is_srgb();

        let format = match (self.ty(), self.components()) {
            (T::U8, C::R) if norm => W::R8Unorm,
            (T::U8, C::R) => W::R8Uint,
            (T::U8, C::Rg) if norm => W::Rg8Unorm,
            (T::U8, C::Rg) => W::Rg8Uint,
            (T::U8, C::Rgba) if srgb => W::Rgba8UnormSrgb,
            (T::U8, C::Rgba) if norm => W::Rgba8Unorm,
            (T::U8, C::Rgba) => W::Rgba8Uint,

            (T::S8, C::R) if norm => W::R8Snorm,
            (T::S8, C::R) => W::R8Sint,
            (T::S8, C::Rg) if norm => W::Rg8Snorm,
            (T::S8, C::Rg) => W::Rg8Sint,
            (T::S8, C::Rgba) if norm => W::Rgba8Snorm,
            (T::S8, C::Rgba) => W::Rgba8Sint,

            (T::U16, C::R) if norm => W::R16Unorm,
            (T::U16, C::R) => W::R16Uint,
            (T::U16, C::Rg) if norm => W::Rg16Unorm,
            (T::U16, C::Rg) => W::Rg16Uint,
            (T::U16, C::Rgba) if norm => W::Rgba16Unorm,
            (T::U16, C::Rgba) => W::Rgba16Uint,

            (T::S16, C::R) if norm => W::R16Snorm,
            (T::S16, C::R) => W::R16Sint,
            (T::S16, C::Rg) if norm => W::Rg16Snorm,
            (T::S16, C::Rg) => W::Rg16Sint,
            (T::S16, C::Rgba) if norm => W::Rgba16Snorm,
            (T::S16, C::Rgba) => W::Rgba16Sint,

            (T::F16, C::R) => W::R16Float,
            (T::F16, C::Rg) => W::Rg16Float,
            (T::F16, C::Rgba) => W::Rgba16Float,

            (T::U32, C::R) => W::R32Uint,
            (T::U32, C::Rg) => W::Rg32Uint,
            (T::U32, C::Rgba) => W::Rgba32Uint,
            (T::S32, C::R) => W::R32Sint,
            (T::S32, C::Rg) => W::Rg32Sint,
            (T::S32, C::Rgba) => W::Rgba32Sint,
            (T::F32, C::R) => W::R32Float,
            (T::F32, C::Rg) => W::Rg32Float,
            (T::F32, C::Rgba) => W::Rgba32Float,

            (T::Bc1, _) if srgb => W::Bc1RgbaUnormSrgb,
            (T::Bc1, _) => W::Bc1RgbaUnorm,
            (T::Bc2, _) if srgb => W::Bc2RgbaUnormSrgb,
            (T::Bc2, _) => W::Bc2RgbaUnorm,
            (T::Bc3, _) if srgb => W::Bc3RgbaUnormSrgb,
            (T::Bc3, _) => W::Bc3RgbaUnorm,
            (T::Bc4Unorm, _) => W::Bc4RUnorm,
            (T::Bc4Snorm, _) => W::Bc4RSnorm,
            (T::Bc5Unorm, _) => W::Bc5RgUnorm,
            (T::Bc5Snorm, _) => W::Bc5RgSnorm,

            (T::D24, _) => W::Depth24Plus,
            (T::D24S8, _) => W::Depth24PlusStencil8,
            (T::D32F, _) => W::Depth32Float,
            (T::D32FS8, _) => W::Depth32FloatStencil8,

            _ => return None,
        };

        Some(format)
    }

    /// Returns the wgpu vertex attribute format for this descriptor, if one exists.
    pub fn to_wgpu_vertex_format(self) -> Option<wgpu::VertexFormat> {
        use wgpu::VertexFormat as V;

        let norm = self.is_normalized();

        let format = match (self.ty(), self.components()) {
            (T::F32, C::R) => V::Float32,
            (T::F32, C::Rg) => V::Float32x2,
            (T::F32, C::Rgb) => V::Float32x3,
            (T::F32, C::Rgba) => V::Float32x4,
            (T::F16, C::Rg) => V::Float16x2,
            (T::F16, C::Rgba) => V::Float16x4,

            (T::U32, C::R) => V::Uint32,
            (T::U32, C::Rg) => V::Uint32x2,
            (T::U32, C::Rgb) => V::Uint32x3,
            (T::U32, C::Rgba) => V::Uint32x4,
            (T::S32, C::R) => V::Sint32,
            (T::S32, C::Rg) => V::Sint32x2,
            (T::S32, C::Rgb) => V::Sint32x3,
            (T::S32, C::Rgba) => V::Sint32x4,

            (T::U8, C::Rg) if norm => V::Unorm8x2,
            (T::U8, C::Rg) => V::Uint8x2,
            (T::U8, C::Rgba) if norm => V::Unorm8x4,
            (T::U8, C::Rgba) => V::Uint8x4,
            (T::S8, C::Rg) if norm => V::Snorm8x2,
            (T::S8, C::Rg) => V::Sint8x2,
            (T::S8, C::Rgba) if norm => V::Snorm8x4,
            (T::S8, C::Rgba) => V::Sint8x4,

            (T::U16, C::Rg) if norm => V::Unorm16x2,
            (T::U16, C::Rg) => V::Uint16x2,
            (T::U16, C::Rgba) if norm => V::Unorm16x4,
            (T::U16, C::Rgba) => V::Uint16x4,
            (T::S16, C::Rg) if norm => V::Snorm16x2,
            (T::S16, C::Rg) => V::Sint16x2,
            (T::S16, C::Rgba) if norm => V::Snorm16x4,
            (T::S16, C::Rgba) => V::Sint16x4,

            _ => return None,
        };

        Some(format)
    }
}
