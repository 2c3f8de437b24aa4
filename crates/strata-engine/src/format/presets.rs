use super::{ComponentLayout as C, Format, FormatFlags as F, FormatType as T};

const NORM: F = F::NORMALIZED;
const NONE: F = F::empty();

impl Format {
    pub const F16_RG: Format = Format::new(T::F16, C::Rg, NONE);
    pub const F16_RGB: Format = Format::new(T::F16, C::Rgb, NONE);
    pub const F16_RGBA: Format = Format::new(T::F16, C::Rgba, NONE);
    pub const F32_R: Format = Format::new(T::F32, C::R, NONE);
    pub const F32_RG: Format = Format::new(T::F32, C::Rg, NONE);
    pub const F32_RGB: Format = Format::new(T::F32, C::Rgb, NONE);
    pub const F32_RGBA: Format = Format::new(T::F32, C::Rgba, NONE);
    pub const U8_R: Format = Format::new(T::U8, C::R, NONE);
    pub const U8_R_NORM: Format = Format::new(T::U8, C::R, NORM);
    pub const U8_RG: Format = Format::new(T::U8, C::Rg, NONE);
    pub const U8_RG_NORM: Format = Format::new(T::U8, C::Rg, NORM);
    pub const U8_RGB: Format = Format::new(T::U8, C::Rgb, NONE);
    pub const U8_RGB_NORM: Format = Format::new(T::U8, C::Rgb, NORM);
    pub const U8_RGB_SRGB: Format = Format::new(T::U8, C::Rgb, F::SRGB.union(NORM));
    pub const U8_RGBA: Format = Format::new(T::U8, C::Rgba, NONE);
    pub const U8_RGBA_NORM: Format = Format::new(T::U8, C::Rgba, NORM);
    pub const U8_RGBA_SRGB: Format = Format::new(T::U8, C::Rgba, F::SRGB.union(NORM));
    pub const U16_R: Format = Format::new(T::U16, C::R, NONE);
    pub const U16_R_NORM: Format = Format::new(T::U16, C::R, NORM);
    pub const U16_RG_NORM: Format = Format::new(T::U16, C::Rg, NORM);
    pub const U16_RGB: Format = Format::new(T::U16, C::Rgb, NONE);
    pub const U16_RGBA_NORM: Format = Format::new(T::U16, C::Rgba, NORM);
    pub const U32_R: Format = Format::new(T::U32, C::R, NONE);
    pub const U32_RG: Format = Format::new(T::U32, C::Rg, NONE);
    pub const S8_R: Format = Format::new(T::S8, C::R, NONE);
    pub const S8_R_NORM: Format = Format::new(T::S8, C::R, NORM);
    pub const S8_RG_NORM: Format = Format::new(T::S8, C::Rg, NORM);
    pub const S8_RGB_NORM: Format = Format::new(T::S8, C::Rgb, NORM);
    pub const S8_RGBA_NORM: Format = Format::new(T::S8, C::Rgba, NORM);
    pub const S16_R: Format = Format::new(T::S16, C::R, NONE);
    pub const S16_RG: Format = Format::new(T::S16, C::Rg, NONE);
    pub const S16_RG_NORM: Format = Format::new(T::S16, C::Rg, NORM);
    pub const S16_RGB_NORM: Format = Format::new(T::S16, C::Rgb, NORM);
    pub const S16_RGBA: Format = Format::new(T::S16, C::Rgba, NONE);
    pub const S16_RGBA_NORM: Format = Format::new(T::S16, C::Rgba, NORM);
    pub const S32_R: Format = Format::new(T::S32, C::R, NONE);

    pub const U16_RGBA_5551: Format = Format::new(T::U16Packed5551, C::Rgba, NORM);

    pub const BC1: Format = Format::new(T::Bc1, C::Rgba, NONE);
    pub const BC1_SRGB: Format = Format::new(T::Bc1, C::Rgba, F::SRGB);
    pub const BC2: Format = Format::new(T::Bc2, C::Rgba, NONE);
    pub const BC2_SRGB: Format = Format::new(T::Bc2, C::Rgba, F::SRGB);
    pub const BC3: Format = Format::new(T::Bc3, C::Rgba, NONE);
    pub const BC3_SRGB: Format = Format::new(T::Bc3, C::Rgba, F::SRGB);
    pub const BC4_UNORM: Format = Format::new(T::Bc4Unorm, C::R, NONE);
    pub const BC4_SNORM: Format = Format::new(T::Bc4Snorm, C::R, NONE);
    pub const BC5_UNORM: Format = Format::new(T::Bc5Unorm, C::Rg, NONE);
    pub const BC5_SNORM: Format = Format::new(T::Bc5Snorm, C::Rg, NONE);

    pub const D24: Format = Format::new(T::D24, C::R, F::DEPTH);
    pub const D24_S8: Format = Format::new(T::D24S8, C::Rg, F::DEPTH.union(F::STENCIL));
    pub const D32F: Format = Format::new(T::D32F, C::R, F::DEPTH);
    pub const D32F_S8: Format = Format::new(T::D32FS8, C::Rg, F::DEPTH.union(F::STENCIL));

    // Render-target formats preferred by backends for color attachments.
    pub const U8_RGB_RT: Format = Format::new(T::U8, C::Rgb, F::RT);
    pub const U8_RGBA_RT: Format = Format::new(T::U8, C::Rgba, F::RT);
    pub const U8_RGBA_RT_SRGB: Format = Format::new(T::U8, C::Rgba, F::RT.union(F::SRGB));
}
