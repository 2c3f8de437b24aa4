use anyhow::{bail, Context, Result};

/// Type class of each component.
///
/// Tags are grouped by high nibble: plain numeric types, block-compressed
/// types, packed types and depth/stencil types.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormatType {
    U8 = 0x01,
    U16 = 0x02,
    U32 = 0x03,
    S8 = 0x04,
    S16 = 0x05,
    S32 = 0x06,
    F16 = 0x07,
    F32 = 0x08,

    Bc1 = 0x41,
    Bc2 = 0x42,
    Bc3 = 0x43,
    Bc4Unorm = 0x44,
    Bc4Snorm = 0x45,
    Bc5Unorm = 0x46,
    Bc5Snorm = 0x47,

    U16Packed5551 = 0x61,

    D24 = 0x81,
    D32F = 0x82,
    D24S8 = 0x83,
    D32FS8 = 0x84,
}

impl FormatType {
    pub const ALL: [FormatType; 20] = [
        FormatType::U8,
        FormatType::U16,
        FormatType::U32,
        FormatType::S8,
        FormatType::S16,
        FormatType::S32,
        FormatType::F16,
        FormatType::F32,
        FormatType::Bc1,
        FormatType::Bc2,
        FormatType::Bc3,
        FormatType::Bc4Unorm,
        FormatType::Bc4Snorm,
        FormatType::Bc5Unorm,
        FormatType::Bc5Snorm,
        FormatType::U16Packed5551,
        FormatType::D24,
        FormatType::D32F,
        FormatType::D24S8,
        FormatType::D32FS8,
    ];

    /// Decodes a type tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| *t as u8 == tag)
    }

    /// Byte size of a single component.
    ///
    /// Only defined for the plain numeric types; compressed, packed and
    /// depth/stencil classes have no per-component size.
    pub fn component_byte_size(self) -> Result<u32> {
        match self {
            FormatType::U8 | FormatType::S8 => Ok(1),
            FormatType::U16 | FormatType::S16 | FormatType::F16 => Ok(2),
            FormatType::U32 | FormatType::S32 | FormatType::F32 => Ok(4),
            other => bail!("format type {other:?} has no per-component byte size"),
        }
    }

    #[inline]
    pub fn is_compressed(self) -> bool {
        (self as u8) & 0xF0 == 0x40
    }

    #[inline]
    pub fn is_depth_stencil(self) -> bool {
        (self as u8) & 0x80 != 0
    }
}

/// Component layout. The discriminant is the component count.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ComponentLayout {
    R = 0x01,
    Rg = 0x02,
    Rgb = 0x03,
    Rgba = 0x04,
}

impl ComponentLayout {
    pub const ALL: [ComponentLayout; 4] = [
        ComponentLayout::R,
        ComponentLayout::Rg,
        ComponentLayout::Rgb,
        ComponentLayout::Rgba,
    ];

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| *c as u8 == tag)
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self as u32
    }
}

bitflags::bitflags! {
    /// Per-format flag bits (low byte of the packed value).
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u8 {
        const NORMALIZED = 0b0000_0001;
        const SRGB       = 0b0000_0010;
        const DEPTH      = 0b0000_0100;
        const STENCIL    = 0b0000_1000;
        const RT         = 0b0001_0000;
    }
}

/// Immutable format descriptor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Format {
    ty: FormatType,
    components: ComponentLayout,
    flags: FormatFlags,
}

impl Format {
    #[inline]
    pub const fn new(ty: FormatType, components: ComponentLayout, flags: FormatFlags) -> Self {
        Self {
            ty,
            components,
            flags,
        }
    }

    #[inline]
    pub const fn ty(self) -> FormatType {
        self.ty
    }

    #[inline]
    pub const fn components(self) -> ComponentLayout {
        self.components
    }

    #[inline]
    pub const fn flags(self) -> FormatFlags {
        self.flags
    }

    /// Packs the descriptor into its integer form.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        ((self.ty as u32) << 16) | ((self.components as u32) << 8) | (self.flags.bits() as u32)
    }

    /// Unpacks an integer produced by [`Format::to_bits`].
    pub fn from_bits(bits: u32) -> Result<Self> {
        if bits >> 24 != 0 {
            bail!("format value {bits:#010x} has bits set above the type byte");
        }

        let type_tag = ((bits >> 16) & 0xFF) as u8;
        let comp_tag = ((bits >> 8) & 0xFF) as u8;
        let flag_bits = (bits & 0xFF) as u8;

        let ty = FormatType::from_tag(type_tag)
            .with_context(|| format!("unrecognized format type tag {type_tag:#04x}"))?;
        let components = ComponentLayout::from_tag(comp_tag)
            .with_context(|| format!("unrecognized component tag {comp_tag:#04x}"))?;
        let flags = FormatFlags::from_bits(flag_bits)
            .with_context(|| format!("unrecognized format flag bits {flag_bits:#010b}"))?;

        Ok(Self::new(ty, components, flags))
    }

    /// Returns a copy with the flag byte replaced.
    #[inline]
    pub const fn with_flags(self, flags: FormatFlags) -> Self {
        Self { flags, ..self }
    }

    /// Returns a copy with the component layout replaced.
    #[inline]
    pub const fn with_components(self, components: ComponentLayout) -> Self {
        Self { components, ..self }
    }

    #[inline]
    pub const fn component_count(self) -> u32 {
        self.components.count()
    }

    pub fn component_byte_size(self) -> Result<u32> {
        self.ty.component_byte_size()
    }

    /// Total byte size of one element (pixel or vertex attribute).
    pub fn byte_size(self) -> Result<u32> {
        match self.ty {
            // The whole texel is one 16-bit word.
            FormatType::U16Packed5551 => Ok(2),
            ty => Ok(ty.component_byte_size()? * self.component_count()),
        }
    }

    #[inline]
    pub const fn is_depth(self) -> bool {
        self.flags.contains(FormatFlags::DEPTH)
    }

    #[inline]
    pub const fn has_stencil(self) -> bool {
        self.flags.contains(FormatFlags::STENCIL)
    }

    #[inline]
    pub const fn is_srgb(self) -> bool {
        self.flags.contains(FormatFlags::SRGB)
    }

    #[inline]
    pub const fn is_normalized(self) -> bool {
        self.flags.contains(FormatFlags::NORMALIZED)
    }

    #[inline]
    pub const fn is_render_target(self) -> bool {
        self.flags.contains(FormatFlags::RT)
    }
}

impl From<Format> for u32 {
    #[inline]
    fn from(format: Format) -> Self {
        format.to_bits()
    }
}

impl TryFrom<u32> for Format {
    type Error = anyhow::Error;

    fn try_from(bits: u32) -> Result<Self> {
        Format::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flag_sets() -> Vec<FormatFlags> {
        (0u8..32).map(FormatFlags::from_bits_truncate).collect()
    }

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn packing_matches_byte_layout() {
        let f = Format::new(FormatType::U8, ComponentLayout::Rgba, FormatFlags::RT);
        assert_eq!(f.to_bits(), 0x0001_0410);

        let d = Format::new(
            FormatType::D24S8,
            ComponentLayout::Rg,
            FormatFlags::DEPTH | FormatFlags::STENCIL,
        );
        assert_eq!(d.to_bits(), 0x0083_020C);
    }

    #[test]
    fn round_trips_every_valid_triple() {
        for ty in FormatType::ALL {
            for comp in ComponentLayout::ALL {
                for flags in all_flag_sets() {
                    let f = Format::new(ty, comp, flags);
                    let back = Format::from_bits(f.to_bits()).unwrap();
                    assert_eq!(back.ty(), ty);
                    assert_eq!(back.components(), comp);
                    assert_eq!(back.flags(), flags);
                }
            }
        }
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        assert!(Format::from_bits(0x0009_0100).is_err());
        assert!(Format::from_bits(0x0000_0100).is_err());
    }

    #[test]
    fn unknown_component_or_flag_bits_are_rejected() {
        assert!(Format::from_bits(0x0001_0500).is_err());
        assert!(Format::from_bits(0x0001_0180).is_err());
        assert!(Format::from_bits(0x0101_0100).is_err());
    }

    #[test]
    fn try_from_and_into_agree() {
        let f = Format::new(FormatType::F32, ComponentLayout::Rgb, FormatFlags::empty());
        let bits: u32 = f.into();
        assert_eq!(Format::try_from(bits).unwrap(), f);
    }

    // ── field replacement ─────────────────────────────────────────────────

    #[test]
    fn with_flags_preserves_type_and_components() {
        for ty in FormatType::ALL {
            for comp in ComponentLayout::ALL {
                let f = Format::new(ty, comp, FormatFlags::NORMALIZED);
                let g = f.with_flags(FormatFlags::SRGB | FormatFlags::RT);
                assert_eq!(g.ty(), ty);
                assert_eq!(g.components(), comp);
                assert_eq!(g.flags(), FormatFlags::SRGB | FormatFlags::RT);
                assert_eq!(g.to_bits() & 0xFFFF_FF00, f.to_bits() & 0xFFFF_FF00);
            }
        }
    }

    #[test]
    fn with_components_preserves_type_and_flags() {
        for flags in all_flag_sets() {
            let f = Format::new(FormatType::S16, ComponentLayout::R, flags);
            let g = f.with_components(ComponentLayout::Rgba);
            assert_eq!(g.ty(), FormatType::S16);
            assert_eq!(g.flags(), flags);
            assert_eq!(g.component_count(), 4);
            assert_eq!(g.to_bits() & 0xFFFF_00FF, f.to_bits() & 0xFFFF_00FF);
        }
    }

    // ── sizes ─────────────────────────────────────────────────────────────

    #[test]
    fn byte_size_is_component_size_times_count() {
        let f32_rgb = Format::new(FormatType::F32, ComponentLayout::Rgb, FormatFlags::empty());
        assert_eq!(f32_rgb.byte_size().unwrap(), 12);
        assert_eq!(f32_rgb.component_byte_size().unwrap(), 4);

        let u8_rgba = Format::new(FormatType::U8, ComponentLayout::Rgba, FormatFlags::NORMALIZED);
        assert_eq!(u8_rgba.byte_size().unwrap(), 4);

        let f16_rg = Format::new(FormatType::F16, ComponentLayout::Rg, FormatFlags::empty());
        assert_eq!(f16_rg.byte_size().unwrap(), 4);
    }

    #[test]
    fn compressed_and_depth_types_have_no_byte_size() {
        let bc1 = Format::new(FormatType::Bc1, ComponentLayout::Rgba, FormatFlags::empty());
        assert!(bc1.byte_size().is_err());

        let d32 = Format::new(FormatType::D32F, ComponentLayout::R, FormatFlags::DEPTH);
        assert!(d32.byte_size().is_err());
    }

    #[test]
    fn packed_5551_is_special_cased() {
        let f = Format::new(
            FormatType::U16Packed5551,
            ComponentLayout::Rgba,
            FormatFlags::NORMALIZED,
        );
        assert_eq!(f.byte_size().unwrap(), 2);
        assert!(f.component_byte_size().is_err());
    }

    #[test]
    fn type_class_predicates() {
        assert!(FormatType::Bc5Snorm.is_compressed());
        assert!(!FormatType::U16Packed5551.is_compressed());
        assert!(FormatType::D32FS8.is_depth_stencil());
        assert!(!FormatType::F32.is_depth_stencil());
    }
}
