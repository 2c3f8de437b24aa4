//! Sort keys for render instructions.
//!
//! Key layouts (most significant bit first):
//!
//! ```text
//! Opaque:      0LLLLLLL PPPPPPPP PPPPPPPP DDDDDDDD
//! Translucent: 1LLLLLLL DDDDDDDD DDDDDDDD BBBBBBBB
//! ```
//!
//! `L` is the renderer layer, `P` a program/material key, `D` depth and `B` a
//! bias. Ascending key order therefore groups by layer first, then by program
//! for opaque geometry (fewer pipeline switches) or by depth for translucent
//! geometry.

/// Coarse render layer. Occupies the top byte of a [`SortKey`].
///
/// Layers with the high bit set are translucent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
pub struct RendererLayer(pub u8);

impl RendererLayer {
    pub const BACKGROUND: RendererLayer = RendererLayer(0x00);
    pub const ALPHA_TEST: RendererLayer = RendererLayer(0x10);
    pub const OPAQUE: RendererLayer = RendererLayer(0x20);
    pub const TRANSLUCENT: RendererLayer = RendererLayer(0x80);

    /// Sub-layer `n` steps above this one (e.g. `OPAQUE.offset(1)`).
    #[inline]
    pub const fn offset(self, n: u8) -> Self {
        Self(self.0.wrapping_add(n))
    }

    #[inline]
    pub const fn is_translucent(self) -> bool {
        self.0 & Self::TRANSLUCENT.0 != 0
    }
}

/// Depth beyond which all depth keys saturate.
pub const MAX_DEPTH: f32 = 65536.0;

/// Quantizes view depth to 16 bits.
///
/// `depth` is distance from the camera (negative values clamp to 0). With
/// `flip` the farthest objects get the smallest key, which sorts translucent
/// geometry back-to-front.
pub fn make_depth_key(depth: f32, flip: bool, max_depth: f32) -> u16 {
    let mut normalized = depth.clamp(0.0, max_depth) / max_depth;
    if flip {
        normalized = 1.0 - normalized;
    }
    (normalized * f32::from(u16::MAX)) as u16
}

/// Packed ordering key for a render instruction. Smaller keys draw first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
pub struct SortKey(pub u32);

impl SortKey {
    /// Opaque or translucent key for `layer`, chosen by the layer's high bit.
    ///
    /// `program_key` is ignored for translucent layers.
    #[inline]
    pub const fn new(layer: RendererLayer, program_key: u16) -> Self {
        if layer.is_translucent() {
            Self::translucent(layer)
        } else {
            Self::opaque(layer, program_key)
        }
    }

    #[inline]
    pub const fn opaque(layer: RendererLayer, program_key: u16) -> Self {
        SortKey(0).with_program_key(program_key).with_layer(layer)
    }

    #[inline]
    pub const fn translucent(layer: RendererLayer) -> Self {
        SortKey(0).with_layer(layer)
    }

    #[inline]
    pub const fn layer(self) -> RendererLayer {
        RendererLayer((self.0 >> 24) as u8)
    }

    #[inline]
    pub const fn is_translucent(self) -> bool {
        self.0 >> 31 != 0
    }

    #[inline]
    pub const fn with_layer(self, layer: RendererLayer) -> Self {
        SortKey((self.0 & 0x00FF_FFFF) | ((layer.0 as u32) << 24))
    }

    /// Sets the program field. No effect on translucent keys.
    #[inline]
    pub const fn with_program_key(self, program_key: u16) -> Self {
        if self.is_translucent() {
            self
        } else {
            SortKey((self.0 & 0xFF00_00FF) | ((program_key as u32) << 8))
        }
    }

    /// Sets the bias byte. No effect on opaque keys.
    #[inline]
    pub const fn with_bias(self, bias: u8) -> Self {
        if self.is_translucent() {
            SortKey((self.0 & 0xFFFF_FF00) | bias as u32)
        } else {
            self
        }
    }

    /// Stores a depth key: all 16 bits for translucent keys, the top byte for opaque keys.
    #[inline]
    pub const fn with_depth_key(self, depth_key: u16) -> Self {
        if self.is_translucent() {
            SortKey((self.0 & 0xFF00_00FF) | ((depth_key as u32) << 8))
        } else {
            SortKey((self.0 & 0xFFFF_FF00) | ((depth_key as u32) >> 8))
        }
    }

    /// Quantizes `depth` and stores it. Translucent keys sort far-to-near,
    /// opaque keys near-to-far.
    pub fn with_depth(self, depth: f32, max_depth: f32) -> Self {
        self.with_depth_key(make_depth_key(depth, self.is_translucent(), max_depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn opaque_key_layout() {
        let key = SortKey::opaque(RendererLayer::OPAQUE, 0xABCD);
        assert_eq!(key.0, 0x20AB_CD00);
        assert_eq!(key.layer(), RendererLayer::OPAQUE);
        assert!(!key.is_translucent());
    }

    #[test]
    fn translucent_key_ignores_program() {
        let key = SortKey::new(RendererLayer::TRANSLUCENT, 0xABCD);
        assert_eq!(key.0, 0x8000_0000);
        assert_eq!(key.with_program_key(0x1234), key);
        assert_eq!(key.with_bias(7).0, 0x8000_0007);
    }

    #[test]
    fn bias_ignored_for_opaque() {
        let key = SortKey::opaque(RendererLayer::OPAQUE, 1);
        assert_eq!(key.with_bias(9), key);
    }

    #[test]
    fn with_layer_preserves_low_bits() {
        let key = SortKey::opaque(RendererLayer::OPAQUE, 0x1234).with_layer(RendererLayer::ALPHA_TEST);
        assert_eq!(key.0, 0x1012_3400);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn layers_dominate_program_keys() {
        let background = SortKey::opaque(RendererLayer::BACKGROUND, 0xFFFF);
        let opaque = SortKey::opaque(RendererLayer::OPAQUE, 0);
        let translucent = SortKey::translucent(RendererLayer::TRANSLUCENT);
        assert!(background < opaque);
        assert!(opaque < translucent);
        assert!(SortKey::opaque(RendererLayer::OPAQUE.offset(1), 0) > opaque);
    }

    #[test]
    fn translucent_depth_sorts_far_first() {
        let base = SortKey::translucent(RendererLayer::TRANSLUCENT);
        let near = base.with_depth(10.0, MAX_DEPTH);
        let far = base.with_depth(1000.0, MAX_DEPTH);
        assert!(far < near);
    }

    #[test]
    fn opaque_depth_sorts_near_first_within_program() {
        let base = SortKey::opaque(RendererLayer::OPAQUE, 5);
        let near = base.with_depth(10.0, 1000.0);
        let far = base.with_depth(900.0, 1000.0);
        assert!(near < far);
        assert_eq!(near.0 & 0xFFFF_FF00, base.0);
    }

    #[test]
    fn depth_key_clamps() {
        assert_eq!(make_depth_key(-5.0, false, 100.0), 0);
        assert_eq!(make_depth_key(500.0, false, 100.0), u16::MAX);
        assert_eq!(make_depth_key(500.0, true, 100.0), 0);
    }
}
