//! Pixel and vertex format descriptors.
//!
//! A [`Format`] is a small value of three fields (type class, component layout,
//! flag bits). It packs to `(type << 16) | (components << 8) | flags` only at
//! explicit boundaries ([`Format::to_bits`] / [`Format::from_bits`]).

mod codec;
mod presets;
mod wgpu_interop;

pub use codec::{ComponentLayout, Format, FormatFlags, FormatType};
