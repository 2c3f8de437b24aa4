//! Reversed-Z conventions: depth 1 is near, 0 is far.
//!
//! Each helper takes `is_depth_reversed` so callers can follow their config;
//! [`IS_DEPTH_REVERSED`] is the engine default.

use crate::device::CompareMode;

pub const IS_DEPTH_REVERSED: bool = true;

/// Mirrors an ordering comparison. Equality and constant modes are unchanged.
pub fn reverse_depth_for_compare_mode(mode: CompareMode, is_depth_reversed: bool) -> CompareMode {
    if !is_depth_reversed {
        return mode;
    }
    match mode {
        CompareMode::Less => CompareMode::Greater,
        CompareMode::LessEqual => CompareMode::GreaterEqual,
        CompareMode::GreaterEqual => CompareMode::LessEqual,
        CompareMode::Greater => CompareMode::Less,
        other => other,
    }
}

pub fn reverse_depth_for_clear_value(n: f32, is_depth_reversed: bool) -> f32 {
    if is_depth_reversed { 1.0 - n } else { n }
}

pub fn reverse_depth_for_depth_offset(n: f32, is_depth_reversed: bool) -> f32 {
    if is_depth_reversed { -n } else { n }
}

/// Evaluates `a <op> b` with `op` written for conventional depth.
///
/// # Panics
/// Panics for modes other than the four ordering comparisons.
pub fn compare_depth_values(a: f32, b: f32, op: CompareMode, is_depth_reversed: bool) -> bool {
    match reverse_depth_for_compare_mode(op, is_depth_reversed) {
        CompareMode::Less => a < b,
        CompareMode::LessEqual => a <= b,
        CompareMode::Greater => a > b,
        CompareMode::GreaterEqual => a >= b,
        other => panic!("compare_depth_values: {other:?} is not an ordering comparison"),
    }
}
