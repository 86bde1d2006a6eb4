//! Placeholder application icons: a filled, outlined circle on a transparent
//! canvas, written as PNG files named after their dimensions.

pub mod glyph;
pub mod icon_gen;
