//! The callback surface the Engine invokes for every emitted glyph.

use std::sync::Arc;

use crate::font::Font;
use crate::matrix::Matrix;

/// A fully resolved glyph emission (spec §3).
#[derive(Clone)]
pub struct TextPosition {
    pub page_rotation: i32,
    pub page_width: f64,
    pub page_height: f64,
    /// Start-of-glyph matrix in display space. A fresh instance per
    /// emission (see [`crate::matrix::Matrix`]'s `Copy` note).
    pub start_matrix: Matrix,
    /// End-of-glyph position, excluding `Tc`/`Tw` contribution.
    pub end_x: f64,
    pub end_y: f64,
    /// Total vertical displacement in display units, accumulated as the
    /// running max across the showing-operator's run.
    pub total_vertical_displacement: f64,
    /// Width in text units.
    pub width_text: f64,
    /// Space-width hint in display units.
    pub space_width_disp: f64,
    /// Decoded text ("?" substituted for an undecodable code).
    pub text: String,
    /// Raw numeric code points, one per emitted `TextPosition`.
    pub code_points: Vec<i64>,
    pub font: Arc<dyn Font>,
    pub font_size: f64,
    /// Approximate device-space font size, handy for downstream heuristics
    /// (e.g. deciding whether a run of glyphs looks like a heading).
    pub font_size_pixels_hint: f64,
}

/// Consumer callback receiving one `TextPosition` per emitted glyph.
/// Default is a no-op so text-extracting implementations only need to
/// override this one method (spec §6).
pub trait TextPositionSink {
    fn on_text_position(&mut self, _position: TextPosition) {}
}

/// A sink that simply collects every emission, for tests and for callers
/// who want the whole run materialized before deciding what to do with it.
#[derive(Default)]
pub struct CollectingSink {
    pub positions: Vec<TextPosition>,
}

impl TextPositionSink for CollectingSink {
    fn on_text_position(&mut self, position: TextPosition) {
        self.positions.push(position);
    }
}
