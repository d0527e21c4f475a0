//! Graphics and text state records.
//!
//! `TextState` is embedded in `GraphicsState`; both must be deep-cloneable
//! so that `Engine::save_graphics_state` can push an independent copy
//! while the "current" state stays directly mutable (spec §3, §4.4, §9).
//! Following the teacher's convention, cloning is exposed through an
//! explicit `copy()` method rather than `derive(Clone)`, so the
//! independent-copies contract is visible at each call site.

use std::sync::Arc;

use crate::font::Font;
use crate::matrix::Matrix;

/// Stroking/non-stroking colour specification.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Gray(f64),
    Rgb(f64, f64, f64),
    Cmyk(f64, f64, f64, f64),
    PatternColored { name: String, underlying: Box<Color> },
    PatternUncolored { name: String },
}

impl Color {
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Color::PatternColored { .. } | Color::PatternUncolored { .. }
        )
    }

    pub fn pattern_name(&self) -> Option<&str> {
        match self {
            Color::PatternColored { name, .. } | Color::PatternUncolored { name } => Some(name),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Gray(0.0)
    }
}

/// Text state embedded in a `GraphicsState`.
#[derive(Clone)]
pub struct TextState {
    pub font: Option<Arc<dyn Font>>,
    pub fontname: Option<String>,
    pub font_size: f64,
    pub char_spacing: f64,
    pub word_spacing: f64,
    /// Stored as a percentage (PDF `Tz` semantics); used as a fraction
    /// (`/100`) everywhere it enters the per-glyph arithmetic.
    pub horizontal_scaling: f64,
    pub leading: f64,
    pub rise: f64,
    pub render_mode: i32,
    pub knockout: bool,
}

impl TextState {
    pub fn new() -> Self {
        TextState {
            font: None,
            fontname: None,
            font_size: 0.0,
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scaling: 100.0,
            leading: 0.0,
            rise: 0.0,
            render_mode: 0,
            knockout: false,
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn horizontal_scaling_fraction(&self) -> f64 {
        self.horizontal_scaling / 100.0
    }
}

impl Default for TextState {
    fn default() -> Self {
        TextState::new()
    }
}

/// Dash pattern: an array of on/off lengths plus a phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dash {
    pub pattern: Vec<f64>,
    pub phase: f64,
}

/// An opaque, implementation-defined reference to the active clipping
/// path. Path construction/painting are out of scope (spec §1); this
/// crate only needs the reference to be stored and deep-cloned, never
/// dereferenced.
pub type ClipRef = Option<u64>;

/// The full graphics state record (spec §3).
#[derive(Clone)]
pub struct GraphicsState {
    pub ctm: Matrix,
    pub text_state: TextState,
    pub line_width: f64,
    pub line_cap: i32,
    pub line_join: i32,
    pub miter_limit: f64,
    pub dash: Dash,
    pub rendering_intent: String,
    pub flatness: f64,
    pub smoothness: f64,
    pub stroke_color: Color,
    pub stroke_color_space: String,
    pub nonstroke_color: Color,
    pub nonstroke_color_space: String,
    pub clip: ClipRef,
}

impl GraphicsState {
    /// Fresh state for a page scoped to `ctm` (identity for an unrotated,
    /// unscaled page).
    pub fn new(ctm: Matrix) -> Self {
        GraphicsState {
            ctm,
            text_state: TextState::new(),
            line_width: 1.0,
            line_cap: 0,
            line_join: 0,
            miter_limit: 10.0,
            dash: Dash::default(),
            rendering_intent: "RelativeColorimetric".to_string(),
            flatness: 1.0,
            smoothness: 0.0,
            stroke_color: Color::default(),
            stroke_color_space: "DeviceGray".to_string(),
            nonstroke_color: Color::default(),
            nonstroke_color_space: "DeviceGray".to_string(),
            clip: None,
        }
    }

    /// Deep clone: modifying the result must never affect `self`.
    pub fn copy(&self) -> Self {
        GraphicsState {
            ctm: self.ctm,
            text_state: self.text_state.copy(),
            line_width: self.line_width,
            line_cap: self.line_cap,
            line_join: self.line_join,
            miter_limit: self.miter_limit,
            dash: self.dash.clone(),
            rendering_intent: self.rendering_intent.clone(),
            flatness: self.flatness,
            smoothness: self.smoothness,
            stroke_color: self.stroke_color.clone(),
            stroke_color_space: self.stroke_color_space.clone(),
            nonstroke_color: self.nonstroke_color.clone(),
            nonstroke_color_space: self.nonstroke_color_space.clone(),
            clip: self.clip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_isolation() {
        let mut g = GraphicsState::new(Matrix::IDENTITY);
        g.stroke_color = Color::Rgb(1.0, 0.0, 0.0);
        g.text_state.font_size = 12.0;

        let mut clone = g.copy();
        clone.stroke_color = Color::Rgb(0.0, 1.0, 0.0);
        clone.text_state.font_size = 24.0;
        clone.line_width = 3.0;
        clone.dash.pattern.push(1.0);

        assert_eq!(g.stroke_color, Color::Rgb(1.0, 0.0, 0.0));
        assert_eq!(g.text_state.font_size, 12.0);
        assert_eq!(g.line_width, 1.0);
        assert!(g.dash.pattern.is_empty());
    }
}
