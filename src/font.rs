//! The Font capability consumed by the Engine.
//!
//! Font objects (encoding tables, width tables, font matrices) are an
//! opaque, externally-supplied capability (spec §1); the Engine only ever
//! calls the methods below. Fonts are treated as read-only and may be
//! shared across Engine instances provided implementations are
//! thread-safe (spec §5), hence `Send + Sync`.

use std::sync::Arc;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::resources::ResourceScope;
use crate::token::ContentToken;

/// Opaque per-font capability the Engine drives during `showEncodedText`.
pub trait Font: Send + Sync {
    /// Decode `bytes[offset..offset+len]` to a Unicode string, or `None`
    /// if the code is unmapped.
    fn encode(&self, bytes: &[u8], offset: usize, len: usize) -> Option<String>;

    /// The raw numeric character code for `bytes[offset..offset+len]`,
    /// independent of whether `encode` succeeded.
    fn code_from_array(&self, bytes: &[u8], offset: usize, len: usize) -> i64;

    /// Advance width in glyph units.
    fn font_width(&self, bytes: &[u8], offset: usize, len: usize) -> f64;

    /// Vertical displacement in glyph units.
    fn font_height(&self, bytes: &[u8], offset: usize, len: usize) -> f64;

    /// Width of the space glyph in glyph units. May fail (varied font
    /// implementations); failure triggers the fallback chain in
    /// `showEncodedText` step 3.
    fn space_width(&self) -> Result<f64>;

    /// Average glyph width in glyph units, used as a fallback space-width
    /// hint.
    fn average_font_width(&self) -> f64;

    /// Identity-scaled 1/1000 for ordinary fonts; Type-3 fonts supply
    /// their own font matrix.
    fn font_matrix(&self) -> Matrix {
        Matrix::new(0.001, 0.0, 0.0, 0.001, 0.0, 0.0)
    }

    fn is_type3(&self) -> bool {
        false
    }

    /// For Type-3 fonts, the character procedure for a given character
    /// code, if this font provides one, already tokenized by the same
    /// external parser collaborator that tokenizes ordinary page content
    /// (spec §1: lexing is out of scope for the Engine). `None` for
    /// ordinary fonts, or for a Type-3 font with no proc for this code.
    fn char_proc(&self, _code: i64) -> Option<Vec<ContentToken>> {
        None
    }

    /// Resources (fonts/XObjects nested inside the char proc's own content
    /// stream) scoped to Type-3 character procedures. Most Type-3 fonts
    /// share the page's resources and so return `None` here.
    fn char_proc_resources(&self) -> Option<Arc<dyn ResourceScope>> {
        None
    }
}

/// Minimal test double, mirroring a fixed-width font.
pub struct MockFont {
    pub width: f64,
    pub height: f64,
    pub space_width: Result<f64>,
    pub average_width: f64,
    pub decode_fails: bool,
    pub font_matrix: Matrix,
    pub is_type3: bool,
}

impl Default for MockFont {
    fn default() -> Self {
        MockFont {
            width: 500.0,
            height: 0.0,
            space_width: Ok(250.0),
            average_width: 400.0,
            decode_fails: false,
            font_matrix: Matrix::new(0.001, 0.0, 0.0, 0.001, 0.0, 0.0),
            is_type3: false,
        }
    }
}

impl Font for MockFont {
    fn encode(&self, bytes: &[u8], offset: usize, _len: usize) -> Option<String> {
        if self.decode_fails {
            return None;
        }
        bytes.get(offset).map(|b| (*b as char).to_string())
    }

    fn code_from_array(&self, bytes: &[u8], offset: usize, len: usize) -> i64 {
        let mut code: i64 = 0;
        for b in &bytes[offset..offset + len] {
            code = (code << 8) | (*b as i64);
        }
        code
    }

    fn font_width(&self, _bytes: &[u8], _offset: usize, _len: usize) -> f64 {
        self.width
    }

    fn font_height(&self, _bytes: &[u8], _offset: usize, _len: usize) -> f64 {
        self.height
    }

    fn space_width(&self) -> Result<f64> {
        match &self.space_width {
            Ok(w) => Ok(*w),
            Err(e) => Err(crate::error::PdfError::TokenStreamIo(e.to_string())),
        }
    }

    fn average_font_width(&self) -> f64 {
        self.average_width
    }

    fn font_matrix(&self) -> Matrix {
        self.font_matrix
    }

    fn is_type3(&self) -> bool {
        self.is_type3
    }
}
