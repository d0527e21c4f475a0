//! A PDF content-stream interpreter: the component that consumes a page's
//! tokenised content (operators and operands), maintains the graphics and
//! text state required by the PDF imaging model, and emits one
//! [`sink::TextPosition`] per shown glyph to a downstream consumer such as
//! a text extractor.
//!
//! Tokenising raw bytes, font objects, document/page access, colour
//! rendering and path painting, and the final rasteriser are external
//! collaborators (see `SPEC_FULL.md`); this crate owns the state machine
//! and the per-glyph arithmetic that sits between them.

pub mod engine;
pub mod error;
pub mod font;
pub mod matrix;
pub mod object;
pub mod ops;
pub mod registry;
pub mod resources;
pub mod sink;
pub mod state;
pub mod token;

pub use engine::Engine;
pub use error::{PdfError, Result};
pub use matrix::Matrix;
pub use sink::{TextPosition, TextPositionSink};
