//! The Engine: owns the graphics-state stack, the resource-scope stack,
//! the current text matrices, and the main interpretation loop (spec
//! §4.2-§4.5). This is the core of the crate (~55% of the component
//! budget) — the substance is the state model, the matrix discipline, and
//! the per-code display-unit computation in `show_encoded_text`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{PdfError, Result};
use crate::font::Font;
use crate::matrix::Matrix;
use crate::object::Operand;
use crate::registry::OperatorRegistry;
use crate::resources::{ExtGState, ResourceScope, XObject};
use crate::sink::{TextPosition, TextPositionSink};
use crate::state::GraphicsState;
use crate::token::{ContentToken, StreamTokenIterator};

/// The Engine is strictly single-threaded and not reentrant across
/// threads for one instance (spec §5); recursive invocation *within one
/// thread* (Form XObjects, Type-3 char procs re-entering
/// `process_sub_stream`) is required and supported, which is why the
/// stacks below are Engine-owned mutable fields rather than parameters
/// threaded through every handler signature (spec §9).
pub struct Engine<S: TextPositionSink> {
    graphics_state: GraphicsState,
    graphics_stack: Vec<GraphicsState>,
    text_matrix: Option<Matrix>,
    text_line_matrix: Option<Matrix>,
    resources_stack: Vec<Arc<dyn ResourceScope>>,
    /// Caller-supplied override for `fonts()`, set via `set_fonts` (spec
    /// §6). When present, takes precedence over the resource-scope stack.
    font_overrides: Option<HashMap<String, Arc<dyn Font>>>,
    /// Caller-supplied override for `graphics_states()`, set via
    /// `set_graphics_states` (spec §6).
    ext_gstate_overrides: Option<HashMap<String, ExtGState>>,
    page_rotation: i32,
    drawing_rectangle: (f64, f64, f64, f64),
    pub force_parsing: bool,
    registry: OperatorRegistry<S>,
    unsupported: HashSet<Vec<u8>>,
    sink: S,
    disposed: bool,
}

impl<S: TextPositionSink> Engine<S> {
    pub fn new(sink: S) -> Self {
        Engine {
            graphics_state: GraphicsState::new(Matrix::IDENTITY),
            graphics_stack: Vec::new(),
            text_matrix: None,
            text_line_matrix: None,
            resources_stack: Vec::new(),
            font_overrides: None,
            ext_gstate_overrides: None,
            page_rotation: 0,
            drawing_rectangle: (0.0, 0.0, 0.0, 0.0),
            force_parsing: false,
            registry: OperatorRegistry::with_defaults(),
            unsupported: HashSet::new(),
            sink,
            disposed: false,
        }
    }

    fn ensure_not_disposed(&self) -> Result<()> {
        if self.disposed {
            Err(PdfError::Disposed)
        } else {
            Ok(())
        }
    }

    // ---- §4.2 interpretation loop -----------------------------------

    /// Initialise drawing rectangle, page rotation, a fresh GraphicsState
    /// scoped to `page_size`, clear both stacks and both text matrices,
    /// then process `stream` as the top-level sub-stream.
    pub fn process_stream(
        &mut self,
        resources: Option<Arc<dyn ResourceScope>>,
        stream: &mut dyn StreamTokenIterator,
        page_size: (f64, f64, f64, f64),
        rotation: i32,
    ) -> Result<()> {
        self.ensure_not_disposed()?;
        self.drawing_rectangle = page_size;
        self.page_rotation = rotation;
        self.graphics_state = GraphicsState::new(Matrix::IDENTITY);
        self.graphics_stack.clear();
        self.text_matrix = None;
        self.text_line_matrix = None;
        self.process_sub_stream(resources, stream)
    }

    /// Push `resources` (if any), run the token loop, and guarantee the
    /// scope is popped on every exit path — normal return or propagated
    /// error (spec §4.2, §4.5, §9).
    pub fn process_sub_stream(
        &mut self,
        resources: Option<Arc<dyn ResourceScope>>,
        stream: &mut dyn StreamTokenIterator,
    ) -> Result<()> {
        self.ensure_not_disposed()?;
        let pushed = resources.is_some();
        if let Some(r) = resources {
            self.resources_stack.push(r);
        }

        let result = self.run_token_loop(stream);

        if pushed {
            self.resources_stack.pop();
        }
        stream.close();
        result
    }

    fn run_token_loop(&mut self, stream: &mut dyn StreamTokenIterator) -> Result<()> {
        let mut operands: Vec<Operand> = Vec::new();
        loop {
            match stream.next_token() {
                Ok(Some(ContentToken::Operand(operand))) => operands.push(operand),
                Ok(Some(ContentToken::Operator(mnemonic))) => {
                    self.process_operator(&mnemonic, &operands)?;
                    operands.clear();
                }
                Ok(None) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// Resolve and invoke the handler bound to `mnemonic`; an absent
    /// binding is logged once per document and is not an error. This is
    /// the internal entry point used by `run_token_loop` and by recursive
    /// sub-stream execution; failures propagate (spec §7 kind 3).
    pub fn process_operator(&mut self, mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
        self.ensure_not_disposed()?;
        match self.registry.lookup(mnemonic) {
            Some(Some(handler)) => handler(self, mnemonic, operands),
            Some(None) => Ok(()), // explicitly disabled
            None => {
                if self.unsupported.insert(mnemonic.to_vec()) {
                    warn!(operator = %String::from_utf8_lossy(mnemonic), "unsupported operator");
                }
                Ok(())
            }
        }
    }

    /// Public string-mnemonic overload: catches and logs I/O errors
    /// raised by the handler rather than propagating them (spec §4.2,
    /// §6, §7 kind 3).
    pub fn process_operator_str(&mut self, mnemonic: &str, operands: Vec<Operand>) {
        if let Err(e) = self.process_operator(mnemonic.as_bytes(), &operands) {
            warn!(operator = %mnemonic, error = %e, "operator handler failed");
        }
    }

    // ---- §4.3 text-showing primitive ---------------------------------

    /// The arithmetic core: for every code in `bytes`, compute its
    /// display-space geometry and emit a `TextPosition`. Public so custom
    /// handlers can invoke it directly (spec §6).
    pub fn show_encoded_text(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_not_disposed()?;

        let font = match self.graphics_state.text_state.font.clone() {
            Some(f) => f,
            None => return Ok(()), // no font selected: nothing to show
        };

        let font_size = self.graphics_state.text_state.font_size;
        let hs = self.graphics_state.text_state.horizontal_scaling_fraction();
        let char_spacing = self.graphics_state.text_state.char_spacing;
        let word_spacing = self.graphics_state.text_state.word_spacing;
        let rise = self.graphics_state.text_state.rise;
        let ctm = self.graphics_state.ctm;

        // step 2: glyph -> text unit scaling factors, once per call.
        let (fm_x_scaling, fm_y_scaling, glyph_to_text) = if font.is_type3() {
            let fm = font.font_matrix();
            (fm.a, fm.d, 1.0 / fm.a)
        } else {
            (0.001, 0.001, 0.001)
        };

        // step 3: space-width hint in text units, once per call.
        let space_width_text = match font.space_width() {
            Ok(w) if w != 0.0 => w * glyph_to_text,
            _ => {
                debug!("font.space_width failed or zero; falling back to average width");
                let avg = font.average_font_width() * glyph_to_text * 0.80;
                if avg != 0.0 { avg } else { 1.0 }
            }
        };

        let mut text_matrix = self
            .text_matrix
            .unwrap_or(Matrix::IDENTITY);

        // step 5: space-width hint in display units, evaluated against the
        // text matrix as it stands at call entry.
        let space_width_disp = space_width_text * font_size * hs * text_matrix.x_scale() * ctm.x_scale();

        // step 4: text-state matrix T_s, constant across the run.
        let t_s = Matrix::new(font_size * hs, 0.0, 0.0, font_size, 0.0, rise);

        let mut max_vertical_displacement: f64 = 0.0;
        let mut i = 0usize;
        while i < bytes.len() {
            let mut len = 1usize;
            let mut decoded = font.encode(bytes, i, len);
            if decoded.is_none() && i + 2 <= bytes.len() {
                len = 2;
                decoded = font.encode(bytes, i, len);
            }
            let code = font.code_from_array(bytes, i, len);
            let text = decoded.unwrap_or_else(|| "?".to_string());

            // step 6: character displacement in text units.
            let dx_text = font.font_width(bytes, i, len) * fm_x_scaling;
            let dy_text = font.font_height(bytes, i, len) * fm_y_scaling;
            max_vertical_displacement = max_vertical_displacement.max(dy_text);

            // step 7: word-spacing rule — single-byte 0x20 only.
            let apply_word_spacing = len == 1 && bytes[i] == 0x20;
            let per_code_spacing = if apply_word_spacing { word_spacing } else { 0.0 };

            // step 8: start-of-glyph display matrix.
            let text_x_ctm = text_matrix.multiply(&ctm);
            let text_matrix_start = t_s.multiply(&text_x_ctm);

            // step 9: end-of-glyph matrix, excluding Tc/Tw.
            let td_pure = Matrix::translation(dx_text * font_size * hs, 0.0);
            let text_matrix_end = t_s.multiply(&td_pure).multiply(&text_x_ctm);
            let end_x = text_matrix_end.x_position();
            let end_y = text_matrix_end.y_position();

            // step 10: advance the text matrix, including spacing.
            let tx = (dx_text * font_size + char_spacing + per_code_spacing) * hs;
            let advance = Matrix::translation(tx, 0.0);
            text_matrix = advance.multiply(&text_matrix);

            // step 11/12: width and vertical displacement.
            let width_text = end_x - text_matrix_start.x_position();
            let total_vertical_displacement =
                max_vertical_displacement * font_size * text_x_ctm.y_scale();

            // Type-3 glyphs are themselves content streams; run the
            // character procedure, if any, as a recursive sub-stream
            // scoped to glyph space (spec `SPEC_FULL.md` §B). This mirrors
            // Form XObject recursion: save/restore the CTM around it so
            // nothing leaks into the enclosing state.
            if font.is_type3() {
                if let Some(tokens) = font.char_proc(code) {
                    let glyph_to_device = font.font_matrix().multiply(&text_matrix_start);
                    self.run_char_proc(tokens, glyph_to_device, font.char_proc_resources());
                }
            }

            // step 13: emit.
            self.sink.on_text_position(TextPosition {
                page_rotation: self.page_rotation,
                page_width: self.drawing_rectangle.2 - self.drawing_rectangle.0,
                page_height: self.drawing_rectangle.3 - self.drawing_rectangle.1,
                start_matrix: text_matrix_start,
                end_x,
                end_y,
                total_vertical_displacement,
                width_text,
                space_width_disp,
                text,
                code_points: vec![code],
                font: font.clone(),
                font_size,
                font_size_pixels_hint: font_size * ctm.y_scale(),
            });

            i += len;
        }

        self.text_matrix = Some(text_matrix);
        Ok(())
    }

    /// Execute a Type-3 character procedure as a recursive sub-stream
    /// scoped to `glyph_to_device`, restoring the prior CTM afterwards
    /// regardless of how the sub-stream exits.
    fn run_char_proc(
        &mut self,
        tokens: Vec<ContentToken>,
        glyph_to_device: Matrix,
        resources: Option<Arc<dyn ResourceScope>>,
    ) {
        let saved_ctm = self.graphics_state.ctm;
        self.graphics_state.ctm = glyph_to_device;
        let mut iter = crate::token::VecTokenIterator::new(tokens);
        if let Err(e) = self.process_sub_stream(resources, &mut iter) {
            warn!(error = %e, "Type-3 char proc execution failed");
        }
        self.graphics_state.ctm = saved_ctm;
    }

    // ---- §4.4 graphics-state stack -----------------------------------

    pub fn save_graphics_state(&mut self) {
        self.graphics_stack.push(self.graphics_state.copy());
    }

    pub fn restore_graphics_state(&mut self) {
        match self.graphics_stack.pop() {
            Some(saved) => self.graphics_state = saved,
            None => warn!("graphics-stack underflow on Q; state unchanged"),
        }
    }

    pub fn graphics_stack_size(&self) -> usize {
        self.graphics_stack.len()
    }

    pub fn graphics_state(&self) -> &GraphicsState {
        &self.graphics_state
    }

    pub fn graphics_state_mut(&mut self) -> &mut GraphicsState {
        &mut self.graphics_state
    }

    pub fn set_graphics_state(&mut self, state: GraphicsState) {
        self.graphics_state = state;
    }

    // ---- text matrices -------------------------------------------------

    pub fn text_matrix(&self) -> Option<Matrix> {
        self.text_matrix
    }

    pub fn set_text_matrix(&mut self, m: Option<Matrix>) {
        self.text_matrix = m;
    }

    pub fn text_line_matrix(&self) -> Option<Matrix> {
        self.text_line_matrix
    }

    pub fn set_text_line_matrix(&mut self, m: Option<Matrix>) {
        self.text_line_matrix = m;
    }

    // ---- §4.5 resource-scope stack -------------------------------------

    pub fn resources(&self) -> Option<&Arc<dyn ResourceScope>> {
        self.resources_stack.last()
    }

    pub fn resources_stack_depth(&self) -> usize {
        self.resources_stack.len()
    }

    /// The current scope's font map, or an empty map if the resource-scope
    /// stack is empty (spec §4.5, §6: `getFonts` "reads from the top of
    /// the stack" and "returns an empty mapping rather than failing").
    /// A prior `set_fonts` call takes precedence over the stack.
    pub fn fonts(&self) -> HashMap<String, Arc<dyn Font>> {
        if let Some(overrides) = &self.font_overrides {
            return overrides.clone();
        }
        self.resources()
            .map(|r| r.fonts().clone())
            .unwrap_or_default()
    }

    /// The current scope's named-XObject map, or an empty map if the
    /// resource-scope stack is empty (spec §4.5, §6: `getXObjects`).
    pub fn xobjects(&self) -> HashMap<String, XObject> {
        self.resources()
            .map(|r| r.xobjects().clone())
            .unwrap_or_default()
    }

    /// The current scope's ExtGState map, or an empty map if the
    /// resource-scope stack is empty (spec §4.5, §6: `getGraphicsStates`).
    /// A prior `set_graphics_states` call takes precedence over the stack.
    pub fn graphics_states(&self) -> HashMap<String, ExtGState> {
        if let Some(overrides) = &self.ext_gstate_overrides {
            return overrides.clone();
        }
        self.resources()
            .map(|r| r.ext_gstates().clone())
            .unwrap_or_default()
    }

    /// Replace what `fonts()` (and `Tf` resolution) reports, independent of
    /// the resource-scope stack (spec §6 `setFonts`). Intended for callers
    /// that want to inject or override a document's font map directly.
    pub fn set_fonts(&mut self, fonts: HashMap<String, Arc<dyn Font>>) {
        self.font_overrides = Some(fonts);
    }

    /// Replace what `graphics_states()` reports, independent of the
    /// resource-scope stack (spec §6 `setGraphicsStates`).
    pub fn set_graphics_states(&mut self, states: HashMap<String, ExtGState>) {
        self.ext_gstate_overrides = Some(states);
    }

    pub fn push_resources(&mut self, resources: Arc<dyn ResourceScope>) {
        self.resources_stack.push(resources);
    }

    pub fn pop_resources(&mut self) -> Option<Arc<dyn ResourceScope>> {
        self.resources_stack.pop()
    }

    pub fn ctm(&self) -> Matrix {
        self.graphics_state.ctm
    }

    pub fn set_ctm(&mut self, m: Matrix) {
        self.graphics_state.ctm = m;
    }

    // ---- misc public surface -------------------------------------------

    pub fn register_operator_processor(
        &mut self,
        mnemonic: impl Into<Vec<u8>>,
        handler: crate::registry::HandlerFn<S>,
    ) {
        self.registry.register(mnemonic, handler);
    }

    /// Inter-document cache-flush hook: clears the unsupported-operator
    /// dedup set so a subsequent document logs its own unsupported
    /// operators afresh.
    pub fn reset_engine(&mut self) {
        self.unsupported.clear();
    }

    /// Drop all stacks and handler registrations; the engine is unusable
    /// afterwards (every other public method returns `PdfError::Disposed`).
    pub fn dispose(&mut self) {
        self.graphics_stack.clear();
        self.resources_stack.clear();
        self.registry = OperatorRegistry::new();
        self.text_matrix = None;
        self.text_line_matrix = None;
        self.disposed = true;
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
