//! Text-object bracketing and text-state operators: `BT`, `ET`, `Tc`,
//! `Tw`, `Tz`, `TL`, `Tf`, `Tr`, `Ts` (spec §3 TextState, §4.2).

use crate::engine::Engine;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::object::{name_at, number_at, Operand};
use crate::sink::TextPositionSink;

/// Begin a text object: both text matrices become identity (spec §3
/// invariant — non-null only between `BT`/`ET`).
pub fn op_bt<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], _operands: &[Operand]) -> Result<()> {
    engine.set_text_matrix(Some(Matrix::IDENTITY));
    engine.set_text_line_matrix(Some(Matrix::IDENTITY));
    Ok(())
}

/// End a text object: both text matrices become null again.
pub fn op_et<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], _operands: &[Operand]) -> Result<()> {
    engine.set_text_matrix(None);
    engine.set_text_line_matrix(None);
    Ok(())
}

pub fn op_tc<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().text_state.char_spacing = number_at(operands, 0)?;
    Ok(())
}

pub fn op_tw<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().text_state.word_spacing = number_at(operands, 0)?;
    Ok(())
}

pub fn op_tz<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().text_state.horizontal_scaling = number_at(operands, 0)?;
    Ok(())
}

pub fn op_tl<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().text_state.leading = number_at(operands, 0)?;
    Ok(())
}

/// `Tf`: select a font by resource name and set the font size. The font
/// is looked up via `Engine::fonts()` (the top-of-stack resource scope,
/// or a caller-supplied override set through `set_fonts`); an
/// unresolvable name leaves the prior font in place (font resolution
/// failure is a resource/document concern, not fatal to interpretation).
pub fn op_tf<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    let name = name_at(operands, 0)?.to_string();
    let size = number_at(operands, 1)?;
    if let Some(font) = engine.fonts().get(&name) {
        let font = font.clone();
        engine.graphics_state_mut().text_state.font = Some(font);
        engine.graphics_state_mut().text_state.fontname = Some(name);
    }
    engine.graphics_state_mut().text_state.font_size = size;
    Ok(())
}

pub fn op_tr<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().text_state.render_mode = number_at(operands, 0)? as i32;
    Ok(())
}

pub fn op_ts<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().text_state.rise = number_at(operands, 0)?;
    Ok(())
}
