//! Text-positioning and text-showing operators: `Td`, `TD`, `Tm`, `T*`,
//! `Tj`, `TJ`, `'`, `"` (spec §3 Engine state, §4.3).

use crate::engine::Engine;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::object::{bytes_at, number_at, Operand};
use crate::sink::TextPositionSink;

fn move_to_next_line<S: TextPositionSink>(engine: &mut Engine<S>, tx: f64, ty: f64) {
    let translate = Matrix::translation(tx, ty);
    let base = engine.text_line_matrix().unwrap_or(Matrix::IDENTITY);
    let new_line_matrix = translate.multiply(&base);
    engine.set_text_matrix(Some(new_line_matrix));
    engine.set_text_line_matrix(Some(new_line_matrix));
}

pub fn op_td<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    let tx = number_at(operands, 0)?;
    let ty = number_at(operands, 1)?;
    move_to_next_line(engine, tx, ty);
    Ok(())
}

pub fn op_td_leading<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    operands: &[Operand],
) -> Result<()> {
    let tx = number_at(operands, 0)?;
    let ty = number_at(operands, 1)?;
    engine.graphics_state_mut().text_state.leading = -ty;
    move_to_next_line(engine, tx, ty);
    Ok(())
}

pub fn op_tm<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    let m = Matrix::new(
        number_at(operands, 0)?,
        number_at(operands, 1)?,
        number_at(operands, 2)?,
        number_at(operands, 3)?,
        number_at(operands, 4)?,
        number_at(operands, 5)?,
    );
    engine.set_text_matrix(Some(m));
    engine.set_text_line_matrix(Some(m));
    Ok(())
}

pub fn op_t_star<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    _operands: &[Operand],
) -> Result<()> {
    let leading = engine.graphics_state().text_state.leading;
    move_to_next_line(engine, 0.0, -leading);
    Ok(())
}

pub fn op_tj<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    let bytes = bytes_at(operands, 0)?;
    engine.show_encoded_text(bytes)
}

/// `TJ`: an array mixing strings (shown via `show_encoded_text`) and
/// numbers (an additional, unscaled horizontal adjustment applied
/// directly against the text matrix — positive numbers move left).
pub fn op_tj_array<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    operands: &[Operand],
) -> Result<()> {
    let items = operands
        .first()
        .ok_or_else(|| crate::error::PdfError::TokenStreamIo("TJ missing array operand".into()))?
        .as_array()?;
    for item in items {
        match item {
            Operand::String(bytes) => engine.show_encoded_text(bytes)?,
            Operand::Int(_) | Operand::Real(_) => {
                let adjustment = item.as_f64()?;
                apply_tj_number_adjustment(engine, adjustment);
            }
            _ => {}
        }
    }
    Ok(())
}

fn apply_tj_number_adjustment<S: TextPositionSink>(engine: &mut Engine<S>, adjustment: f64) {
    let hs = engine.graphics_state().text_state.horizontal_scaling_fraction();
    let font_size = engine.graphics_state().text_state.font_size;
    let tx = -adjustment / 1000.0 * font_size * hs;
    let advance = Matrix::translation(tx, 0.0);
    let current = engine.text_matrix().unwrap_or(Matrix::IDENTITY);
    engine.set_text_matrix(Some(advance.multiply(&current)));
}

/// `'`: move to the next line, then show text.
pub fn op_quote<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    op_t_star(engine, b"T*", &[])?;
    op_tj(engine, b"Tj", operands)
}

/// `"`: set word spacing and character spacing, then behave as `'`.
pub fn op_doublequote<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    operands: &[Operand],
) -> Result<()> {
    engine.graphics_state_mut().text_state.word_spacing = number_at(operands, 0)?;
    engine.graphics_state_mut().text_state.char_spacing = number_at(operands, 1)?;
    let string_operand = operands.get(2).cloned().into_iter().collect::<Vec<_>>();
    op_quote(engine, b"'", &string_operand)
}
