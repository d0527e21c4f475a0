//! Graphics-state operators: `q`, `Q`, `cm`, and the line/dash/rendering
//! parameter operators (spec §3 GraphicsState fields, §4.4).

use crate::engine::Engine;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::object::{number_at, Operand};
use crate::sink::TextPositionSink;
use crate::state::Dash;

pub fn op_q<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], _operands: &[Operand]) -> Result<()> {
    engine.save_graphics_state();
    Ok(())
}

pub fn op_q_restore<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    _operands: &[Operand],
) -> Result<()> {
    engine.restore_graphics_state();
    Ok(())
}

pub fn op_cm<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    let local = Matrix::new(
        number_at(operands, 0)?,
        number_at(operands, 1)?,
        number_at(operands, 2)?,
        number_at(operands, 3)?,
        number_at(operands, 4)?,
        number_at(operands, 5)?,
    );
    engine.set_ctm(local.multiply(&engine.ctm()));
    Ok(())
}

pub fn op_w<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().line_width = number_at(operands, 0)?;
    Ok(())
}

pub fn op_j<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().line_join = number_at(operands, 0)? as i32;
    Ok(())
}

pub fn op_capital_j<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    operands: &[Operand],
) -> Result<()> {
    engine.graphics_state_mut().line_cap = number_at(operands, 0)? as i32;
    Ok(())
}

pub fn op_m<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().miter_limit = number_at(operands, 0)?;
    Ok(())
}

pub fn op_d<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    let pattern = operands
        .first()
        .and_then(|op| op.as_array().ok())
        .map(|arr| arr.iter().filter_map(|o| o.as_f64().ok()).collect())
        .unwrap_or_default();
    let phase = operands.get(1).and_then(|op| op.as_f64().ok()).unwrap_or(0.0);
    engine.graphics_state_mut().dash = Dash { pattern, phase };
    Ok(())
}

pub fn op_ri<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    if let Some(name) = operands.first().and_then(|o| o.as_name().ok()) {
        engine.graphics_state_mut().rendering_intent = name.to_string();
    }
    Ok(())
}

pub fn op_i<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().flatness = number_at(operands, 0)?;
    Ok(())
}

/// `gs`: apply a named ExtGState dictionary. Looking the entries up and
/// mapping them onto individual graphics-state fields is a document/font
/// concern this crate does not own (spec §1); consuming the operand
/// without erroring keeps the operand stack in sync.
pub fn op_gs<S: TextPositionSink>(_engine: &mut Engine<S>, _mnemonic: &[u8], _operands: &[Operand]) -> Result<()> {
    Ok(())
}
