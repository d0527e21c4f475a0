//! Colour operators.
//!
//! `g`/`G`, `rg`/`RG`, `k`/`K` map directly onto `GraphicsState`'s colour
//! fields. `sc`/`SC`/`scn`/`SCN`/`cs`/`CS` depend on the active colour
//! space resource (ICC profiles, Separation/DeviceN tint transforms) that
//! this crate doesn't own (spec §1); they are registered as no-ops so
//! operand accounting stays correct (`SPEC_FULL.md` §B).

use crate::engine::Engine;
use crate::error::Result;
use crate::object::{number_at, Operand};
use crate::sink::TextPositionSink;
use crate::state::Color;

pub fn op_g<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().nonstroke_color = Color::Gray(number_at(operands, 0)?);
    engine.graphics_state_mut().nonstroke_color_space = "DeviceGray".to_string();
    Ok(())
}

pub fn op_capital_g<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    operands: &[Operand],
) -> Result<()> {
    engine.graphics_state_mut().stroke_color = Color::Gray(number_at(operands, 0)?);
    engine.graphics_state_mut().stroke_color_space = "DeviceGray".to_string();
    Ok(())
}

pub fn op_rg<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().nonstroke_color = Color::Rgb(
        number_at(operands, 0)?,
        number_at(operands, 1)?,
        number_at(operands, 2)?,
    );
    engine.graphics_state_mut().nonstroke_color_space = "DeviceRGB".to_string();
    Ok(())
}

pub fn op_capital_rg<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    operands: &[Operand],
) -> Result<()> {
    engine.graphics_state_mut().stroke_color = Color::Rgb(
        number_at(operands, 0)?,
        number_at(operands, 1)?,
        number_at(operands, 2)?,
    );
    engine.graphics_state_mut().stroke_color_space = "DeviceRGB".to_string();
    Ok(())
}

pub fn op_k<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    engine.graphics_state_mut().nonstroke_color = Color::Cmyk(
        number_at(operands, 0)?,
        number_at(operands, 1)?,
        number_at(operands, 2)?,
        number_at(operands, 3)?,
    );
    engine.graphics_state_mut().nonstroke_color_space = "DeviceCMYK".to_string();
    Ok(())
}

pub fn op_capital_k<S: TextPositionSink>(
    engine: &mut Engine<S>,
    _mnemonic: &[u8],
    operands: &[Operand],
) -> Result<()> {
    engine.graphics_state_mut().stroke_color = Color::Cmyk(
        number_at(operands, 0)?,
        number_at(operands, 1)?,
        number_at(operands, 2)?,
        number_at(operands, 3)?,
    );
    engine.graphics_state_mut().stroke_color_space = "DeviceCMYK".to_string();
    Ok(())
}

pub fn op_noop<S: TextPositionSink>(_engine: &mut Engine<S>, _mnemonic: &[u8], _operands: &[Operand]) -> Result<()> {
    Ok(())
}
