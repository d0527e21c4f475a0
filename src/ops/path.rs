//! Path construction and painting operators.
//!
//! Pixel output is explicitly out of scope (spec §1, component 8); these
//! are registered as no-ops purely so a content stream mixing text and
//! vector art doesn't desync the operand buffer or land every path op in
//! the unsupported-set (`SPEC_FULL.md` §B).

use crate::engine::Engine;
use crate::error::Result;
use crate::object::Operand;
use crate::sink::TextPositionSink;

pub fn op_noop<S: TextPositionSink>(_engine: &mut Engine<S>, _mnemonic: &[u8], _operands: &[Operand]) -> Result<()> {
    Ok(())
}
