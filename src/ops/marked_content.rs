//! Marked-content operators: `BMC`, `BDC`, `EMC`, `MP`, `DP`
//! (`SPEC_FULL.md` §B). These neither affect graphics/text state nor
//! need a pixel sink; registering them as no-ops keeps tagged-PDF content
//! streams out of the unsupported-operator set.

use crate::engine::Engine;
use crate::error::Result;
use crate::object::Operand;
use crate::sink::TextPositionSink;

pub fn op_noop<S: TextPositionSink>(_engine: &mut Engine<S>, _mnemonic: &[u8], _operands: &[Operand]) -> Result<()> {
    Ok(())
}
