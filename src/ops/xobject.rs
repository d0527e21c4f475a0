//! `Do`: invoke a named XObject (spec `SPEC_FULL.md` §B).
//!
//! Form XObjects recurse through `process_sub_stream` with their own CTM
//! concatenated and (if present) their own resource scope pushed; Image
//! XObjects are not interpretable as content and are simply skipped — no
//! sub-stream push, no `TextPosition`s.

use std::sync::Arc;

use crate::engine::Engine;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::object::{name_at, Operand};
use crate::resources::{ResourceScope, XObject};
use crate::sink::TextPositionSink;
use crate::token::StreamTokenIterator;

enum Invocation {
    None,
    Form {
        matrix: Matrix,
        resources: Option<Arc<dyn ResourceScope>>,
        tokens: Box<dyn StreamTokenIterator>,
    },
}

pub fn op_do<S: TextPositionSink>(engine: &mut Engine<S>, _mnemonic: &[u8], operands: &[Operand]) -> Result<()> {
    let name = name_at(operands, 0)?.to_string();

    let invocation = match engine.resources().and_then(|r| r.xobjects().get(&name)) {
        None | Some(XObject::Image) => Invocation::None,
        Some(XObject::Form {
            matrix,
            resources,
            open,
        }) => Invocation::Form {
            matrix: *matrix,
            resources: resources.clone(),
            tokens: open(),
        },
    };

    match invocation {
        Invocation::None => Ok(()),
        Invocation::Form {
            matrix,
            resources,
            mut tokens,
        } => {
            engine.save_graphics_state();
            engine.set_ctm(matrix.multiply(&engine.ctm()));
            let result = engine.process_sub_stream(resources, tokens.as_mut());
            engine.restore_graphics_state();
            result
        }
    }
}
