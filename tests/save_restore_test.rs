//! Save/restore identity (spec §8 universal property) and scenario 5
//! (CTM scale isolated by q/Q).

use std::sync::Arc;

use pdfinterp::engine::Engine;
use pdfinterp::font::MockFont;
use pdfinterp::object::Operand;
use pdfinterp::sink::CollectingSink;
use pdfinterp::token::{ContentToken, VecTokenIterator};

fn num(n: f64) -> ContentToken {
    ContentToken::Operand(Operand::Real(n))
}

fn op(mnemonic: &str) -> ContentToken {
    ContentToken::Operator(mnemonic.as_bytes().to_vec())
}

fn string_operand(s: &str) -> ContentToken {
    ContentToken::Operand(Operand::String(s.as_bytes().to_vec()))
}

#[test]
fn save_restore_identity() {
    let mut engine = Engine::new(CollectingSink::default());
    engine.graphics_state_mut().text_state.font = Some(Arc::new(MockFont::default()));
    engine.graphics_state_mut().line_width = 1.0;

    let before = engine.graphics_state().line_width;
    let before_ctm = engine.ctm();

    let tokens = vec![
        op("q"),
        num(2.0),
        num(0.0),
        num(0.0),
        num(2.0),
        num(0.0),
        num(0.0),
        op("cm"),
        num(5.0),
        op("w"),
        op("Q"),
    ];
    let mut iter = VecTokenIterator::new(tokens);
    engine.process_stream(None, &mut iter, (0.0, 0.0, 612.0, 792.0), 0).unwrap();

    assert_eq!(engine.graphics_state().line_width, before);
    assert_eq!(engine.ctm(), before_ctm);
    assert_eq!(engine.graphics_stack_size(), 0);
}

#[test]
fn scenario_5_save_restore_isolates_ctm_scale() {
    let mut engine = Engine::new(CollectingSink::default());
    engine.graphics_state_mut().text_state.font = Some(Arc::new(MockFont::default()));
    engine.graphics_state_mut().text_state.font_size = 12.0;

    let tokens = vec![
        op("BT"),
        op("q"),
        num(2.0),
        num(0.0),
        num(0.0),
        num(2.0),
        num(0.0),
        num(0.0),
        op("cm"),
        string_operand("A"),
        op("Tj"),
        op("Q"),
        string_operand("A"),
        op("Tj"),
        op("ET"),
    ];
    let mut iter = VecTokenIterator::new(tokens);
    engine.process_stream(None, &mut iter, (0.0, 0.0, 612.0, 792.0), 0).unwrap();

    let positions = &engine.sink().positions;
    assert_eq!(positions.len(), 2);
    // first emission: scaled ctm x_scale = 2.0; second, after Q: back to 1.0.
    assert!((positions[0].start_matrix.x_scale() / positions[1].start_matrix.x_scale() - 2.0).abs() < 1e-9);
}
