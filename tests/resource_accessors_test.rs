//! `Engine::fonts`/`xobjects`/`graphics_states` read-from-top-of-stack
//! semantics, and the `set_fonts`/`set_graphics_states` overrides (spec
//! §4.5, §6).

use std::sync::Arc;

use pdfinterp::engine::Engine;
use pdfinterp::font::MockFont;
use pdfinterp::resources::{ExtGState, MapResourceScope, XObject};
use pdfinterp::sink::CollectingSink;

#[test]
fn accessors_are_empty_when_resource_stack_is_empty() {
    let engine = Engine::new(CollectingSink::default());
    assert!(engine.fonts().is_empty());
    assert!(engine.xobjects().is_empty());
    assert!(engine.graphics_states().is_empty());
}

#[test]
fn accessors_read_from_top_of_stack() {
    let mut scope = MapResourceScope::default();
    scope
        .fonts
        .insert("F1".to_string(), Arc::new(MockFont::default()) as Arc<dyn pdfinterp::font::Font>);
    scope.xobjects.insert("Im1".to_string(), XObject::Image);
    let mut gs: ExtGState = ExtGState::new();
    gs.insert("ca".to_string(), pdfinterp::object::Operand::Real(0.5));
    scope.ext_gstates.insert("GS1".to_string(), gs);

    let mut engine = Engine::new(CollectingSink::default());
    engine.push_resources(Arc::new(scope));

    assert!(engine.fonts().contains_key("F1"));
    assert!(engine.xobjects().contains_key("Im1"));
    assert!(engine.graphics_states().contains_key("GS1"));

    engine.pop_resources();
    assert!(engine.fonts().is_empty());
}

#[test]
fn set_fonts_overrides_the_stack_and_feeds_tf() {
    let mut engine = Engine::new(CollectingSink::default());

    let mut overrides = std::collections::HashMap::new();
    overrides.insert(
        "F1".to_string(),
        Arc::new(MockFont {
            width: 750.0,
            ..MockFont::default()
        }) as Arc<dyn pdfinterp::font::Font>,
    );
    engine.set_fonts(overrides);

    assert!(engine.fonts().contains_key("F1"));

    let tokens = vec![
        pdfinterp::token::ContentToken::Operand(pdfinterp::object::Operand::Name("F1".to_string())),
        pdfinterp::token::ContentToken::Operand(pdfinterp::object::Operand::Real(12.0)),
        pdfinterp::token::ContentToken::Operator(b"Tf".to_vec()),
    ];
    let mut iter = pdfinterp::token::VecTokenIterator::new(tokens);
    engine
        .process_stream(None, &mut iter, (0.0, 0.0, 612.0, 792.0), 0)
        .unwrap();

    let font = engine.graphics_state().text_state.font.clone().unwrap();
    assert_eq!(font.font_width(b"A", 0, 1), 750.0);
}

#[test]
fn set_graphics_states_overrides_the_stack() {
    let mut engine = Engine::new(CollectingSink::default());
    let mut overrides = std::collections::HashMap::new();
    let mut gs: ExtGState = ExtGState::new();
    gs.insert("ca".to_string(), pdfinterp::object::Operand::Real(1.0));
    overrides.insert("GS1".to_string(), gs);
    engine.set_graphics_states(overrides);

    assert!(engine.graphics_states().contains_key("GS1"));
}
