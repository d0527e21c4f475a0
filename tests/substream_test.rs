//! Resource-scope stack discipline across `Do` (Form XObject) recursion
//! (spec §8: "after processSubStream returns or fails, the resource-stack
//! depth equals its depth at entry").

use std::sync::Arc;

use pdfinterp::engine::Engine;
use pdfinterp::font::MockFont;
use pdfinterp::matrix::Matrix;
use pdfinterp::object::Operand;
use pdfinterp::resources::{MapResourceScope, XObject};
use pdfinterp::sink::CollectingSink;
use pdfinterp::token::{ContentToken, VecTokenIterator};

fn op(mnemonic: &str) -> ContentToken {
    ContentToken::Operator(mnemonic.as_bytes().to_vec())
}

fn name(n: &str) -> ContentToken {
    ContentToken::Operand(Operand::Name(n.to_string()))
}

fn string_operand(s: &str) -> ContentToken {
    ContentToken::Operand(Operand::String(s.as_bytes().to_vec()))
}

fn num(n: f64) -> ContentToken {
    ContentToken::Operand(Operand::Real(n))
}

#[test]
fn do_recurses_into_form_and_pops_resource_scope_on_exit() {
    let mut form_scope = MapResourceScope::default();
    form_scope
        .fonts
        .insert("F1".to_string(), Arc::new(MockFont::default()) as Arc<dyn pdfinterp::font::Font>);

    let form_scope: Arc<dyn pdfinterp::resources::ResourceScope> = Arc::new(form_scope);
    let form_scope_for_closure = form_scope.clone();

    let mut page_scope = MapResourceScope::default();
    page_scope.xobjects.insert(
        "Fm1".to_string(),
        XObject::Form {
            matrix: Matrix::IDENTITY,
            resources: Some(form_scope_for_closure),
            open: std::sync::Arc::new(|| {
                Box::new(VecTokenIterator::new(vec![
                    op("BT"),
                    name("F1"),
                    num(12.0),
                    op("Tf"),
                    string_operand("A"),
                    op("Tj"),
                    op("ET"),
                ])) as Box<dyn pdfinterp::token::StreamTokenIterator>
            }),
        },
    );
    let page_scope: Arc<dyn pdfinterp::resources::ResourceScope> = Arc::new(page_scope);

    let mut engine = Engine::new(CollectingSink::default());
    let tokens = vec![name("Fm1"), op("Do")];
    let mut iter = VecTokenIterator::new(tokens);

    engine
        .process_stream(Some(page_scope), &mut iter, (0.0, 0.0, 612.0, 792.0), 0)
        .unwrap();

    assert_eq!(engine.resources_stack_depth(), 0);
    assert_eq!(engine.sink().positions.len(), 1);
    assert_eq!(engine.sink().positions[0].text, "A");
}

#[test]
fn do_on_image_xobject_is_a_noop() {
    let mut page_scope = MapResourceScope::default();
    page_scope
        .xobjects
        .insert("Im1".to_string(), XObject::Image);
    let page_scope: Arc<dyn pdfinterp::resources::ResourceScope> = Arc::new(page_scope);

    let mut engine = Engine::new(CollectingSink::default());
    let tokens = vec![name("Im1"), op("Do")];
    let mut iter = VecTokenIterator::new(tokens);

    engine
        .process_stream(Some(page_scope), &mut iter, (0.0, 0.0, 612.0, 792.0), 0)
        .unwrap();

    assert_eq!(engine.resources_stack_depth(), 0);
    assert!(engine.sink().positions.is_empty());
}

