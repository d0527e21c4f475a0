use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use pdfinterp::engine::Engine;
use pdfinterp::font::MockFont;
use pdfinterp::matrix::Matrix;
use pdfinterp::sink::TextPositionSink;

struct DiscardingSink;

impl TextPositionSink for DiscardingSink {
    fn on_text_position(&mut self, position: pdfinterp::sink::TextPosition) {
        black_box(position);
    }
}

fn bench_show_encoded_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_encoded_text");

    for &len in &[8usize, 64, 512] {
        let bytes = vec![b'A'; len];
        group.bench_with_input(
            criterion::BenchmarkId::new("ascii_run", len),
            &bytes,
            |b, bytes| {
                b.iter(|| {
                    let mut engine = Engine::new(DiscardingSink);
                    engine.set_text_matrix(Some(Matrix::IDENTITY));
                    engine.set_text_line_matrix(Some(Matrix::IDENTITY));
                    engine.graphics_state_mut().text_state.font = Some(Arc::new(MockFont::default()));
                    engine.graphics_state_mut().text_state.font_size = 12.0;
                    engine.graphics_state_mut().text_state.horizontal_scaling = 100.0;
                    engine.show_encoded_text(black_box(bytes)).unwrap();
                })
            },
        );
    }

    group.finish();
}

fn bench_matrix_multiply(c: &mut Criterion) {
    c.bench_function("matrix_multiply_chain", |b| {
        let m = Matrix::new(1.2, 0.1, -0.1, 1.1, 3.0, -4.0);
        b.iter(|| {
            let mut acc = Matrix::IDENTITY;
            for _ in 0..32 {
                acc = acc.multiply(black_box(&m));
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_show_encoded_text, bench_matrix_multiply);
criterion_main!(benches);
