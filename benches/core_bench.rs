use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geometry_pad::core::{normalize_expression, Formula, SketchBoard, ViewWindow};
use geometry_pad::render::sample_graph;
use std::hint::black_box;

const EXPRESSIONS: [&str; 4] = ["2x", "x²+3x-1", "sin(pi*x)", "3(x+1)/(x²+e)"];

fn bench_normalizer(c: &mut Criterion) {
    c.bench_function("normalize_expression_mixed", |b| {
        b.iter(|| {
            for input in EXPRESSIONS {
                black_box(normalize_expression(black_box(input)));
            }
        })
    });
}

fn bench_formula(c: &mut Criterion) {
    let normalized: Vec<String> = EXPRESSIONS
        .iter()
        .filter_map(|input| normalize_expression(input))
        .collect();

    c.bench_function("formula_parse_mixed", |b| {
        b.iter(|| {
            for source in &normalized {
                black_box(Formula::parse(black_box(source)).expect("Ausdruck sollte parsen"));
            }
        })
    });

    let formula =
        Formula::parse("sin((3.14159265358979)*x)*x^2").expect("Ausdruck sollte parsen");
    c.bench_function("formula_eval_1000", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..1000 {
                sum += formula.eval(black_box(i as f64 * 0.01));
            }
            black_box(sum)
        })
    });
}

fn bench_graph_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_sampling");
    let formula = Formula::parse("tan(x)").expect("Ausdruck sollte parsen");
    let window = ViewWindow::initial(16.0 / 9.0);

    for &samples in &[400usize, 4000usize] {
        group.bench_with_input(BenchmarkId::new("tan", samples), &samples, |b, &n| {
            b.iter(|| black_box(sample_graph(&formula, &window, n).len()))
        });
    }

    group.finish();
}

fn bench_board_churn(c: &mut Criterion) {
    use geometry_pad::core::{Board, Color};
    use glam::DVec2;

    c.bench_function("board_create_and_remove_1000_points", |b| {
        b.iter(|| {
            let mut board = SketchBoard::new();
            let ids: Vec<_> = (0..1000)
                .map(|i| {
                    let p = DVec2::new(i as f64 * 0.1, (i % 7) as f64);
                    board.create_point(p, Color::SKY).id
                })
                .collect();
            board.remove_objects(&ids);
            black_box(board.object_count())
        })
    });
}

criterion_group!(
    benches,
    bench_normalizer,
    bench_formula,
    bench_graph_sampling,
    bench_board_churn
);
criterion_main!(benches);
