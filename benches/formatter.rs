use api_explorer::domain::formatter::{format_value, pretty_body, render, JsonInput};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

fn orders(count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": 1000 + i,
                "user_id": i % 7,
                "total": 12.5 * i as f64,
                "status": if i % 2 == 0 { "shipped" } else { "processing" },
                "tags": ["express", null, true],
                "meta": {}
            })
        })
        .collect();
    Value::Array(items)
}

fn benchmark_format_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_value");
    for size in [3, 100, 1000] {
        let value = orders(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| format_value(black_box(value), 0))
        });
    }
    group.finish();
}

fn benchmark_to_html(c: &mut Criterion) {
    let rendered = format_value(&orders(100), 0);
    c.bench_function("to_html_100_orders", |b| {
        b.iter(|| black_box(&rendered).to_html())
    });
}

fn benchmark_raw_input(c: &mut Criterion) {
    let text = orders(100).to_string();
    c.bench_function("render_raw_100_orders", |b| {
        b.iter(|| render(JsonInput::Raw(black_box(&text))))
    });
    c.bench_function("pretty_body_100_orders", |b| {
        b.iter(|| pretty_body(black_box(&text)))
    });
}

criterion_group!(
    benches,
    benchmark_format_value,
    benchmark_to_html,
    benchmark_raw_input
);
criterion_main!(benches);
