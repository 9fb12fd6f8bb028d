use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use jsx_text_lint::checkers::default_checkers;
use jsx_text_lint::parser::parse_document;
use jsx_text_lint::validation::{extract_segments, AttributePolicy, Validator};

/// Generate a component source with the given number of elements
fn generate_source(elements: usize, scenario: &str) -> String {
    let mut out = String::from("export function List() {\n  return (\n    <div>\n");

    for i in 0..elements {
        match scenario {
            "clean" => {
                out.push_str(&format!(
                    "      <p title=\"Row number {i}\">All changes saved</p>\n"
                ));
            }
            "misspelled" => {
                out.push_str(&format!(
                    "      <p title=\"Plsae wait for row {i}\">Your chagnes were saved</p>\n"
                ));
            }
            "fragmented" => {
                out.push_str(&format!(
                    "      <p>Row {{rows[{i}]}} of {{total}}</p>\n"
                ));
            }
            "repeated" => {
                // Identical copy on every row; exercises the memo cache
                out.push_str("      <p title=\"Plsae wait\">Loading more items</p>\n");
            }
            _ => {
                out.push_str(&format!("      <span>{i}%</span>\n"));
            }
        }
    }

    out.push_str("    </div>\n  );\n}\n");
    out
}

/// Benchmark segment extraction alone (the pure traversal pass)
fn bench_extraction(c: &mut Criterion) {
    let policy = AttributePolicy::with_defaults();
    let mut group = c.benchmark_group("extraction");

    for scenario in ["clean", "misspelled", "fragmented"] {
        let source = generate_source(1_000, scenario);
        let doc = parse_document("bench.tsx", &source);

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("scenario", scenario), &doc, |b, doc| {
            b.iter(|| black_box(extract_segments(black_box(doc), &policy)))
        });
    }

    group.finish();
}

/// Benchmark scanning plus extraction for different document sizes
fn bench_scan_and_extract(c: &mut Criterion) {
    let policy = AttributePolicy::with_defaults();
    let mut group = c.benchmark_group("scan_and_extract");

    for &size in &[100usize, 1_000, 5_000] {
        let source = generate_source(size, "clean");

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("elements", size), &source, |b, source| {
            b.iter(|| {
                let doc = parse_document("bench.tsx", black_box(source));
                black_box(extract_segments(&doc, &policy))
            })
        });
    }

    group.finish();
}

/// Benchmark full validation including checker dispatch
fn bench_full_validation(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("build runtime");

    let mut group = c.benchmark_group("full_validation");
    group.sample_size(20);

    for scenario in ["clean", "misspelled", "repeated"] {
        let source = generate_source(500, scenario);
        let doc = parse_document("bench.tsx", &source);
        let validator = Validator::new(
            AttributePolicy::with_defaults(),
            default_checkers(Vec::new()),
        );

        group.bench_with_input(BenchmarkId::new("scenario", scenario), &doc, |b, doc| {
            b.iter(|| {
                let diagnostics = runtime.block_on(validator.validate(black_box(doc)));
                black_box(diagnostics)
            })
        });
    }

    group.finish();
}

criterion_group!(
    validation_benches,
    bench_extraction,
    bench_scan_and_extract,
    bench_full_validation
);

criterion_main!(validation_benches);
