//! Scanner throughput benchmarks.
//!
//! Measures pure tokenization speed: keyword resolution included, no
//! collection into a `Vec`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zinc_lexer::{Scanner, SourceBuffer, TokenKind};

/// Generate N simple functions for scaling benchmarks.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("u32 scale{i}(u32 x) {{ return x << 1 + {i}; // doubled\n}}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark scanner throughput at various scales.
fn bench_scanner_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        let bytes = u64::try_from(source.len()).unwrap_or(u64::MAX);

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let buf = SourceBuffer::new(src);
                    let mut scanner = Scanner::new(buf.cursor());
                    loop {
                        match scanner.next_token() {
                            Ok(token) if token.kind == TokenKind::Eof => break,
                            Ok(token) => {
                                black_box(token);
                            }
                            Err(_) => break,
                        }
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scanner_throughput);
criterion_main!(benches);
