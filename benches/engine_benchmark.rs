use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use indexbench::core::config::Config;
use indexbench::core::types::{Corpus, Record, RecordId};
use indexbench::query::types::{Query, QueryKind};
use indexbench::search::EngineKind;

/// Word-soup corpus so every engine sees realistic token repetition.
fn generate_corpus(size: usize) -> Corpus {
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "funny", "book",
        "boring", "story", "great", "read", "review",
    ];
    let mut rng = rand::thread_rng();

    let records = (0..size)
        .map(|i| {
            let text: String = (0..30)
                .map(|_| words[rng.gen_range(0..words.len())])
                .collect::<Vec<_>>()
                .join(" ");
            Record::new(RecordId(i as u32), text)
        })
        .collect();

    Corpus::from_records(records)
}

/// Build plus one exact query, the span the harness measures.
fn bench_build_and_query(c: &mut Criterion) {
    let config = Config::default();
    let query = Query::parse("funny book", QueryKind::Exact).unwrap();

    let mut group = c.benchmark_group("build_and_query_exact");
    for size in [100, 1_000, 10_000].iter() {
        let corpus = generate_corpus(*size);
        for kind in EngineKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), size),
                &corpus,
                |b, corpus| {
                    b.iter(|| {
                        let mut engine = kind.create(&config);
                        engine.build(corpus).unwrap();
                        black_box(engine.query(corpus, &query, 500).unwrap())
                    });
                },
            );
        }
    }
    group.finish();
}

/// Query latency alone, against a prebuilt index.
fn bench_query_only(c: &mut Criterion) {
    let config = Config::default();
    let corpus = generate_corpus(10_000);
    let exact = Query::parse("funny", QueryKind::Exact).unwrap();
    let prefix = Query::parse("bo", QueryKind::Prefix).unwrap();

    let mut group = c.benchmark_group("query_only");
    for kind in EngineKind::ALL {
        let mut engine = kind.create(&config);
        engine.build(&corpus).unwrap();

        group.bench_function(BenchmarkId::new("exact", kind.name()), |b| {
            b.iter(|| black_box(engine.query(&corpus, &exact, 500).unwrap()));
        });
        group.bench_function(BenchmarkId::new("prefix", kind.name()), |b| {
            b.iter(|| black_box(engine.query(&corpus, &prefix, 500).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_and_query, bench_query_only);
criterion_main!(benches);
