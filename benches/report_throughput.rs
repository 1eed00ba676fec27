//! Report generation throughput benchmarks
//!
//! Measures projection plus rendering for each output format at several
//! catalog sizes.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quire::{
    Book, EntityRef, FilterParams, InMemoryCatalog, ReportEngine, ReportFormat, ReportKind,
    ReportRequest,
};
use rust_decimal::Decimal;

fn catalog(book_count: i64) -> InMemoryCatalog {
    let books = (0..book_count)
        .map(|i| Book {
            id: i,
            title: format!("Collected Essays, Volume {}", i),
            isbn: format!("978-1-{:09}", i),
            price: Some(Decimal::new(1000 + i % 5000, 2)),
            description: None,
            publication_year: Some(1900 + (i % 120) as i32),
            author: Some(EntityRef::new(i % 50, format!("Author {}", i % 50))),
            store: Some(EntityRef::new(i % 7, format!("Store {}", i % 7))),
            created_at: None,
        })
        .collect();
    InMemoryCatalog::new().with_books(books)
}

fn engine(book_count: i64) -> ReportEngine {
    ReportEngine::builder()
        .with_catalog(catalog(book_count))
        .build()
        .expect("Failed to build engine")
}

fn benchmark_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("books_report");
    let params = FilterParams::new();

    for book_count in [10, 100, 1000] {
        let engine = engine(book_count);
        group.throughput(Throughput::Elements(book_count as u64));

        for format in ReportFormat::ALL {
            group.bench_with_input(
                BenchmarkId::new(format.as_str(), book_count),
                &format,
                |b, &format| {
                    b.iter(|| {
                        engine
                            .generate(ReportKind::Books, format, &params)
                            .expect("Failed to generate report")
                    })
                },
            );
        }
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let engine = engine(500);
    let requests: Vec<ReportRequest> = ReportFormat::ALL
        .into_iter()
        .cycle()
        .take(16)
        .map(|format| ReportRequest::new(ReportKind::Books, format))
        .collect();

    group.bench_function("mixed_formats_16", |b| {
        b.iter(|| engine.generate_batch(&requests))
    });

    group.finish();
}

criterion_group!(benches, benchmark_formats, benchmark_batch);
criterion_main!(benches);
