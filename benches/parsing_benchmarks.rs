use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use atlas_lint::parser::{extract_documents, parse_title, split_lines};

const TITLES: [&str; 4] = [
    "## A.1 - Intro [Section]  <!-- UUID: 8650a584-01f8-45d6-882b-c14eab9879c4 -->",
    "##### A.1.2.3.0.3.1 - A longer name - with dashes [Annotation]  <!-- UUID: 8650a584-01f8-45d6-882b-c14eab9879c4 -->",
    "#### NR-12 - Question [Needed Research]  <!-- UUID:  -->",
    "## A.1 - Broken [Section] <!-- UUID: abc -->",
];

/// Generate an Atlas file with the given number of documents
fn generate_atlas_content(documents: usize) -> String {
    let mut content = String::new();
    for i in 0..documents {
        content.push_str(&format!(
            "### A.1.1.{} - Document {} [Core]  <!-- UUID: 00000000-0000-0000-0000-{:012x} -->\n\n",
            i, i, i
        ));
        content.push_str("Body text for the document.\n\nMore prose with a [link](x).\n\n");
    }
    content
}

fn bench_parse_title(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_title");

    for (idx, title) in TITLES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("title", idx), title, |b, title| {
            b.iter(|| parse_title(black_box(title), 1))
        });
    }

    group.finish();
}

fn bench_extract_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_documents");

    for documents in [100, 1_000, 10_000].iter() {
        let content = generate_atlas_content(*documents);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("documents", documents),
            &content,
            |b, content| {
                b.iter(|| {
                    let lines = split_lines(black_box(content));
                    extract_documents(&lines)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_title, bench_extract_documents);
criterion_main!(benches);
