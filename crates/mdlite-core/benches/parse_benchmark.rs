//! Benchmarks comparing mdlite against pulldown-cmark on the same input
//!
//! Run with: cargo bench -p mdlite-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdlite_core::cursor::Cursor;
use mdlite_core::{HtmlRenderer, Parser};
use pulldown_cmark::{html, Options, Parser as MdParser};

/// Sample written in the subset both parsers agree on.
const SAMPLE: &str = r#"---
title: Benchmark Document
version: 1
---
# Introduction

This is a paragraph with a [link](https://example.com) and `inline code`.
It demonstrates the basic capabilities of the format.

## Lists

- First item with some content
- Second item with a [reference](https://example.com/ref)
- Third item concluding the list

## Code Example

```
fn fibonacci(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}
```

## Closing

The best code is no code at all.
Every line of code you write is a liability.
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("mdlite", |b| {
        let parser = Parser::new();
        b.iter(|| {
            let result = parser.parse(black_box(SAMPLE)).unwrap();
            black_box(result.document.blocks.len())
        })
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(SAMPLE), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_html");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("mdlite", |b| {
        let parser = Parser::new();
        let renderer = HtmlRenderer::new();
        b.iter(|| {
            let result = parser.parse(black_box(SAMPLE)).unwrap();
            black_box(renderer.render(&result.document))
        })
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(SAMPLE), Options::all());
            let mut out = String::with_capacity(SAMPLE.len() * 2);
            html::push_html(&mut out, parser);
            black_box(out)
        })
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    // Repeat only the body so the front matter stays at the top.
    let body = SAMPLE.split_once("---\n# ").map(|(_, b)| b).unwrap_or(SAMPLE);

    for size in [1, 5, 10, 20].iter() {
        let content = format!("# {}", body.repeat(*size));
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("mdlite", size), &content, |b, content| {
            let parser = Parser::new();
            b.iter(|| {
                let result = parser.parse(black_box(content)).unwrap();
                black_box(result.document.blocks.len())
            })
        });

        group.bench_with_input(
            BenchmarkId::new("markdown", size),
            &content,
            |b, content| {
                b.iter(|| {
                    let parser = MdParser::new_ext(black_box(content), Options::all());
                    let events: Vec<_> = parser.collect();
                    black_box(events.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_inline_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let line = "This has `code`, [link](https://example.com), more text and `another span`.\n";

    group.bench_function("mdlite_inline", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(line));
            let inlines = mdlite_core::inline::parse_line(&mut cursor);
            black_box(inlines.len())
        })
    });

    group.bench_function("markdown_inline", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(line), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_render,
    bench_scaling,
    bench_inline_parsing
);
criterion_main!(benches);
