// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Benchmarks for classification and token construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typeline::{classify, Token};

fn bench_classify(c: &mut Criterion) {
    let inputs = [
        ("string", "hello"),
        ("sentence", "the quick brown fox"),
        ("character", "h"),
        ("integer", "100000"),
        ("hex", "0xff"),
        ("binary", "0b1011"),
        ("double", "100_000.001"),
        ("float", "100_000.001f"),
        ("boolean", "Accept"),
        ("rejected", "1.2.3"),
    ];

    for (name, text) in inputs {
        c.bench_function(&format!("classify_{}", name), |b| {
            b.iter(|| classify(black_box(text)))
        });
    }
}

fn bench_token(c: &mut Criterion) {
    c.bench_function("token_from_integer", |b| {
        b.iter(|| Token::from(black_box(255)))
    });

    c.bench_function("token_from_string", |b| {
        b.iter(|| Token::from(black_box("hello")))
    });

    let token = classify("65.5");
    c.bench_function("token_get_as", |b| {
        b.iter(|| black_box(&token).as_character())
    });
}

criterion_group!(benches, bench_classify, bench_token);
criterion_main!(benches);
