// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_lingo::i18n::{Dictionary, LocaleCode, LocaleOptions, LocaleRegistry};
use std::hint::black_box;

fn build_localizer(lang: &str) -> iced_lingo::i18n::Localizer {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    runtime
        .block_on(
            LocaleRegistry::bundled()
                .init(LocaleOptions::with_initial_locale(Some(lang.to_string()))),
        )
        .expect("init")
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let localizer = build_localizer("fr");
    group.bench_function("active_hit", |b| {
        b.iter(|| black_box(localizer.tr(black_box("app-title"))));
    });
    group.bench_function("fallback_hit", |b| {
        b.iter(|| black_box(localizer.tr(black_box("app-footer"))));
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(localizer.tr(black_box("no-such-key"))));
    });

    group.bench_function("parse_bundled_dictionary", |b| {
        b.iter(|| black_box(Dictionary::bundled(LocaleCode::Zh).expect("dictionary")));
    });

    group.finish();
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
