use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regender::{
    normalizer::{PronounReplacer, TextNormalizer},
    pronoun::remap_column,
    token::Tokens,
    Gender,
};

fn get_test_column() -> Vec<String> {
    "he told his brother that she would meet him and her daughters after the game \
     but the boys said they would rather stay home with their sister and the man"
        .split_whitespace()
        .cycle()
        .take(10_000)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
}

fn bench_remap_column(c: &mut Criterion) {
    let column = black_box(get_test_column());

    c.bench_function("remap-column", |b| {
        b.iter(|| remap_column(&column, Gender::Male, Gender::Neutral))
    });

    c.bench_function("normalizer-in-place", |b| {
        b.iter(|| {
            let mut tokens = column.iter().map(String::as_str).map(Into::into).collect::<Tokens>();
            PronounReplacer::new(Gender::Male, Gender::Neutral).normalize(&mut tokens);
            tokens
        })
    });
}

criterion_group!(benches, bench_remap_column);
criterion_main!(benches);
