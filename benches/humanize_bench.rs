//! Criterion benchmarks for the humaniseur pipeline.
//!
//! Covers segmentation, n-gram embedding and full transformation with and
//! without a synonym dictionary.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use humaniseur::analysis::segmenter::Segmenter;
use humaniseur::analysis::segmenter::french::FrenchSegmenter;
use humaniseur::embedding::{NGramEmbedder, TextEmbedder};
use humaniseur::humanizer::Humanizer;
use humaniseur::synonym::SynonymDictionary;

const PARAGRAPH: &str = "Le chat dort sur le canapé. Il fait beau depuis ce matin. \
    Les résultats de l'étude sont importants pour la recherche. \
    Nous devons utiliser une méthode rapide et facile. \
    Pourquoi commencer un nouveau travail maintenant? La maison est grande.";

fn generate_text(paragraphs: usize) -> String {
    vec![PARAGRAPH; paragraphs].join("\n\n")
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");
    let segmenter = FrenchSegmenter::new();
    let text = generate_text(20);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("segment_20_paragraphs", |b| {
        b.iter(|| black_box(segmenter.segment(black_box(&text)).unwrap()))
    });
    group.finish();
}

fn bench_embedding(c: &mut Criterion) {
    let mut group = c.benchmark_group("embedding");
    let embedder = NGramEmbedder::new();
    let words = [
        "important",
        "essentiel",
        "majeur",
        "considérable",
        "rapidement",
        "promptement",
    ];

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("ngram_embed_batch", |b| {
        b.iter(|| black_box(embedder.embed_batch(black_box(&words)).unwrap()))
    });
    group.finish();
}

fn bench_humanize(c: &mut Criterion) {
    let mut group = c.benchmark_group("humanize");
    let text = generate_text(20);

    let plain = Humanizer::builder().p_academic_transition(0.4).build().unwrap();
    group.bench_function("transitions_only", |b| {
        b.iter(|| black_box(plain.humanize(black_box(&text), false, Some(42)).unwrap()))
    });

    let dictionary = SynonymDictionary::load_from_file("resource/synonymes.json").unwrap();
    let with_synonyms = Humanizer::builder()
        .p_synonym_replacement(1.0)
        .p_academic_transition(0.4)
        .synonym_source(Arc::new(dictionary))
        .build()
        .unwrap();
    group.bench_function("with_dictionary", |b| {
        b.iter(|| {
            black_box(
                with_synonyms
                    .humanize(black_box(&text), true, Some(42))
                    .unwrap(),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_embedding, bench_humanize);
criterion_main!(benches);
