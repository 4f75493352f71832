use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ipa_core::dict::PronunciationStore;
use ipa_core::tokenize;

fn bench_store() -> PronunciationStore {
    let words = [
        ("bonjour", "/bɔ̃.ʒuʁ/"),
        ("bon", "/bɔ̃/"),
        ("jour", "/ʒuʁ/"),
        ("ça", "/sa/"),
        ("va", "/va/"),
        ("bien", "/bjɛ̃/"),
        ("merci", "/mɛʁ.si/"),
        ("beaucoup", "/bo.ku/"),
        ("le", "/lə/"),
        ("monde", "/mɔ̃d/"),
    ];
    words.into_iter().collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let store = bench_store();
    let base = "Bonjour le monde, ça va bien? Merci beaucoup! ";
    let mut group = c.benchmark_group("tokenize");
    for repeat in [1usize, 4, 16] {
        let sentence = base.repeat(repeat);
        group.bench_with_input(
            BenchmarkId::from_parameter(sentence.chars().count()),
            &sentence,
            |b, s| b.iter(|| tokenize(&store, s)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
