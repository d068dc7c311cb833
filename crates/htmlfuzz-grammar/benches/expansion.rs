use criterion::{black_box, criterion_group, criterion_main, Criterion};
use htmlfuzz_grammar::{html_grammar, Expander, GrammarFlavor, MutationPayload, START_SYMBOL};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn bench_build(c: &mut Criterion) {
    c.bench_function("html_grammar_build_corpus", |b| {
        b.iter(|| html_grammar(black_box(&GrammarFlavor::Corpus)).unwrap());
    });
}

fn bench_generate(c: &mut Criterion) {
    let payload = MutationPayload::render("1700000000.000000", 8080);
    let grammar = Arc::new(html_grammar(&GrammarFlavor::Fuzz(payload)).unwrap());
    let expander = Expander::new(grammar);

    c.bench_function("html_document_generate", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            // Bound failures are part of the workload being measured
            let _ = black_box(expander.generate(START_SYMBOL, &mut rng));
        });
    });
}

criterion_group!(benches, bench_build, bench_generate);
criterion_main!(benches);
