use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lingograde_core::analyzer::{analyze_text, segment_text};
use lingograde_core::synthesizer::{FixedChooser, QuestionSynthesizer};

fn worksheet(questions: usize) -> String {
    let prompts = [
        "Fill in the blank with the correct form of the verb: She ___ (go) to school every day.",
        "Choose the best synonym for the word \"happy\" from the vocabulary list.",
        "Read the passage and answer: What did Tom do yesterday after work?",
        "Write a short essay giving your opinion on online learning.",
        "Complete the conditional sentence: If I ___ (be) you, I would apologize.",
    ];
    let mut s = String::from("English Practice Worksheet\n");
    for i in 0..questions {
        s.push_str(&format!("Question {}: {}\n", i + 1, prompts[i % prompts.len()]));
    }
    s
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_text");

    let small = worksheet(5);
    let large = worksheet(200);

    group.bench_function("small", |b| b.iter(|| segment_text(black_box(&small))));
    group.bench_function("large", |b| b.iter(|| segment_text(black_box(&large))));

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_text");

    let small = worksheet(5);
    let large = worksheet(200);
    let unmarked = "Just some prose about learning English without any markers. ".repeat(10);

    group.bench_function("small", |b| b.iter(|| analyze_text(black_box(&small))));
    group.bench_function("large", |b| b.iter(|| analyze_text(black_box(&large))));
    group.bench_function("unmarked", |b| b.iter(|| analyze_text(black_box(&unmarked))));

    group.finish();
}

fn bench_synthesis(c: &mut Criterion) {
    let analyzed = analyze_text(&worksheet(20));
    let synth = QuestionSynthesizer::with_chooser(FixedChooser(0));

    c.bench_function("generate_similar_questions", |b| {
        b.iter(|| synth.generate_similar_questions(black_box(&analyzed), black_box(20)))
    });
}

criterion_group!(benches, bench_segmentation, bench_analysis, bench_synthesis);
criterion_main!(benches);
