use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lingograde_core::engine::GradingEngine;
use lingograde_core::graders::WritingMetrics;
use lingograde_core::model::{Difficulty, Question, QuestionType};
use lingograde_core::similarity::similarity;

fn make_question(question_type: QuestionType, correct: Option<&str>) -> Question {
    Question {
        id: "bench".into(),
        question_type,
        difficulty: Difficulty::Intermediate,
        title: "Bench".into(),
        question_text: "Introduce yourself and describe your favorite hobby.".into(),
        options: None,
        correct_answer: correct.map(str::to_string),
        rubric: Some("Benchmark rubric".into()),
        concept_tags: vec!["Writing".into()],
        estimated_time: 10,
    }
}

const ESSAY: &str = "My name is Sam and I am twenty years old. I study biology at the \
    university in my city. My favorite hobby is climbing because it keeps me strong and \
    calm. On weekends I travel to the mountains with friends. Sometimes we camp under the \
    stars and cook dinner over a small fire.";

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    group.bench_function("short", |b| {
        b.iter(|| similarity(black_box("goes"), black_box("go")))
    });

    let long_a = "the quick brown fox jumps over the lazy dog ".repeat(20);
    let long_b = "the quick brown cat jumps over the lazy dog ".repeat(20);
    group.bench_function("long", |b| {
        b.iter(|| similarity(black_box(&long_a), black_box(&long_b)))
    });

    group.finish();
}

fn bench_grading(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade_answer");
    let engine = GradingEngine::new();

    let grammar = make_question(QuestionType::Grammar, Some("has been living"));
    group.bench_function("grammar", |b| {
        b.iter(|| engine.grade_answer(black_box(&grammar), black_box("has lived")))
    });

    let reading = make_question(
        QuestionType::Reading,
        Some("tom rides his bike to the park on sunday"),
    );
    group.bench_function("reading", |b| {
        b.iter(|| engine.grade_answer(black_box(&reading), black_box("He rides to the park")))
    });

    let writing = make_question(QuestionType::Writing, None);
    group.bench_function("writing", |b| {
        b.iter(|| engine.grade_answer(black_box(&writing), black_box(ESSAY)))
    });

    group.bench_function("writing_metrics", |b| {
        b.iter(|| WritingMetrics::measure(black_box(&writing.question_text), black_box(ESSAY)))
    });

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_grading);
criterion_main!(benches);
