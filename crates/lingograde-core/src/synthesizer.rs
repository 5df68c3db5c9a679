//! Practice question synthesis from analyzed document chunks.
//!
//! Each analyzed chunk yields one new question of the same type and
//! difficulty, with its prompt drawn from a fixed template bank.

use rand::Rng;
use uuid::Uuid;

use crate::lexicon::DEFAULT_CONCEPT;
use crate::model::{AnalyzedQuestion, Difficulty, Question, QuestionType};

/// Number of questions produced when the caller doesn't say.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Picks which template to use out of a bank of `len` entries.
pub trait TemplateChooser: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose(&self, len: usize) -> usize;
}

/// Uniform random selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl TemplateChooser for RandomChooser {
    fn choose(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the same slot, wrapped to the bank size.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl TemplateChooser for FixedChooser {
    fn choose(&self, len: usize) -> usize {
        self.0 % len
    }
}

const GRAMMAR_TEMPLATES: [&[&str]; 3] = [
    &[
        "Fill in the blank with the correct form of the verb: She ___ (walk) to school every morning.",
        "Complete the sentence: They ___ (be) very happy today.",
        "Choose the correct verb form: He ___ (like) playing football.",
    ],
    &[
        "Complete the sentence with the present perfect: I ___ (live) here for five years.",
        "Fill in the blank: By the time we arrived, the film ___ (start).",
        "Rewrite the sentence in the passive voice: The chef cooks the meal.",
    ],
    &[
        "Complete the conditional sentence: If I ___ (know) about the meeting, I would have attended.",
        "Fill in the blank with the subjunctive: It is essential that he ___ (be) present.",
        "Rewrite using an inversion: I had never seen such a beautiful sunset.",
    ],
];

const READING_TEMPLATES: [&[&str]; 3] = [
    &[
        "Read the passage: \"Tom has a red bike. He rides it to the park every Sunday.\" Question: Where does Tom ride his bike?",
        "Read the passage: \"Anna likes apples. She eats one every day.\" Question: How often does Anna eat an apple?",
    ],
    &[
        "Read the passage: \"The museum, built in 1890, attracts thousands of visitors each year because of its rare paintings.\" Question: Why is the museum popular?",
        "Read the passage: \"After losing his job, Mark started a small bakery, which quickly became the most popular shop in town.\" Question: What did Mark do after losing his job?",
    ],
    &[
        "Read the passage: \"Critics argue that remote work erodes company culture, yet productivity data suggests otherwise.\" Question: What is the author's implied position on remote work?",
        "Read the passage: \"Although the policy was intended to reduce traffic, it merely shifted congestion to nearby neighborhoods.\" Question: What was the unintended consequence of the policy?",
        "Read the passage: \"The novel's ambiguous ending invites readers to question the reliability of its narrator.\" Question: What effect does the ending have on the reader?",
    ],
];

const WRITING_TEMPLATES: [&[&str]; 3] = [
    &[
        "Introduce yourself in at least three sentences. Include your name, age, and hobby.",
        "Write a short paragraph about your favorite food and why you like it.",
    ],
    &[
        "Write a paragraph giving your opinion on whether students should wear school uniforms.",
        "Describe a memorable trip you have taken. Use at least five sentences.",
        "Write an email to a friend inviting them to your birthday party.",
    ],
    &[
        "Write an argumentative essay on whether social media does more harm than good.",
        "Write a critical analysis of the statement: \"Technology makes us less creative.\"",
    ],
];

const VOCABULARY_TEMPLATES: [&str; 3] = [
    "Choose the word that means \"very big\".",
    "Choose the phrasal verb that means \"to search for information\".",
    "Choose the word that best completes the sentence: The results were ___ with our predictions.",
];

const VOCABULARY_OPTIONS: [&str; 4] = ["option1", "option2", "option3", "option4"];
const VOCABULARY_CORRECT: &str = "option2";
const VOCABULARY_TIME: u32 = 2;

fn level(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Beginner => 0,
        Difficulty::Intermediate => 1,
        Difficulty::Advanced => 2,
    }
}

/// Minutes allotted to a synthesized question.
pub fn estimated_time(question_type: QuestionType, difficulty: Difficulty) -> u32 {
    let per_level: [u32; 3] = match question_type {
        QuestionType::Grammar | QuestionType::Unknown => [2, 3, 5],
        QuestionType::Vocabulary => [VOCABULARY_TIME; 3],
        QuestionType::Reading => [5, 8, 12],
        QuestionType::Writing => [10, 15, 25],
    };
    per_level[level(difficulty)]
}

fn title(question_type: QuestionType, difficulty: Difficulty) -> String {
    let kind = match question_type {
        QuestionType::Grammar | QuestionType::Unknown => "Grammar",
        QuestionType::Vocabulary => "Vocabulary",
        QuestionType::Reading => "Reading",
        QuestionType::Writing => "Writing",
    };
    let level = match difficulty {
        Difficulty::Beginner => "Beginner",
        Difficulty::Intermediate => "Intermediate",
        Difficulty::Advanced => "Advanced",
    };
    format!("{kind} Practice ({level})")
}

/// Builds new practice questions shaped like analyzed ones.
pub struct QuestionSynthesizer<C = RandomChooser> {
    chooser: C,
}

impl Default for QuestionSynthesizer<RandomChooser> {
    fn default() -> Self {
        Self {
            chooser: RandomChooser,
        }
    }
}

impl QuestionSynthesizer<RandomChooser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: TemplateChooser> QuestionSynthesizer<C> {
    /// Synthesizer with a caller-supplied template choice.
    pub fn with_chooser(chooser: C) -> Self {
        Self { chooser }
    }

    /// One question per analyzed chunk, at most `count` in total.
    pub fn generate_similar_questions(
        &self,
        analyzed: &[AnalyzedQuestion],
        count: usize,
    ) -> Vec<Question> {
        let questions: Vec<Question> = analyzed
            .iter()
            .take(count)
            .map(|a| self.synthesize(a))
            .collect();
        tracing::debug!(requested = count, generated = questions.len(), "synthesized questions");
        questions
    }

    fn pick(&self, bank: &[&'static str]) -> &'static str {
        bank[self.chooser.choose(bank.len()).min(bank.len() - 1)]
    }

    fn synthesize(&self, source: &AnalyzedQuestion) -> Question {
        let question_type = match source.question_type {
            QuestionType::Unknown => QuestionType::Grammar,
            other => other,
        };
        let difficulty = source.difficulty;
        let idx = level(difficulty);

        let (question_text, options, correct_answer) = match question_type {
            QuestionType::Vocabulary => (
                VOCABULARY_TEMPLATES[idx].to_string(),
                Some(VOCABULARY_OPTIONS.iter().map(|o| o.to_string()).collect()),
                Some(VOCABULARY_CORRECT.to_string()),
            ),
            QuestionType::Reading => (self.pick(READING_TEMPLATES[idx]).to_string(), None, None),
            QuestionType::Writing => (self.pick(WRITING_TEMPLATES[idx]).to_string(), None, None),
            QuestionType::Grammar | QuestionType::Unknown => {
                (self.pick(GRAMMAR_TEMPLATES[idx]).to_string(), None, None)
            }
        };

        let focus = source
            .concept_tags
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_CONCEPT);

        Question {
            id: format!("generated-{}", Uuid::new_v4()),
            question_type,
            difficulty,
            title: title(question_type, difficulty),
            question_text,
            options,
            correct_answer,
            rubric: Some(format!("Focus on {focus}")),
            concept_tags: source.concept_tags.clone(),
            estimated_time: estimated_time(question_type, difficulty),
        }
    }
}
