//! Simulated OCR extractor.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;

use lingograde_core::error::ExtractionError;
use lingograde_core::model::UploadedFile;
use lingograde_core::traits::TextExtractor;

const DEFAULT_DELAY_MS: u64 = 2000;

/// Worksheet texts returned by [`SimulatedExtractor`].
pub const SAMPLE_WORKSHEETS: &[&str] = &[
    "English Grammar Worksheet\n\
     Question 1: Fill in the blank with the correct form of the verb: She ___ (go) to school every day.\n\
     Question 2: Complete the sentence using the past simple tense: Yesterday I ___ (visit) my grandmother.\n\
     Question 3: Choose the correct tense: By next year, they ___ (finish) the project.\n\
     Question 4: Write a short paragraph describing your last holiday.",
    "Reading Comprehension\n\
     1. Read the passage below and answer: Why did Maria move to London?\n\
     2. What is the main idea of the second paragraph?\n\
     3. Choose the best synonym for the word \"reluctant\" as used in the text.\n\
     4. Write an essay giving your opinion on city life versus country life.",
    "Vocabulary Review\n\
     Question 1: Match each word with its meaning: abundant, scarce, vivid.\n\
     Question 2: Which phrasal verb means to postpone? Use the vocabulary list.\n\
     Question 3: If I ___ (be) rich, I would travel the world. Complete the conditional sentence.\n\
     Question 4: The report ___ (write) by the committee last week. Use the passive voice.",
];

/// Stands in for a real OCR service. Waits a configurable delay, then
/// returns one of [`SAMPLE_WORKSHEETS`] at random.
pub struct SimulatedExtractor {
    delay: Duration,
}

impl SimulatedExtractor {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Default for SimulatedExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS)
    }
}

#[async_trait]
impl TextExtractor for SimulatedExtractor {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        tracing::debug!(file = %file.name, delay_ms = self.delay.as_millis() as u64, "simulating extraction");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let sample = SAMPLE_WORKSHEETS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();
        Ok(sample.to_string())
    }
}
