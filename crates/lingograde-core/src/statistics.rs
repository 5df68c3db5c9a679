//! Aggregate scoring across one submission.

use crate::model::GradingResult;

/// Rounded mean of the scores, or 0 for no results.
pub fn calculate_total_score<'a, I>(results: I) -> u32
where
    I: IntoIterator<Item = &'a GradingResult>,
{
    let (sum, count) = results
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), r| (sum + r.score as u64, count + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}

/// Number of results marked correct.
pub fn count_correct<'a, I>(results: I) -> usize
where
    I: IntoIterator<Item = &'a GradingResult>,
{
    results.into_iter().filter(|r| r.is_correct).count()
}

/// Summary sentence for a submission, tiered on `total_score`.
///
/// Tiers start at 90, 70, and 50; a score exactly on a boundary belongs to
/// the higher tier.
pub fn generate_overall_feedback<'a, I>(results: I, total_score: u32) -> String
where
    I: IntoIterator<Item = &'a GradingResult>,
{
    let (correct, total) = results.into_iter().fold((0usize, 0usize), |(c, t), r| {
        (c + usize::from(r.is_correct), t + 1)
    });
    let percentage = if total == 0 {
        0
    } else {
        (100.0 * correct as f64 / total as f64).round() as u32
    };

    match total_score {
        90.. => format!(
            "Outstanding work! You scored {total_score} points and answered {correct} of {total} questions correctly ({percentage}%). Keep it up!"
        ),
        70..=89 => format!(
            "Good job! You scored {total_score} points with {correct} of {total} questions correct ({percentage}%). A little more practice will get you to the top."
        ),
        50..=69 => format!(
            "Fair effort. You scored {total_score} points and got {correct} of {total} questions right ({percentage}%). Review the suggestions for each question."
        ),
        _ => format!(
            "Keep practicing. You scored {total_score} points with {correct} of {total} questions correct ({percentage}%). Focus on the basics and try again."
        ),
    }
}
