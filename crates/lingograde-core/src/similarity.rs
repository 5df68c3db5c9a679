//! Positional string similarity.
//!
//! This is a fixed-alignment character match, not an edit distance: the
//! grader thresholds were calibrated against it, so "cat" vs "xcat" scores
//! low even though one contains the other.

/// Closeness of two strings in `[0, 1]`.
///
/// Both inputs are trimmed and lowercased. Equal strings score 1.0;
/// otherwise the score is the number of positions holding the same
/// character divided by the longer length.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return 1.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matches as f64 / longest as f64
}
