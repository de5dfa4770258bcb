/// The one wish Santa signs off on.
pub const CORRECT_ANSWER: &str = "an agreed scope and no change requests";

/// Exact match against [`CORRECT_ANSWER`], ignoring case and surrounding
/// whitespace. Independent of the feasibility score.
pub fn is_approved(wish: &str) -> bool {
    wish.trim().to_lowercase() == CORRECT_ANSWER
}
