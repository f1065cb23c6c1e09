//! Display sink for the score text.

/// Receives formatted score text, at most once per tick.
pub trait ScoreDisplay {
    fn set_score_text(&mut self, text: &str);
}
