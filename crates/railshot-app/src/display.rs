//! Score display backed by the log.

use tracing::info;

use railshot_sim::display::ScoreDisplay;

/// Writes every score text update to the log and remembers the last one.
#[derive(Debug, Default)]
pub struct LogDisplay {
    last: Option<String>,
}

impl LogDisplay {
    pub fn last_text(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl ScoreDisplay for LogDisplay {
    fn set_score_text(&mut self, text: &str) {
        info!(text, "score display updated");
        self.last = Some(text.to_owned());
    }
}
