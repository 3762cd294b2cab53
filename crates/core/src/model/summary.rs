/// Final result of a completed quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    score: u32,
    total: u32,
}

impl QuizSummary {
    /// Build a summary, clamping `score` to `total`.
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self {
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// False for a run over an empty question set.
    #[must_use]
    pub fn has_questions(&self) -> bool {
        self.total > 0
    }

    /// Whole-number percentage of correct answers, rounded down.
    ///
    /// Returns `None` when there were no questions.
    #[must_use]
    pub fn percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let percent = u64::from(self.score) * 100 / u64::from(self.total);
        u32::try_from(percent).ok()
    }
}
