use quiz_core::model::QuizSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSummaryVm {
    pub score: u32,
    pub total: u32,
    pub headline: String,
    pub detail: String,
    pub percent_label: Option<String>,
}

impl From<&QuizSummary> for QuizSummaryVm {
    fn from(summary: &QuizSummary) -> Self {
        let detail = if summary.has_questions() {
            format!(
                "Your final score is {} out of {}",
                summary.score(),
                summary.total()
            )
        } else {
            "There were no questions in this quiz.".to_string()
        };
        Self {
            score: summary.score(),
            total: summary.total(),
            headline: "🏆 Quiz Completed!".to_string(),
            detail,
            percent_label: summary.percent().map(|percent| format!("{percent}%")),
        }
    }
}

#[must_use]
pub fn map_quiz_summary(summary: &QuizSummary) -> QuizSummaryVm {
    QuizSummaryVm::from(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_score_and_percent() {
        let vm = map_quiz_summary(&QuizSummary::new(3, 4));
        assert_eq!(vm.detail, "Your final score is 3 out of 4");
        assert_eq!(vm.percent_label.as_deref(), Some("75%"));
    }

    #[test]
    fn empty_quiz_has_no_percent() {
        let vm = map_quiz_summary(&QuizSummary::new(0, 0));
        assert_eq!(vm.detail, "There were no questions in this quiz.");
        assert_eq!(vm.percent_label, None);
    }
}
