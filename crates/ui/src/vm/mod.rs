mod quiz_summary_vm;
mod quiz_vm;

pub use quiz_summary_vm::{QuizSummaryVm, map_quiz_summary};
pub use quiz_vm::{
    OptionState, OptionVm, QuestionPanelVm, QuizBody, QuizIntent, QuizScreen, QuizVm, start_quiz,
};
