use std::sync::Arc;

use async_trait::async_trait;
use dioxus::prelude::*;
use services::QuizPhase;
use storage::{QuestionRecord, QuestionRepository, StorageError};

use super::test_harness::{ViewKind, record, setup_view_harness, setup_view_harness_with_source};
use crate::feedback::{Avatar, Cue};
use crate::views::{QuizHeader, SummaryCard};
use crate::vm::{QuizIntent, QuizSummaryVm};

fn two_questions() -> Vec<QuestionRecord> {
    vec![
        record("Which source is renewable?", "A", "Sunlight never runs out."),
        record("Which one spins a turbine with air?", "C", "Wind farms work best on hills."),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_start_button() {
    let mut harness = setup_view_harness(ViewKind::Home, two_questions());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to the Energy4All Quiz"), "missing welcome in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, two_questions());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing counter in {html}");
    assert!(html.contains("Which source is renewable?"), "missing prompt in {html}");
    assert!(html.contains("Level 1"), "missing level in {html}");
    assert!(html.contains("🌳"), "missing placeholder avatar in {html}");
    assert!(html.contains("0%"), "missing progress in {html}");
    assert!(!html.contains("💡"), "tip shown before answering in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_wrong_answer_reveals_tip_and_plays_cues() {
    let mut harness = setup_view_harness(ViewKind::Quiz, two_questions());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    harness.handles.dispatch().call(QuizIntent::Select(1));
    harness.drive();

    let html = harness.render();
    assert!(html.contains("quiz-option--incorrect"), "missing wrong mark in {html}");
    assert!(html.contains("quiz-option--correct"), "missing right mark in {html}");
    assert!(html.contains("💡 Sunlight never runs out."), "missing tip in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
    assert!(html.contains("50%"), "missing progress in {html}");
    assert_eq!(
        harness.cues.played(),
        vec![(Cue::Background, 0), (Cue::Incorrect, 0), (Cue::Reveal, 0)]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_runs_to_completion_and_restarts() {
    let mut harness = setup_view_harness(ViewKind::Quiz, two_questions());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::Select(0));
    harness.drive();
    dispatch.call(QuizIntent::Next);
    harness.drive();
    assert!(harness.render().contains("Question 2 of 2"));

    dispatch.call(QuizIntent::Select(0));
    harness.drive();
    assert!(harness.render().contains("See Results"));
    dispatch.call(QuizIntent::Next);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Quiz Completed!"), "missing headline in {html}");
    assert!(html.contains("Your final score is 1 out of 2"), "missing score in {html}");
    assert!(html.contains("Try Again"), "missing restart in {html}");
    assert!(html.contains("100%"), "missing full progress in {html}");

    dispatch.call(QuizIntent::Restart);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "restart did not reset in {html}");
    let vm = harness.handles.vm();
    let phase = vm.read().as_ref().map(|vm| vm.phase());
    assert_eq!(phase, Some(QuizPhase::AwaitingAnswer));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_quit_mid_run_abandons_the_run() {
    let mut harness = setup_view_harness(ViewKind::Quiz, two_questions());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    assert!(harness.render().contains("quiz-quit"), "missing quit button");
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::Select(0));
    harness.drive();
    dispatch.call(QuizIntent::Next);
    harness.drive();
    dispatch.call(QuizIntent::Quit);
    harness.drive();

    let vm = harness.handles.vm();
    let state = vm
        .read()
        .as_ref()
        .map(|vm| (vm.phase(), vm.session().current_index(), vm.session().score()));
    assert_eq!(state, Some((QuizPhase::AwaitingAnswer, 0, 0)));
    assert!(harness.render().contains("Question 1 of 2"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_plays_background_cue_once_loaded() {
    let mut harness = setup_view_harness(ViewKind::Quiz, two_questions());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    assert_eq!(harness.cues.played(), vec![(Cue::Background, 0)]);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_with_empty_bank_shows_no_questions() {
    let mut harness = setup_view_harness(ViewKind::Quiz, Vec::new());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("There were no questions in this quiz."),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reports_malformed_row() {
    let broken = record("Which source is renewable?", "E", "tip");
    let mut harness =
        setup_view_harness(ViewKind::Quiz, vec![two_questions().remove(0), broken]);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("The question file has a problem on row 2."),
        "missing row error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

struct UnreadableSource;

#[async_trait]
impl QuestionRepository for UnreadableSource {
    async fn load_records(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "energy_quizzes.csv",
        )))
    }

    fn describe(&self) -> String {
        "unreadable".to_string()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reports_unreadable_file() {
    let mut harness = setup_view_harness_with_source(ViewKind::Quiz, Arc::new(UnreadableSource));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("The question file could not be read."),
        "missing file error in {html}"
    );
}

#[test]
fn quiz_header_renders_avatar_level_and_progress() {
    #[component]
    fn Harness() -> Element {
        rsx! {
            QuizHeader {
                level_label: "Level 2".to_string(),
                avatar: Avatar::Image { src: "assets/images/avatar2.png".to_string() },
                percent: 40,
            }
        }
    }

    let mut dom = VirtualDom::new(Harness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("assets/images/avatar2.png"), "missing avatar in {html}");
    assert!(html.contains("Level 2"), "missing level in {html}");
    assert!(html.contains("width: 40%"), "missing bar width in {html}");
}

#[test]
fn summary_card_renders_score_and_percent() {
    #[component]
    fn Harness() -> Element {
        rsx! {
            SummaryCard {
                summary: QuizSummaryVm {
                    score: 3,
                    total: 4,
                    headline: "🏆 Quiz Completed!".to_string(),
                    detail: "Your final score is 3 out of 4".to_string(),
                    percent_label: Some("75%".to_string()),
                },
            }
        }
    }

    let mut dom = VirtualDom::new(Harness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Your final score is 3 out of 4"), "missing detail in {html}");
    assert!(html.contains("75%"), "missing percent in {html}");
}
