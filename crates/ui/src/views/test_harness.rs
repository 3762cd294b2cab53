use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::QuizLoopService;
use storage::{InMemoryQuestionSource, QuestionRecord, QuestionRepository};

use crate::context::{UiApp, build_app_context};
use crate::feedback::{AvatarSet, Cue, CueError, CuePlayer};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, QuizView};

/// Remembers every cue with the tier it was played at.
#[derive(Default)]
pub struct RecordingCuePlayer {
    played: Mutex<Vec<(Cue, u32)>>,
}

impl RecordingCuePlayer {
    pub fn played(&self) -> Vec<(Cue, u32)> {
        self.played.lock().expect("cue log").clone()
    }
}

impl CuePlayer for RecordingCuePlayer {
    fn play(&self, cue: Cue, tier: u32) -> Result<(), CueError> {
        self.played.lock().expect("cue log").push((cue, tier));
        Ok(())
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    avatars: Arc<AvatarSet>,
    cues: Arc<RecordingCuePlayer>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn avatars(&self) -> Arc<AvatarSet> {
        Arc::clone(&self.avatars)
    }

    fn cues(&self) -> Arc<dyn CuePlayer> {
        self.cues.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
    pub cues: Arc<RecordingCuePlayer>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let pending resources resolve and re-render.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn record(prompt: &str, answer: &str, tip: &str) -> QuestionRecord {
    QuestionRecord::new(
        prompt,
        ["Solar", "Coal", "Wind", "Oil"],
        answer,
        tip,
    )
}

pub fn setup_view_harness(view: ViewKind, records: Vec<QuestionRecord>) -> ViewHarness {
    let source: Arc<dyn QuestionRepository> = Arc::new(InMemoryQuestionSource::new(records));
    setup_view_harness_with_source(view, source)
}

pub fn setup_view_harness_with_source(
    view: ViewKind,
    source: Arc<dyn QuestionRepository>,
) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(source).with_shuffle(false));
    let cues = Arc::new(RecordingCuePlayer::default());
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        quiz_loop,
        avatars: Arc::new(AvatarSet::default()),
        cues: Arc::clone(&cues),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles, cues }
}
