#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::feedback::{Avatar, Cue, play_cue};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    OptionState, OptionVm, QuestionPanelVm, QuizBody, QuizIntent, QuizScreen, QuizSummaryVm,
    QuizVm, start_quiz,
};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let avatars = ctx.avatars();
    let cues = ctx.cues();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);

    let ambient = cues.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let ambient = ambient.clone();
        let mut error = error;
        let mut vm = vm;

        async move {
            let started = start_quiz(&quiz_loop).await?;
            let tier = started.session().level();
            vm.set(Some(started));
            error.set(None);
            play_cue(ambient.as_ref(), Cue::Background, tier);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut error = error;
        let mut vm = vm;

        let result = match vm.write().as_mut() {
            Some(vm) => vm.apply(intent),
            None => Err(ViewError::Unknown),
        };

        match result {
            Ok(played) => {
                error.set(None);
                let tier = vm.read().as_ref().map_or(0, |vm| vm.session().level());
                for cue in played {
                    play_cue(cues.as_ref(), cue, tier);
                }
            }
            Err(err) => error.set(Some(err)),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let screen = vm.read().as_ref().map(QuizVm::screen);
    let avatar = screen.as_ref().map(|screen| avatars.resolve(screen.tier));

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "quiz-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = *error.read() {
                        p { class: "quiz-error", "{err.message()}" }
                    }
                    if let (Some(screen), Some(avatar)) = (screen, avatar) {
                        QuizScreenView { screen, avatar, on_intent: dispatch_intent }
                    }
                    button {
                        class: "btn btn-ghost quiz-quit",
                        id: "quiz-quit",
                        r#type: "button",
                        onclick: move |_| {
                            dispatch_intent.call(QuizIntent::Quit);
                            let _ = navigator.push(Route::Home {});
                        },
                        "Quit"
                    }
                },
            }
        }
    }
}

#[component]
fn QuizScreenView(
    screen: QuizScreen,
    avatar: Avatar,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        QuizHeader {
            level_label: screen.level_label.clone(),
            avatar,
            percent: screen.progress_percent,
        }
        match screen.body {
            QuizBody::Question(panel) => rsx! {
                QuestionPanel { panel, on_intent }
            },
            QuizBody::Complete(summary) => rsx! {
                SummaryCard { summary }
                button {
                    class: "btn btn-primary",
                    id: "quiz-restart",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Try Again 🔁"
                }
            },
        }
    }
}

/// Avatar, level and progress bar shown above the question.
#[component]
pub fn QuizHeader(level_label: String, avatar: Avatar, percent: u8) -> Element {
    rsx! {
        div { class: "quiz-header",
            match avatar {
                Avatar::Image { src } => rsx! {
                    img { class: "quiz-avatar", src: "{src}", alt: "avatar", width: "100", height: "100" }
                },
                Avatar::Placeholder(glyph) => rsx! {
                    span { class: "quiz-avatar quiz-avatar--placeholder", "{glyph}" }
                },
            }
            span { class: "quiz-level", "{level_label}" }
            div {
                class: "quiz-progress",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{percent}",
                div { class: "quiz-progress__fill", style: "width: {percent}%;" }
                span { class: "quiz-progress__label", "{percent}%" }
            }
        }
    }
}

#[component]
fn QuestionPanel(panel: QuestionPanelVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-question",
            p { class: "quiz-question__counter", "{panel.counter_label}" }
            h3 { class: "quiz-question__prompt", "{panel.prompt}" }
            div { class: "quiz-options",
                for (idx, option) in panel.options.iter().cloned().enumerate() {
                    OptionButton { key: "{idx}", option, on_intent }
                }
            }
            if let Some(tip) = panel.tip.clone() {
                p { class: "quiz-tip", "💡 {tip}" }
            }
            if panel.can_advance {
                button {
                    class: "btn btn-primary quiz-next",
                    id: "quiz-next",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{panel.next_label}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = match option.state {
        OptionState::Idle => "quiz-option",
        OptionState::Correct => "quiz-option quiz-option--correct",
        OptionState::Incorrect => "quiz-option quiz-option--incorrect",
    };
    let index = option.index;
    rsx! {
        button {
            class: "{class}",
            id: "quiz-option-{option.letter}",
            r#type: "button",
            disabled: !option.enabled,
            onclick: move |_| on_intent.call(QuizIntent::Select(index)),
            "{option.text}"
        }
    }
}

/// Final score card.
#[component]
pub fn SummaryCard(summary: QuizSummaryVm) -> Element {
    rsx! {
        div { class: "quiz-complete",
            h3 { class: "quiz-complete__title", "{summary.headline}" }
            p { class: "quiz-complete__detail", "{summary.detail}" }
            if let Some(percent) = summary.percent_label.clone() {
                p { class: "quiz-complete__percent", "{percent}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
