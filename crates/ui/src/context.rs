use std::sync::Arc;

use services::QuizLoopService;

use crate::feedback::{AvatarSet, CuePlayer};

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
    fn avatars(&self) -> Arc<AvatarSet>;
    fn cues(&self) -> Arc<dyn CuePlayer>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    avatars: Arc<AvatarSet>,
    cues: Arc<dyn CuePlayer>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            avatars: app.avatars(),
            cues: app.cues(),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn avatars(&self) -> Arc<AvatarSet> {
        Arc::clone(&self.avatars)
    }

    #[must_use]
    pub fn cues(&self) -> Arc<dyn CuePlayer> {
        Arc::clone(&self.cues)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
