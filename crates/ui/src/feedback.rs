//! Avatar and sound-cue plumbing for the presenter.
//!
//! Nothing here can fail the quiz: missing avatar files fall back to a glyph and
//! cue errors are logged and dropped.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shown in place of an avatar image that could not be found.
pub const PLACEHOLDER_GLYPH: &str = "🌳";

//
// ─── CUES ──────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Looping music for the whole quiz page; played once when a quiz loads.
    Background,
    Correct,
    Incorrect,
    Reveal,
}

impl Cue {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Reveal => "reveal",
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CueError {
    #[error("no sound registered for cue `{0}`")]
    Missing(&'static str),
    #[error("cue playback failed: {0}")]
    Playback(String),
}

/// Plays feedback for quiz events.
pub trait CuePlayer: Send + Sync {
    /// Play `cue`; `tier` is the current 0-based level.
    ///
    /// # Errors
    ///
    /// Returns `CueError` when the cue cannot be played.
    fn play(&self, cue: Cue, tier: u32) -> Result<(), CueError>;
}

/// Default player: records cues in the trace log and plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCuePlayer;

impl CuePlayer for TracingCuePlayer {
    fn play(&self, cue: Cue, tier: u32) -> Result<(), CueError> {
        tracing::debug!(cue = cue.name(), tier, "cue");
        Ok(())
    }
}

/// Play a cue, swallowing and logging any failure.
pub fn play_cue(player: &dyn CuePlayer, cue: Cue, tier: u32) {
    if let Err(err) = player.play(cue, tier) {
        tracing::warn!(cue = cue.name(), tier, error = %err, "cue playback failed");
    }
}

//
// ─── AVATARS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Image { src: String },
    Placeholder(&'static str),
}

/// One avatar per tier, checked for existence once at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvatarSet {
    slots: Vec<Option<PathBuf>>,
}

impl AvatarSet {
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let slots = paths
            .into_iter()
            .map(|path| {
                if path.is_file() {
                    Some(path)
                } else {
                    tracing::warn!(path = %path.display(), "avatar image not found; using placeholder");
                    None
                }
            })
            .collect();
        Self { slots }
    }

    /// `avatar1.png` .. `avatar{count}.png` inside `dir`.
    #[must_use]
    pub fn from_dir(dir: &Path, count: u32) -> Self {
        Self::new(
            (1..=count)
                .map(|n| dir.join(format!("avatar{n}.png")))
                .collect(),
        )
    }

    /// Number of tiers this set covers (at least one).
    #[must_use]
    pub fn max_tier(&self) -> u32 {
        u32::try_from(self.slots.len()).unwrap_or(u32::MAX).max(1)
    }

    #[must_use]
    pub fn resolve(&self, tier: u32) -> Avatar {
        let slot = usize::try_from(tier)
            .ok()
            .and_then(|idx| self.slots.get(idx))
            .and_then(Option::as_ref);
        match slot {
            Some(path) => Avatar::Image {
                src: path.display().to_string(),
            },
            None => Avatar::Placeholder(PLACEHOLDER_GLYPH),
        }
    }
}
