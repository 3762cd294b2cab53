//! Maps a cumulative score onto a discrete tier (the "level" shown next to the avatar).

/// Correct answers needed to climb one tier.
pub const DEFAULT_TIER_SIZE: u32 = 5;

/// Number of tiers available by default (one per avatar asset).
pub const DEFAULT_MAX_TIER: u32 = 3;

/// Returns the 0-based tier for `score`: `min(score / tier_size, max_tier - 1)`.
///
/// A `tier_size` or `max_tier` of zero is treated as one, so the result is always
/// a valid index into `max_tier` assets.
#[must_use]
pub fn tier(score: u32, tier_size: u32, max_tier: u32) -> u32 {
    let tier_size = tier_size.max(1);
    let last = max_tier.max(1) - 1;
    (score / tier_size).min(last)
}

/// Tier parameters for a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    tier_size: u32,
    max_tier: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            tier_size: DEFAULT_TIER_SIZE,
            max_tier: DEFAULT_MAX_TIER,
        }
    }
}

impl Progression {
    #[must_use]
    pub fn new(tier_size: u32, max_tier: u32) -> Self {
        Self {
            tier_size: tier_size.max(1),
            max_tier: max_tier.max(1),
        }
    }

    #[must_use]
    pub fn tier_size(&self) -> u32 {
        self.tier_size
    }

    #[must_use]
    pub fn max_tier(&self) -> u32 {
        self.max_tier
    }

    #[must_use]
    pub fn tier(&self, score: u32) -> u32 {
        tier(score, self.tier_size, self.max_tier)
    }

    /// Tier for a fresh run.
    #[must_use]
    pub fn baseline(&self) -> u32 {
        self.tier(0)
    }

    /// Human-facing label for a tier; levels are 1-based.
    #[must_use]
    pub fn level_label(tier: u32) -> String {
        format!("Level {}", tier.saturating_add(1))
    }
}
