//! Centralised gameplay constants.
//!
//! Every value here is the compiled default for the matching field of
//! [`crate::config::GameConfig`]; `assets/game.toml` can override any of them
//! without recompiling.

// ── Player: Starting State ────────────────────────────────────────────────────

/// Coins in the wallet when a new game starts.
pub const STARTING_COINS: u64 = 100;

/// Player level when a new game starts.  Starter equipment requires level 1.
pub const STARTING_LEVEL: u32 = 1;

// ── Progression ───────────────────────────────────────────────────────────────

/// Experience needed per level: reaching level `L + 1` from `L` costs
/// `L × XP_PER_LEVEL` experience.
pub const XP_PER_LEVEL: u32 = 100;

/// Experience granted by each successful dig.
pub const XP_PER_FIND: u32 = 15;

// ── Digging ───────────────────────────────────────────────────────────────────

/// Chance (0–1) that a dig turns something up with a 0 % detection bonus.
///
/// The equipped detector scales this by `1 + bonus / 100`; the result is
/// clamped to 1.0.
pub const BASE_FIND_CHANCE: f64 = 0.45;

/// Minimum seconds between two digs.
pub const DIG_COOLDOWN_SECS: f32 = 0.35;

// ── Treasure Values (before the shovel multiplier) ────────────────────────────

pub const TREASURE_VALUE_COMMON: u64 = 10;
pub const TREASURE_VALUE_UNCOMMON: u64 = 35;
pub const TREASURE_VALUE_RARE: u64 = 120;
pub const TREASURE_VALUE_LEGENDARY: u64 = 500;
pub const TREASURE_VALUE_MYTHIC: u64 = 2_000;

// ── Treasure Weights ──────────────────────────────────────────────────────────

/// Relative draw weights per rarity, indexed by [`crate::catalog::Rarity`]
/// order.  Only rarities the equipped detector can detect take part in a draw.
pub const RARITY_WEIGHTS: [u32; 5] = [60, 25, 10, 4, 1];

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Font size of the in-game HUD line.
pub const HUD_FONT_SIZE: f32 = 18.0;
