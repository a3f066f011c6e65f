//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! Prices and required levels are not configurable: the shop catalogs are
//! static data in [`crate::catalog`].

use crate::catalog::Rarity;
use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Player: Starting State ───────────────────────────────────────────────
    pub starting_coins: u64,
    pub starting_level: u32,

    // ── Progression ──────────────────────────────────────────────────────────
    pub xp_per_level: u32,
    pub xp_per_find: u32,

    // ── Digging ──────────────────────────────────────────────────────────────
    pub base_find_chance: f64,
    pub dig_cooldown_secs: f32,

    // ── Treasure ─────────────────────────────────────────────────────────────
    pub treasure_value_common: u64,
    pub treasure_value_uncommon: u64,
    pub treasure_value_rare: u64,
    pub treasure_value_legendary: u64,
    pub treasure_value_mythic: u64,
    pub rarity_weights: [u32; 5],

    // ── Rendering ────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_coins: STARTING_COINS,
            starting_level: STARTING_LEVEL,
            xp_per_level: XP_PER_LEVEL,
            xp_per_find: XP_PER_FIND,
            base_find_chance: BASE_FIND_CHANCE,
            dig_cooldown_secs: DIG_COOLDOWN_SECS,
            treasure_value_common: TREASURE_VALUE_COMMON,
            treasure_value_uncommon: TREASURE_VALUE_UNCOMMON,
            treasure_value_rare: TREASURE_VALUE_RARE,
            treasure_value_legendary: TREASURE_VALUE_LEGENDARY,
            treasure_value_mythic: TREASURE_VALUE_MYTHIC,
            rarity_weights: RARITY_WEIGHTS,
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Coin value of a treasure of `rarity` before the shovel multiplier.
    pub fn treasure_value(&self, rarity: Rarity) -> u64 {
        match rarity {
            Rarity::Common => self.treasure_value_common,
            Rarity::Uncommon => self.treasure_value_uncommon,
            Rarity::Rare => self.treasure_value_rare,
            Rarity::Legendary => self.treasure_value_legendary,
            Rarity::Mythic => self.treasure_value_mythic,
        }
    }

    #[inline]
    pub fn rarity_weight(&self, rarity: Rarity) -> u32 {
        self.rarity_weights[rarity.index()]
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// A missing file keeps the compiled defaults; a malformed file is logged and
/// also keeps the defaults.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded game config from {CONFIG_PATH}");
            }
            Err(e) => {
                error!("Failed to parse {CONFIG_PATH}: {e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_constants() {
        let config = GameConfig::default();
        assert_eq!(config.starting_coins, STARTING_COINS);
        assert_eq!(config.starting_level, STARTING_LEVEL);
        assert_eq!(config.rarity_weights, RARITY_WEIGHTS);
        assert_eq!(config.treasure_value(Rarity::Mythic), TREASURE_VALUE_MYTHIC);
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let loaded: GameConfig = toml::from_str("starting_coins = 5000\nxp_per_level = 40\n")
            .expect("partial config should parse");
        assert_eq!(loaded.starting_coins, 5000);
        assert_eq!(loaded.xp_per_level, 40);
        assert_eq!(loaded.starting_level, STARTING_LEVEL);
        assert_eq!(loaded.base_find_chance, BASE_FIND_CHANCE);
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        assert!(toml::from_str::<GameConfig>("starting_level = \"high\"").is_err());
    }
}
