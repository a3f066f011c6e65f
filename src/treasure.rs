//! Digging: turns a key press into coins and experience.
//!
//! ## Flow
//!
//! 1. `Space` while [`GameState::Playing`] triggers [`dig_system`] (rate limited
//!    by [`DigCooldown`]).
//! 2. [`roll_treasure`] decides whether anything is found, using the equipped
//!    detector's bonus, and draws a rarity among the ones it can detect.
//! 3. The treasure's value is scaled by the equipped shovel's multiplier and
//!    added to [`PlayerProgress::coins`]; experience may level the player up.

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::{DetectorTier, Rarity, ShovelTier};
use crate::config::GameConfig;
use crate::menu::GameState;
use crate::player::PlayerProgress;

/// A single dug-up treasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treasure {
    pub rarity: Rarity,
    /// Coin value after the shovel multiplier.
    pub value: u64,
}

/// Enforces a minimum interval between digs.
#[derive(Resource, Default)]
pub struct DigCooldown {
    /// Remaining cooldown in seconds; decremented each frame, clamped to 0.
    pub timer: f32,
}

/// Outcome of the most recent dig, shown on the HUD.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LastDig {
    /// Digs so far this session; `0` means the HUD shows the controls hint.
    pub digs: u32,
    pub found: Option<Treasure>,
}

/// Probability that a dig finds anything with `detector` equipped.
pub fn find_chance(detector: &DetectorTier, config: &GameConfig) -> f64 {
    let bonus = 1.0 + detector.detection_bonus as f64 / 100.0;
    (config.base_find_chance * bonus).clamp(0.0, 1.0)
}

/// Coin value of a `rarity` treasure dug with `shovel`.
pub fn treasure_value(rarity: Rarity, shovel: &ShovelTier, config: &GameConfig) -> u64 {
    (config.treasure_value(rarity) as f64 * shovel.value_multiplier as f64).round() as u64
}

/// Draw a rarity by weight among those `detector` can detect.
///
/// Returns `None` when every detectable rarity has zero weight.
pub fn pick_rarity<R: Rng>(
    rng: &mut R,
    detector: &DetectorTier,
    config: &GameConfig,
) -> Option<Rarity> {
    let total: u32 = detector
        .detectable_rarities
        .iter()
        .map(|r| config.rarity_weight(*r))
        .sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.gen_range(0..total);
    for rarity in detector.detectable_rarities {
        let weight = config.rarity_weight(*rarity);
        if roll < weight {
            return Some(*rarity);
        }
        roll -= weight;
    }
    None
}

/// Roll one dig.  `None` means nothing was found.
pub fn roll_treasure<R: Rng>(
    rng: &mut R,
    detector: &DetectorTier,
    shovel: &ShovelTier,
    config: &GameConfig,
) -> Option<Treasure> {
    if !rng.gen_bool(find_chance(detector, config)) {
        return None;
    }
    let rarity = pick_rarity(rng, detector, config)?;
    Some(Treasure {
        rarity,
        value: treasure_value(rarity, shovel, config),
    })
}

/// Registers the dig input and its resources.
pub struct TreasurePlugin;

impl Plugin for TreasurePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DigCooldown>()
            .init_resource::<LastDig>()
            .add_systems(Update, dig_system.run_if(in_state(GameState::Playing)));
    }
}

/// `Space` → dig once and bank whatever is found.
pub fn dig_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut cooldown: ResMut<DigCooldown>,
    mut progress: ResMut<PlayerProgress>,
    mut last_dig: ResMut<LastDig>,
) {
    cooldown.timer = (cooldown.timer - time.delta_secs()).max(0.0);
    if !keys.just_pressed(KeyCode::Space) || cooldown.timer > 0.0 {
        return;
    }
    cooldown.timer = config.dig_cooldown_secs;

    let mut rng = rand::thread_rng();
    let found = roll_treasure(&mut rng, progress.detector(), progress.shovel(), &config);
    last_dig.digs += 1;
    last_dig.found = found;

    if let Some(treasure) = found {
        progress.coins = progress.coins.saturating_add(treasure.value);
        let gained = progress.gain_xp(config.xp_per_find, config.xp_per_level);
        if gained > 0 {
            info!("Level up! Now level {}", progress.level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DETECTOR_TIERS, SHOVEL_TIERS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn detection_bonus_scales_find_chance() {
        let config = GameConfig::default();
        let base = find_chance(&DETECTOR_TIERS[0], &config);
        let boosted = find_chance(&DETECTOR_TIERS[2], &config);
        assert!((base - config.base_find_chance).abs() < 1e-9);
        assert!((boosted - config.base_find_chance * 1.25).abs() < 1e-9);
    }

    #[test]
    fn find_chance_is_clamped() {
        let config = GameConfig {
            base_find_chance: 0.9,
            ..Default::default()
        };
        assert_eq!(find_chance(&DETECTOR_TIERS[4], &config), 1.0);
    }

    #[test]
    fn shovel_multiplier_scales_value() {
        let config = GameConfig::default();
        assert_eq!(
            treasure_value(Rarity::Common, &SHOVEL_TIERS[0], &config),
            config.treasure_value_common
        );
        assert_eq!(
            treasure_value(Rarity::Rare, &SHOVEL_TIERS[4], &config),
            config.treasure_value_rare * 3
        );
    }

    #[test]
    fn rolls_only_yield_detectable_rarities() {
        let config = GameConfig {
            base_find_chance: 1.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        for detector in &DETECTOR_TIERS {
            for _ in 0..200 {
                let treasure = roll_treasure(&mut rng, detector, &SHOVEL_TIERS[0], &config)
                    .expect("find chance is 1.0");
                assert!(detector.can_detect(treasure.rarity));
            }
        }
    }

    #[test]
    fn zero_find_chance_never_finds() {
        let config = GameConfig {
            base_find_chance: 0.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(roll_treasure(&mut rng, &DETECTOR_TIERS[4], &SHOVEL_TIERS[4], &config).is_none());
        }
    }

    #[test]
    fn zero_weights_pick_nothing() {
        let config = GameConfig {
            rarity_weights: [0; 5],
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_rarity(&mut rng, &DETECTOR_TIERS[4], &config), None);
    }
}
