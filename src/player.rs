//! Player progression store: wallet, level, experience and equipped gear.
//!
//! The shop never mutates [`PlayerProgress`] directly.  It writes
//! [`BuyDetectorRequest`] / [`BuyShovelRequest`] messages, and
//! [`handle_purchase_requests_system`] applies or rejects them here.  The shop
//! overlay observes the result on its next rebuild.

use bevy::prelude::*;

use crate::catalog::{
    detector_by_id, shovel_by_id, DetectorTier, ShopItem, ShovelTier, DETECTOR_TIERS,
    SHOVEL_TIERS, STARTER_ID,
};
use crate::config::{load_game_config, GameConfig};
use crate::constants::{STARTING_COINS, STARTING_LEVEL};
use crate::error::{ShopError, ShopResult};
use crate::shop::{can_afford, can_unlock, is_owned, PlayerSnapshot};

// ── Messages ──────────────────────────────────────────────────────────────────

/// Sent by the shop when the player presses PURCHASE on a detector card.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyDetectorRequest {
    pub detector_id: u32,
}

/// Sent by the shop when the player presses PURCHASE on a shovel card.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyShovelRequest {
    pub shovel_id: u32,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Everything the shop and the dig loop need to know about the player.
///
/// - `coins`: spendable balance.
/// - `level` / `xp`: `xp` is progress toward the next level and is reduced by
///   the threshold on each level-up.
/// - `equipped_detector` / `equipped_shovel`: catalog ids; every lower id in
///   the same catalog counts as owned.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PlayerProgress {
    pub coins: u64,
    pub level: u32,
    pub xp: u32,
    pub equipped_detector: u32,
    pub equipped_shovel: u32,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            coins: STARTING_COINS,
            level: STARTING_LEVEL,
            xp: 0,
            equipped_detector: STARTER_ID,
            equipped_shovel: STARTER_ID,
        }
    }
}

impl PlayerProgress {
    /// Fresh progress using the configured starting balance and level.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            coins: config.starting_coins,
            level: config.starting_level.max(1),
            ..Default::default()
        }
    }

    #[inline]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            coins: self.coins,
            level: self.level,
        }
    }

    /// The equipped detector; an id missing from the catalog falls back to the starter.
    pub fn detector(&self) -> &'static DetectorTier {
        detector_by_id(self.equipped_detector).unwrap_or(&DETECTOR_TIERS[0])
    }

    /// The equipped shovel; an id missing from the catalog falls back to the starter.
    pub fn shovel(&self) -> &'static ShovelTier {
        shovel_by_id(self.equipped_shovel).unwrap_or(&SHOVEL_TIERS[0])
    }

    /// Check a purchase against the same predicates the shop renders with.
    fn check_purchase<T: ShopItem>(&self, item: &T, equipped: u32) -> ShopResult<()> {
        let snapshot = self.snapshot();
        if is_owned(item, equipped) {
            return Err(ShopError::AlreadyOwned {
                category: T::CATEGORY,
                id: item.id(),
                equipped,
            });
        }
        if !can_unlock(item, &snapshot) {
            return Err(ShopError::LevelTooLow {
                required: item.required_level(),
                actual: self.level,
            });
        }
        if !can_afford(item, &snapshot) {
            return Err(ShopError::InsufficientCoins {
                price: item.price(),
                available: self.coins,
            });
        }
        Ok(())
    }

    /// Spend coins and equip detector `id`.  Returns the price paid.
    pub fn buy_detector(&mut self, id: u32) -> ShopResult<u64> {
        let item = detector_by_id(id).ok_or(ShopError::UnknownItem {
            category: DetectorTier::CATEGORY,
            id,
        })?;
        self.check_purchase(item, self.equipped_detector)?;
        self.coins -= item.price;
        self.equipped_detector = item.id;
        Ok(item.price)
    }

    /// Spend coins and equip shovel `id`.  Returns the price paid.
    pub fn buy_shovel(&mut self, id: u32) -> ShopResult<u64> {
        let item = shovel_by_id(id).ok_or(ShopError::UnknownItem {
            category: ShovelTier::CATEGORY,
            id,
        })?;
        self.check_purchase(item, self.equipped_shovel)?;
        self.coins -= item.price;
        self.equipped_shovel = item.id;
        Ok(item.price)
    }

    /// Experience needed to go from the current level to the next one.
    #[inline]
    pub fn xp_to_next_level(&self, xp_per_level: u32) -> u32 {
        self.level.saturating_mul(xp_per_level)
    }

    /// Add experience and apply every level-up it pays for.
    /// Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: u32, xp_per_level: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        if xp_per_level == 0 {
            return 0;
        }
        let mut gained = 0;
        while self.xp >= self.xp_to_next_level(xp_per_level) {
            self.xp -= self.xp_to_next_level(xp_per_level);
            self.level += 1;
            gained += 1;
        }
        gained
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the progress resource, the purchase messages and their handler.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerProgress>()
            .add_message::<BuyDetectorRequest>()
            .add_message::<BuyShovelRequest>()
            .add_systems(Startup, init_player_progress.after(load_game_config))
            .add_systems(Update, handle_purchase_requests_system);
    }
}

/// Startup system: reset progress to the configured starting values.
pub fn init_player_progress(mut progress: ResMut<PlayerProgress>, config: Res<GameConfig>) {
    *progress = PlayerProgress::new(&config);
}

/// Apply queued purchase requests in arrival order, detectors first.
pub fn handle_purchase_requests_system(
    mut detector_requests: MessageReader<BuyDetectorRequest>,
    mut shovel_requests: MessageReader<BuyShovelRequest>,
    mut progress: ResMut<PlayerProgress>,
) {
    for request in detector_requests.read() {
        match progress.buy_detector(request.detector_id) {
            Ok(price) => info!(
                "Bought {} for {} coins ({} left)",
                progress.detector().name,
                price,
                progress.coins
            ),
            Err(err) => warn!("Detector purchase rejected: {err}"),
        }
    }

    for request in shovel_requests.read() {
        match progress.buy_shovel(request.shovel_id) {
            Ok(price) => info!(
                "Bought {} for {} coins ({} left)",
                progress.shovel().name,
                price,
                progress.coins
            ),
            Err(err) => warn!("Shovel purchase rejected: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCategory;
    use bevy::ecs::message::Messages;

    fn progress(coins: u64, level: u32) -> PlayerProgress {
        PlayerProgress {
            coins,
            level,
            ..Default::default()
        }
    }

    #[test]
    fn buying_deducts_price_and_equips() {
        let mut p = progress(1_000, 2);
        assert_eq!(p.buy_detector(2), Ok(500));
        assert_eq!(p.coins, 500);
        assert_eq!(p.equipped_detector, 2);
        assert_eq!(p.detector().name, "Hobby Detector");
    }

    #[test]
    fn skipping_tiers_is_allowed() {
        let mut p = progress(10_000, 7);
        assert_eq!(p.buy_shovel(4), Ok(6_000));
        assert_eq!(p.equipped_shovel, 4);
        // Tiers 2 and 3 are now owned as well.
        assert!(matches!(
            p.buy_shovel(3),
            Err(ShopError::AlreadyOwned {
                category: ItemCategory::Shovel,
                id: 3,
                equipped: 4
            })
        ));
    }

    #[test]
    fn rejections_leave_progress_untouched() {
        let mut p = progress(400, 1);
        assert_eq!(
            p.buy_detector(2),
            Err(ShopError::LevelTooLow {
                required: 2,
                actual: 1
            })
        );
        p.level = 2;
        let before_level = p.clone();
        assert_eq!(
            p.buy_detector(2),
            Err(ShopError::InsufficientCoins {
                price: 500,
                available: 400
            })
        );
        assert_eq!(p, before_level);
        assert!(matches!(
            p.buy_detector(42),
            Err(ShopError::UnknownItem { id: 42, .. })
        ));
        assert!(matches!(
            p.buy_detector(1),
            Err(ShopError::AlreadyOwned { .. })
        ));
    }

    #[test]
    fn xp_carries_over_multiple_levels() {
        let mut p = progress(0, 1);
        // Level 1 → 2 costs 100, level 2 → 3 costs 200.
        assert_eq!(p.gain_xp(350, 100), 2);
        assert_eq!(p.level, 3);
        assert_eq!(p.xp, 50);
        assert_eq!(p.gain_xp(10, 100), 0);
        assert_eq!(p.xp, 60);
    }

    #[test]
    fn zero_xp_per_level_never_levels() {
        let mut p = progress(0, 1);
        assert_eq!(p.gain_xp(1_000, 0), 0);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn new_uses_configured_start() {
        let config = GameConfig {
            starting_coins: 9_999,
            starting_level: 0,
            ..Default::default()
        };
        let p = PlayerProgress::new(&config);
        assert_eq!(p.coins, 9_999);
        assert_eq!(p.level, 1);
        assert_eq!(p.equipped_detector, STARTER_ID);
        assert_eq!(p.equipped_shovel, STARTER_ID);
    }

    #[test]
    fn handler_applies_queued_requests() {
        let mut world = World::new();
        world.insert_resource(progress(2_000, 4));
        world.init_resource::<Messages<BuyDetectorRequest>>();
        world.init_resource::<Messages<BuyShovelRequest>>();
        world
            .resource_mut::<Messages<BuyDetectorRequest>>()
            .write(BuyDetectorRequest { detector_id: 3 });
        world
            .resource_mut::<Messages<BuyShovelRequest>>()
            .write(BuyShovelRequest { shovel_id: 2 });

        let mut schedule = Schedule::default();
        schedule.add_systems(handle_purchase_requests_system);
        schedule.run(&mut world);

        let p = world.resource::<PlayerProgress>();
        // Detector (2,000) is handled first; the shovel (300) is then unaffordable.
        assert_eq!(p.equipped_detector, 3);
        assert_eq!(p.equipped_shovel, STARTER_ID);
        assert_eq!(p.coins, 0);
    }
}
