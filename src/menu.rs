//! Upgrade shop overlay and the `GameState` it lives in.
//!
//! ## States
//!
//! | State     | Description                                   |
//! |-----------|-----------------------------------------------|
//! | `Playing` | Digging; HUD visible                          |
//! | `Shop`    | Upgrade shop overlay visible; digging paused  |
//!
//! ## Systems (registered by `ShopPlugin`)
//!
//! | System                 | Schedule                   | Purpose                                  |
//! |------------------------|----------------------------|------------------------------------------|
//! | `open_shop_system`     | `Update / in Playing`      | `B` opens the shop                       |
//! | `reset_shop_tab`       | `OnEnter(Shop)`            | Every visit starts on the detector tab   |
//! | `setup_shop`           | `OnEnter(Shop)`            | Spawn the overlay                        |
//! | `shop_button_system`   | `Update / in Shop`         | Close, tab switch, purchase requests     |
//! | `shop_hover_system`    | `Update / in Shop`         | Border tint on hovered purchase buttons  |
//! | `refresh_shop_system`  | `Update / in Shop`         | Rebuild when the tab or progress changes |
//! | `cleanup_shop`         | `OnExit(Shop)`             | Despawn the overlay                      |

use bevy::prelude::*;

use crate::catalog::{
    DetectorTier, ItemCategory, ShopItem, ShovelTier, DETECTOR_TIERS, SHOVEL_TIERS,
};
use crate::player::{
    handle_purchase_requests_system, BuyDetectorRequest, BuyShovelRequest, PlayerProgress,
};
use crate::shop::{
    can_unlock, card_state, format_coins, price_tag, purchase_action, CardState, PlayerSnapshot,
    PriceTag, PurchaseAction,
};

mod common;
mod shop;
mod types;

use common::*;
pub use shop::*;
pub use types::*;

/// Registers `GameState`, the shop tab resource and every shop system.
///
/// Purchases are only requested here; [`crate::player::PlayerPlugin`] owns the
/// handler, and the overlay is rebuilt after it runs.
pub struct ShopPlugin;

impl Plugin for ShopPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<ShopTab>()
            .add_systems(OnEnter(GameState::Shop), (reset_shop_tab, setup_shop).chain())
            .add_systems(OnExit(GameState::Shop), cleanup_shop)
            .add_systems(
                Update,
                open_shop_system.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    shop_button_system,
                    shop_hover_system,
                    refresh_shop_system.after(handle_purchase_requests_system),
                )
                    .chain()
                    .run_if(in_state(GameState::Shop)),
            );
    }
}
