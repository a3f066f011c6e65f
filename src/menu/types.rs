use bevy::prelude::*;

use crate::catalog::ItemCategory;

/// Top-level application state machine.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Digging; HUD visible.
    #[default]
    Playing,
    /// Upgrade shop open; digging disabled.
    Shop,
}

/// Which catalog the shop is showing.
///
/// Reset to [`ShopTab::Detectors`] every time the shop opens.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopTab {
    #[default]
    Detectors,
    Shovels,
}

impl ShopTab {
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            ShopTab::Detectors => "🔍 METAL DETECTORS",
            ShopTab::Shovels => "⛏ SHOVELS",
        }
    }

    #[inline]
    pub fn category(self) -> ItemCategory {
        match self {
            ShopTab::Detectors => ItemCategory::Detector,
            ShopTab::Shovels => ItemCategory::Shovel,
        }
    }
}

/// Root node of the shop overlay; despawned on `OnExit(Shop)` and on rebuild.
#[derive(Component)]
pub struct ShopRoot;

/// Tags the "CLOSE" button inside the shop.
#[derive(Component)]
pub struct ShopCloseButton;

/// Tags one of the two tab buttons.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShopTabButton(pub ShopTab);

/// Tags the container that holds one catalog card per tier.
#[derive(Component)]
pub struct ShopCardList;

/// Tags a catalog card; carries the tier it shows.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShopCard {
    pub category: ItemCategory,
    pub id: u32,
}

/// Tags a card's purchase button.  Only spawned for tiers that are not owned.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShopBuyButton {
    pub category: ItemCategory,
    pub id: u32,
    /// `false` for locked or unaffordable tiers; presses are ignored.
    pub enabled: bool,
}
