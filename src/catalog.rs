//! Static equipment catalogs: metal detectors and shovels.
//!
//! Both catalogs are ordered by id.  Ownership is derived from the equipped
//! id (owning tier N implies owning every tier ≤ N), so ids must start at 1
//! and increase by exactly one; [`validate_catalogs`] checks this at startup.
//!
//! | Id | Detector        | Price  | Lvl | Shovel          | Price  | Lvl |
//! |----|-----------------|--------|-----|-----------------|--------|-----|
//! | 1  | Basic Detector  | free   | 1   | Garden Trowel   | free   | 1   |
//! | 2  | Hobby Detector  | 500    | 2   | Steel Spade     | 300    | 2   |
//! | 3  | Pro Seeker      | 2,000  | 4   | Power Shovel    | 1,500  | 4   |
//! | 4  | Deep Scanner    | 7,500  | 7   | Excavator Blade | 6,000  | 7   |
//! | 5  | Quantum Finder  | 25,000 | 10  | Diamond Digger  | 20,000 | 10  |

use bevy::prelude::*;

use crate::error::{ShopError, ShopResult};

// ── Rarity ────────────────────────────────────────────────────────────────────

/// Treasure rarity tier, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Mythic,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Position in [`Rarity::ALL`]; used to index per-rarity config arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    /// Outline / text colour of the rarity chip.
    pub fn color(self) -> Color {
        match self {
            Rarity::Common => Color::srgb(0.58, 0.64, 0.72),
            Rarity::Uncommon => Color::srgb(0.13, 0.77, 0.37),
            Rarity::Rare => Color::srgb(0.23, 0.51, 0.96),
            Rarity::Legendary => Color::srgb(0.66, 0.33, 0.97),
            Rarity::Mythic => Color::srgb(0.98, 0.45, 0.09),
        }
    }
}

// ── Categories ────────────────────────────────────────────────────────────────

/// The two equipment categories sold in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Detector,
    Shovel,
}

impl ItemCategory {
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            ItemCategory::Detector => "detector",
            ItemCategory::Shovel => "shovel",
        }
    }
}

/// Two-stop colour gradient token for a tier badge (`from` → `to`, sRGB).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub from: [f32; 3],
    pub to: [f32; 3],
}

impl Gradient {
    #[inline]
    pub fn start(&self) -> Color {
        Color::srgb(self.from[0], self.from[1], self.from[2])
    }

    #[inline]
    pub fn end(&self) -> Color {
        Color::srgb(self.to[0], self.to[1], self.to[2])
    }
}

const SLATE: Gradient = Gradient {
    from: [0.39, 0.45, 0.55],
    to: [0.28, 0.33, 0.41],
};
const BRONZE: Gradient = Gradient {
    from: [0.80, 0.50, 0.20],
    to: [0.60, 0.35, 0.12],
};
const SILVER: Gradient = Gradient {
    from: [0.62, 0.66, 0.72],
    to: [0.42, 0.46, 0.52],
};
const GOLD: Gradient = Gradient {
    from: [0.92, 0.70, 0.03],
    to: [0.85, 0.47, 0.02],
};
const COSMIC: Gradient = Gradient {
    from: [0.66, 0.33, 0.97],
    to: [0.93, 0.28, 0.60],
};

// ── Item records ──────────────────────────────────────────────────────────────

/// Fields shared by every catalog entry, regardless of category.
pub trait ShopItem {
    const CATEGORY: ItemCategory;

    fn id(&self) -> u32;
    fn name(&self) -> &'static str;
    fn icon(&self) -> &'static str;
    fn tier(&self) -> &'static str;
    fn color(&self) -> Gradient;
    /// Price in coins; `0` marks the free starter tier.
    fn price(&self) -> u64;
    fn required_level(&self) -> u32;
}

/// A metal detector tier.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorTier {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub tier: &'static str,
    pub color: Gradient,
    pub price: u64,
    pub required_level: u32,
    /// Percentage added to the base find chance.
    pub detection_bonus: u32,
    pub detectable_rarities: &'static [Rarity],
}

impl DetectorTier {
    #[inline]
    pub fn can_detect(&self, rarity: Rarity) -> bool {
        self.detectable_rarities.contains(&rarity)
    }
}

/// A shovel tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ShovelTier {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub tier: &'static str,
    pub color: Gradient,
    pub price: u64,
    pub required_level: u32,
    /// Extra dig radius in pixels.
    pub click_radius_bonus: u32,
    /// Multiplier applied to every treasure's coin value.
    pub value_multiplier: f32,
}

impl ShovelTier {
    /// Extra coins earned per treasure, as a whole percentage.
    ///
    /// A ×1.25 shovel earns 25 % more; the starter ×1.0 shovel earns 0 %.
    #[inline]
    pub fn value_bonus_percent(&self) -> i64 {
        ((self.value_multiplier as f64 - 1.0) * 100.0).round() as i64
    }
}

macro_rules! impl_shop_item {
    ($ty:ty, $category:expr) => {
        impl ShopItem for $ty {
            const CATEGORY: ItemCategory = $category;

            fn id(&self) -> u32 {
                self.id
            }
            fn name(&self) -> &'static str {
                self.name
            }
            fn icon(&self) -> &'static str {
                self.icon
            }
            fn tier(&self) -> &'static str {
                self.tier
            }
            fn color(&self) -> Gradient {
                self.color
            }
            fn price(&self) -> u64 {
                self.price
            }
            fn required_level(&self) -> u32 {
                self.required_level
            }
        }
    };
}

impl_shop_item!(DetectorTier, ItemCategory::Detector);
impl_shop_item!(ShovelTier, ItemCategory::Shovel);

// ── Catalogs ──────────────────────────────────────────────────────────────────

pub static DETECTOR_TIERS: [DetectorTier; 5] = [
    DetectorTier {
        id: 1,
        name: "Basic Detector",
        icon: "🔍",
        tier: "starter",
        color: SLATE,
        price: 0,
        required_level: 1,
        detection_bonus: 0,
        detectable_rarities: &[Rarity::Common],
    },
    DetectorTier {
        id: 2,
        name: "Hobby Detector",
        icon: "📡",
        tier: "bronze",
        color: BRONZE,
        price: 500,
        required_level: 2,
        detection_bonus: 10,
        detectable_rarities: &[Rarity::Common, Rarity::Uncommon],
    },
    DetectorTier {
        id: 3,
        name: "Pro Seeker",
        icon: "🛰",
        tier: "silver",
        color: SILVER,
        price: 2_000,
        required_level: 4,
        detection_bonus: 25,
        detectable_rarities: &[Rarity::Common, Rarity::Uncommon, Rarity::Rare],
    },
    DetectorTier {
        id: 4,
        name: "Deep Scanner",
        icon: "📟",
        tier: "gold",
        color: GOLD,
        price: 7_500,
        required_level: 7,
        detection_bonus: 45,
        detectable_rarities: &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Legendary,
        ],
    },
    DetectorTier {
        id: 5,
        name: "Quantum Finder",
        icon: "🔮",
        tier: "mythic",
        color: COSMIC,
        price: 25_000,
        required_level: 10,
        detection_bonus: 75,
        detectable_rarities: &Rarity::ALL,
    },
];

pub static SHOVEL_TIERS: [ShovelTier; 5] = [
    ShovelTier {
        id: 1,
        name: "Garden Trowel",
        icon: "🥄",
        tier: "starter",
        color: SLATE,
        price: 0,
        required_level: 1,
        click_radius_bonus: 0,
        value_multiplier: 1.0,
    },
    ShovelTier {
        id: 2,
        name: "Steel Spade",
        icon: "⛏",
        tier: "bronze",
        color: BRONZE,
        price: 300,
        required_level: 2,
        click_radius_bonus: 5,
        value_multiplier: 1.25,
    },
    ShovelTier {
        id: 3,
        name: "Power Shovel",
        icon: "🛠",
        tier: "silver",
        color: SILVER,
        price: 1_500,
        required_level: 4,
        click_radius_bonus: 10,
        value_multiplier: 1.5,
    },
    ShovelTier {
        id: 4,
        name: "Excavator Blade",
        icon: "🚜",
        tier: "gold",
        color: GOLD,
        price: 6_000,
        required_level: 7,
        click_radius_bonus: 18,
        value_multiplier: 2.0,
    },
    ShovelTier {
        id: 5,
        name: "Diamond Digger",
        icon: "💎",
        tier: "mythic",
        color: COSMIC,
        price: 20_000,
        required_level: 10,
        click_radius_bonus: 25,
        value_multiplier: 3.0,
    },
];

/// Look up a detector tier by id.
pub fn detector_by_id(id: u32) -> Option<&'static DetectorTier> {
    DETECTOR_TIERS.iter().find(|d| d.id == id)
}

/// Look up a shovel tier by id.
pub fn shovel_by_id(id: u32) -> Option<&'static ShovelTier> {
    SHOVEL_TIERS.iter().find(|s| s.id == id)
}

/// Id of the free starter tier in every catalog.
pub const STARTER_ID: u32 = 1;

// ── Validation ────────────────────────────────────────────────────────────────

/// Check that `items` satisfies the ownership cutoff's assumptions.
///
/// - at least one entry;
/// - ids are exactly `1, 2, 3, …` in catalog order;
/// - the first entry is free and requires level 1.
pub fn validate_catalog<T: ShopItem>(items: &[T]) -> ShopResult<()> {
    let invalid = |reason: String| ShopError::InvalidCatalog {
        category: T::CATEGORY,
        reason,
    };

    let first = items
        .first()
        .ok_or_else(|| invalid("catalog is empty".to_string()))?;
    if first.price() != 0 || first.required_level() > 1 {
        return Err(invalid(format!(
            "starter '{}' must be free and require level 1",
            first.name()
        )));
    }

    for (index, item) in items.iter().enumerate() {
        let expected = STARTER_ID + index as u32;
        if item.id() != expected {
            return Err(invalid(format!(
                "'{}' has id {} at position {}, expected {}",
                item.name(),
                item.id(),
                index,
                expected
            )));
        }
    }
    Ok(())
}

/// Validate both shipped catalogs.
pub fn validate_catalogs() -> ShopResult<()> {
    validate_catalog(&DETECTOR_TIERS)?;
    validate_catalog(&SHOVEL_TIERS)
}

/// Startup system: report catalog problems without aborting the game.
pub fn check_catalogs_system() {
    match validate_catalogs() {
        Ok(()) => info!(
            "Shop catalogs OK: {} detectors, {} shovels",
            DETECTOR_TIERS.len(),
            SHOVEL_TIERS.len()
        ),
        Err(err) => error!("{err}; ownership display may be wrong"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalogs_are_valid() {
        assert_eq!(validate_catalogs(), Ok(()));
    }

    #[test]
    fn gap_in_ids_is_rejected() {
        let mut tiers = SHOVEL_TIERS.to_vec();
        tiers[2].id = 7;
        let err = validate_catalog(&tiers).unwrap_err();
        assert!(matches!(
            err,
            ShopError::InvalidCatalog {
                category: ItemCategory::Shovel,
                ..
            }
        ));
    }

    #[test]
    fn paid_starter_is_rejected() {
        let mut tiers = DETECTOR_TIERS.to_vec();
        tiers[0].price = 10;
        assert!(validate_catalog(&tiers).is_err());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let empty: [ShovelTier; 0] = [];
        assert!(validate_catalog(&empty).is_err());
    }

    #[test]
    fn higher_tiers_detect_a_superset() {
        for pair in DETECTOR_TIERS.windows(2) {
            for rarity in pair[0].detectable_rarities {
                assert!(pair[1].can_detect(*rarity), "{} lost {:?}", pair[1].name, rarity);
            }
        }
        assert!(DETECTOR_TIERS[4].can_detect(Rarity::Mythic));
        assert!(!DETECTOR_TIERS[0].can_detect(Rarity::Uncommon));
    }

    #[test]
    fn value_bonus_percent_rounds() {
        assert_eq!(SHOVEL_TIERS[0].value_bonus_percent(), 0);
        assert_eq!(SHOVEL_TIERS[1].value_bonus_percent(), 25);
        assert_eq!(SHOVEL_TIERS[4].value_bonus_percent(), 200);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(detector_by_id(3).map(|d| d.name), Some("Pro Seeker"));
        assert!(shovel_by_id(0).is_none());
        assert!(shovel_by_id(6).is_none());
    }
}
