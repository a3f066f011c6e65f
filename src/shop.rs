//! Pure shop predicates and card classification.
//!
//! Everything here is a function of a catalog item, a [`PlayerSnapshot`] and
//! the equipped id of the item's category.  Nothing is stored: the overlay in
//! [`crate::menu::shop`] calls these on every rebuild.

use crate::catalog::ShopItem;

/// Read-only view of the player state the shop renders against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub coins: u64,
    pub level: u32,
}

#[inline]
pub fn can_afford<T: ShopItem>(item: &T, player: &PlayerSnapshot) -> bool {
    player.coins >= item.price()
}

#[inline]
pub fn can_unlock<T: ShopItem>(item: &T, player: &PlayerSnapshot) -> bool {
    player.level >= item.required_level()
}

/// Tiers up to and including the equipped one are owned.
#[inline]
pub fn is_owned<T: ShopItem>(item: &T, equipped_id: u32) -> bool {
    item.id() <= equipped_id
}

#[inline]
pub fn can_buy<T: ShopItem>(item: &T, player: &PlayerSnapshot, equipped_id: u32) -> bool {
    can_afford(item, player) && can_unlock(item, player) && !is_owned(item, equipped_id)
}

/// Presentation state of a catalog card; exactly one applies per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Equipped,
    Owned,
    Purchasable,
    /// Not owned and either below the required level or unaffordable.
    Locked,
}

/// Classify `item` in priority order: equipped, owned, purchasable, locked.
pub fn card_state<T: ShopItem>(item: &T, player: &PlayerSnapshot, equipped_id: u32) -> CardState {
    if item.id() == equipped_id {
        CardState::Equipped
    } else if is_owned(item, equipped_id) {
        CardState::Owned
    } else if can_buy(item, player, equipped_id) {
        CardState::Purchasable
    } else {
        CardState::Locked
    }
}

/// What the card's purchase button shows.  `None` from [`purchase_action`]
/// means the button is hidden because the item is owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseAction {
    Purchase,
    Locked,
    NotEnoughCoins,
}

impl PurchaseAction {
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            PurchaseAction::Purchase => "PURCHASE",
            PurchaseAction::Locked => "LOCKED",
            PurchaseAction::NotEnoughCoins => "NOT ENOUGH COINS",
        }
    }

    /// Only the `Purchase` action is clickable.
    #[inline]
    pub fn is_enabled(self) -> bool {
        self == PurchaseAction::Purchase
    }
}

/// The level requirement is reported before the price.
pub fn purchase_action<T: ShopItem>(
    item: &T,
    player: &PlayerSnapshot,
    equipped_id: u32,
) -> Option<PurchaseAction> {
    if is_owned(item, equipped_id) {
        None
    } else if !can_unlock(item, player) {
        Some(PurchaseAction::Locked)
    } else if !can_afford(item, player) {
        Some(PurchaseAction::NotEnoughCoins)
    } else {
        Some(PurchaseAction::Purchase)
    }
}

/// Price line under a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceTag {
    /// Starter tier, always shown.
    Free,
    /// Paid and not yet owned; `affordable` picks the colour.
    Price { text: String, affordable: bool },
}

impl PriceTag {
    pub fn text(&self) -> &str {
        match self {
            PriceTag::Free => "Free (Starter)",
            PriceTag::Price { text, .. } => text,
        }
    }
}

/// Owned paid tiers show no price at all.
pub fn price_tag<T: ShopItem>(
    item: &T,
    player: &PlayerSnapshot,
    equipped_id: u32,
) -> Option<PriceTag> {
    if item.price() == 0 {
        Some(PriceTag::Free)
    } else if !is_owned(item, equipped_id) {
        Some(PriceTag::Price {
            text: format!("${}", format_coins(item.price())),
            affordable: can_afford(item, player),
        })
    } else {
        None
    }
}

/// Format a coin amount with `,` thousands separators: `25000` → `"25,000"`.
pub fn format_coins(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Gradient, ShovelTier, DETECTOR_TIERS, SHOVEL_TIERS};

    fn item(id: u32, price: u64, required_level: u32) -> ShovelTier {
        ShovelTier {
            id,
            name: "Test Shovel",
            icon: "?",
            tier: "test",
            color: Gradient {
                from: [0.0; 3],
                to: [0.0; 3],
            },
            price,
            required_level,
            click_radius_bonus: 0,
            value_multiplier: 1.0,
        }
    }

    const PLAYER: PlayerSnapshot = PlayerSnapshot {
        coins: 500,
        level: 3,
    };

    #[test]
    fn affordable_unlocked_unowned_is_purchasable() {
        let next = item(2, 400, 2);
        assert!(can_buy(&next, &PLAYER, 1));
        assert_eq!(card_state(&next, &PLAYER, 1), CardState::Purchasable);
        assert_eq!(
            purchase_action(&next, &PLAYER, 1),
            Some(PurchaseAction::Purchase)
        );
    }

    #[test]
    fn unaffordable_is_not_purchasable() {
        let pricey = item(2, 600, 2);
        assert!(!can_buy(&pricey, &PLAYER, 1));
        assert_eq!(card_state(&pricey, &PLAYER, 1), CardState::Locked);
        assert_eq!(
            purchase_action(&pricey, &PLAYER, 1),
            Some(PurchaseAction::NotEnoughCoins)
        );
    }

    #[test]
    fn level_gate_wins_over_price() {
        let gated = item(3, 100, 5);
        assert!(can_afford(&gated, &PLAYER));
        assert!(!can_buy(&gated, &PLAYER, 1));
        assert_eq!(
            purchase_action(&gated, &PLAYER, 1),
            Some(PurchaseAction::Locked)
        );

        let broke = PlayerSnapshot { coins: 0, level: 3 };
        let both = item(3, 100, 5);
        assert_eq!(
            purchase_action(&both, &broke, 1),
            Some(PurchaseAction::Locked)
        );
    }

    #[test]
    fn starter_is_owned_and_button_hidden() {
        let starter = item(1, 0, 1);
        assert!(is_owned(&starter, 1));
        assert_eq!(card_state(&starter, &PLAYER, 1), CardState::Equipped);
        assert_eq!(purchase_action(&starter, &PLAYER, 1), None);
        assert_eq!(price_tag(&starter, &PLAYER, 1), Some(PriceTag::Free));
    }

    #[test]
    fn lower_tiers_than_equipped_are_owned_not_equipped() {
        let old = item(2, 400, 2);
        assert!(is_owned(&old, 3));
        assert_eq!(card_state(&old, &PLAYER, 3), CardState::Owned);
        assert_eq!(purchase_action(&old, &PLAYER, 3), None);
        assert_eq!(price_tag(&old, &PLAYER, 3), None);
    }

    #[test]
    fn exactly_one_state_and_purchasable_implies_all_predicates() {
        let snapshots = [
            PlayerSnapshot { coins: 0, level: 1 },
            PlayerSnapshot {
                coins: 1_000,
                level: 3,
            },
            PlayerSnapshot {
                coins: 30_000,
                level: 12,
            },
        ];
        for player in &snapshots {
            for equipped in 1..=5 {
                for detector in &DETECTOR_TIERS {
                    let state = card_state(detector, player, equipped);
                    let buy = can_buy(detector, player, equipped);
                    if buy {
                        assert!(can_afford(detector, player));
                        assert!(can_unlock(detector, player));
                        assert!(!is_owned(detector, equipped));
                    }
                    assert_eq!(buy, state == CardState::Purchasable);
                    assert_eq!(
                        is_owned(detector, equipped),
                        matches!(state, CardState::Equipped | CardState::Owned)
                    );
                    assert_eq!(
                        purchase_action(detector, player, equipped).map(PurchaseAction::is_enabled),
                        if is_owned(detector, equipped) {
                            None
                        } else {
                            Some(buy)
                        }
                    );
                }
                for shovel in &SHOVEL_TIERS {
                    if shovel.id <= equipped {
                        assert!(is_owned(shovel, equipped));
                    }
                }
            }
        }
    }

    #[test]
    fn price_tag_colours_by_affordability() {
        let tag = price_tag(&item(2, 600, 2), &PLAYER, 1);
        assert_eq!(
            tag,
            Some(PriceTag::Price {
                text: "$600".to_string(),
                affordable: false
            })
        );
        let tag = price_tag(&item(2, 400, 2), &PLAYER, 1);
        assert!(matches!(tag, Some(PriceTag::Price { affordable: true, .. })));
    }

    #[test]
    fn coins_get_thousands_separators() {
        assert_eq!(format_coins(0), "0");
        assert_eq!(format_coins(999), "999");
        assert_eq!(format_coins(1_000), "1,000");
        assert_eq!(format_coins(25_000), "25,000");
        assert_eq!(format_coins(1_234_567), "1,234,567");
    }
}
