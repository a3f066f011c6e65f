//! Shop and progression error types.
//!
//! The shop predicates themselves are total; these errors come from the
//! player-progress store when it rejects a purchase request, and from the
//! startup catalog check.

use std::fmt;

use crate::catalog::ItemCategory;

/// Top-level error enum for purchases and catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// A purchase referenced an id that is not in the catalog.
    UnknownItem {
        category: ItemCategory,
        id: u32,
    },

    /// The requested item (or a later tier) is already owned.
    AlreadyOwned {
        category: ItemCategory,
        id: u32,
        equipped: u32,
    },

    /// Player level is below the item's required level.
    LevelTooLow {
        required: u32,
        actual: u32,
    },

    /// Not enough coins for the item's price.
    InsufficientCoins {
        price: u64,
        available: u64,
    },

    /// A catalog breaks the dense-id ownership assumption or has no free starter.
    InvalidCatalog {
        category: ItemCategory,
        /// Human-readable description of the first violation found.
        reason: String,
    },
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::UnknownItem { category, id } => {
                write!(f, "no {} with id {}", category.label(), id)
            }
            ShopError::AlreadyOwned {
                category,
                id,
                equipped,
            } => write!(
                f,
                "{} {} already owned (equipped tier is {})",
                category.label(),
                id,
                equipped
            ),
            ShopError::LevelTooLow { required, actual } => write!(
                f,
                "requires level {}, player is level {}",
                required, actual
            ),
            ShopError::InsufficientCoins { price, available } => {
                write!(f, "costs {} coins, only {} available", price, available)
            }
            ShopError::InvalidCatalog { category, reason } => {
                write!(f, "invalid {} catalog: {}", category.label(), reason)
            }
        }
    }
}

impl std::error::Error for ShopError {}

/// Convenience alias: a `Result` using `ShopError` as the error type.
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_category_and_id() {
        let err = ShopError::UnknownItem {
            category: ItemCategory::Shovel,
            id: 9,
        };
        assert_eq!(err.to_string(), "no shovel with id 9");
    }

    #[test]
    fn insufficient_coins_reports_both_amounts() {
        let err = ShopError::InsufficientCoins {
            price: 600,
            available: 500,
        };
        assert_eq!(err.to_string(), "costs 600 coins, only 500 available");
    }
}
