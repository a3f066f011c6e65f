//! Treasure Hunt: dig for treasure, then spend the coins in the upgrade shop.
//!
//! The shop ([`menu`]) renders the detector and shovel catalogs ([`catalog`])
//! against a read-only player snapshot, using the pure predicates in [`shop`].
//! Purchases travel as messages to the progress store in [`player`].

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod menu;
pub mod player;
pub mod rendering;
pub mod shop;
pub mod treasure;
