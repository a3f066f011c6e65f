use bevy::prelude::*;

use crate::catalog::ItemCategory;
use crate::shop::CardState;

pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}

pub(super) fn dialog_bg() -> Color {
    Color::srgb(0.05, 0.05, 0.03)
}
pub(super) fn dialog_border() -> Color {
    Color::srgb(0.62, 0.44, 0.12)
}

pub(super) fn balance_bg() -> Color {
    Color::srgb(0.16, 0.12, 0.03)
}
pub(super) fn balance_border() -> Color {
    Color::srgb(0.85, 0.65, 0.15)
}
pub(super) fn balance_text() -> Color {
    Color::srgb(1.0, 0.85, 0.35)
}
pub(super) fn level_bg() -> Color {
    Color::srgb(0.10, 0.07, 0.18)
}
pub(super) fn level_border() -> Color {
    Color::srgb(0.55, 0.35, 0.90)
}
pub(super) fn level_text() -> Color {
    Color::srgb(0.80, 0.70, 1.0)
}

pub(super) fn tab_active_bg() -> Color {
    Color::srgb(0.20, 0.20, 0.28)
}
pub(super) fn tab_idle_bg() -> Color {
    Color::srgb(0.09, 0.09, 0.12)
}
pub(super) fn tab_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn tab_active_text() -> Color {
    Color::WHITE
}
pub(super) fn tab_idle_text() -> Color {
    Color::srgb(0.55, 0.55, 0.70)
}

pub(super) fn shop_close_bg() -> Color {
    Color::srgb(0.14, 0.14, 0.20)
}
pub(super) fn shop_close_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn shop_close_text() -> Color {
    Color::srgb(0.65, 0.65, 0.80)
}

pub(super) fn good_text() -> Color {
    Color::srgb(0.30, 0.85, 0.45)
}
pub(super) fn bad_text() -> Color {
    Color::srgb(0.90, 0.35, 0.35)
}
pub(super) fn stat_text() -> Color {
    Color::srgb(0.85, 0.85, 0.85)
}
pub(super) fn stat_label() -> Color {
    Color::srgb(0.55, 0.55, 0.60)
}
pub(super) fn benefit_text() -> Color {
    Color::srgb(0.95, 0.78, 0.40)
}

pub(super) fn equipped_badge_bg() -> Color {
    Color::srgb(0.09, 0.50, 0.22)
}

/// Highlight colour for purchasable cards and their button.
pub(super) fn category_accent(category: ItemCategory) -> Color {
    match category {
        ItemCategory::Detector => Color::srgb(0.66, 0.33, 0.97),
        ItemCategory::Shovel => Color::srgb(0.98, 0.55, 0.15),
    }
}

pub(super) fn category_button_bg(category: ItemCategory) -> Color {
    match category {
        ItemCategory::Detector => Color::srgb(0.26, 0.12, 0.44),
        ItemCategory::Shovel => Color::srgb(0.44, 0.20, 0.06),
    }
}

pub(super) fn disabled_button_bg() -> Color {
    Color::srgb(0.14, 0.14, 0.14)
}
pub(super) fn disabled_button_border() -> Color {
    Color::srgb(0.28, 0.28, 0.28)
}
pub(super) fn disabled_button_text() -> Color {
    Color::srgb(0.40, 0.40, 0.40)
}

/// Card background and border for each presentation state.
pub(super) fn card_colors(state: CardState, category: ItemCategory) -> (Color, Color) {
    match state {
        CardState::Equipped => (Color::srgb(0.05, 0.16, 0.09), good_text()),
        CardState::Owned => (Color::srgb(0.10, 0.10, 0.10), Color::srgb(0.32, 0.32, 0.32)),
        CardState::Purchasable => (
            match category {
                ItemCategory::Detector => Color::srgb(0.09, 0.07, 0.16),
                ItemCategory::Shovel => Color::srgb(0.16, 0.09, 0.05),
            },
            category_accent(category),
        ),
        CardState::Locked => (Color::srgb(0.07, 0.07, 0.07), Color::srgb(0.22, 0.22, 0.22)),
    }
}

/// Locked cards are rendered at reduced contrast.
pub(super) fn card_name_color(state: CardState) -> Color {
    match state {
        CardState::Locked => Color::srgb(0.50, 0.50, 0.50),
        _ => Color::srgb(0.95, 0.95, 0.95),
    }
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// Spawn a single line of text with the default font.
pub(super) fn label(
    parent: &mut ChildSpawnerCommands<'_>,
    text: impl Into<String>,
    size: f32,
    color: Color,
) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    ));
}
