use super::*;

/// Spawn the shop overlay for `progress`, showing the `tab` catalog.
///
/// Called by [`setup_shop`] (the `OnEnter(Shop)` system) and by
/// [`refresh_shop_system`] whenever the tab or the player progress changes.
///
/// Layout:
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                    🏪 UPGRADE SHOP                        │
/// │  Upgrade your equipment to find better treasures ...     │
/// │  ┌ 💰 Your Balance ───────┐  ┌ ⭐ Your Level ─────────┐  │
/// │  [ 🔍 METAL DETECTORS ]  [ ⛏ SHOVELS ]                   │
/// │  ┌ card ──────────────────────────────────────────────┐  │
/// │  │ icon name / badges │ stats │ price / [ PURCHASE ]   │  │
/// │  └────────────────────────────────────────────────────┘  │
/// │                      [ CLOSE ]                           │
/// └──────────────────────────────────────────────────────────┘
/// ```
pub fn spawn_shop_overlay(commands: &mut Commands, progress: &PlayerProgress, tab: ShopTab) {
    let player = progress.snapshot();

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.70)),
            ZIndex(300),
            ShopRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        width: Val::Px(860.0),
                        max_height: Val::Percent(96.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(20.0)),
                        row_gap: Val::Px(10.0),
                        border: UiRect::all(Val::Px(2.0)),
                        overflow: Overflow::clip_y(),
                        ..default()
                    },
                    BackgroundColor(dialog_bg()),
                    BorderColor::all(dialog_border()),
                ))
                .with_children(|dialog| {
                    label(dialog, "🏪 UPGRADE SHOP", 30.0, title_color());
                    label(
                        dialog,
                        "Upgrade your equipment to find better treasures and earn more coins!",
                        14.0,
                        subtitle_color(),
                    );

                    // ── Player stats ─────────────────────────────────────────
                    dialog
                        .spawn(Node {
                            width: Val::Percent(100.0),
                            flex_direction: FlexDirection::Row,
                            column_gap: Val::Px(12.0),
                            ..default()
                        })
                        .with_children(|row| {
                            stat_card(
                                row,
                                "💰 Your Balance",
                                format!("${}", format_coins(player.coins)),
                                (balance_bg(), balance_border(), balance_text()),
                            );
                            stat_card(
                                row,
                                "⭐ Your Level",
                                format!("Level {}", player.level),
                                (level_bg(), level_border(), level_text()),
                            );
                        });

                    // ── Tabs ─────────────────────────────────────────────────
                    dialog
                        .spawn(Node {
                            width: Val::Percent(100.0),
                            flex_direction: FlexDirection::Row,
                            column_gap: Val::Px(8.0),
                            ..default()
                        })
                        .with_children(|tabs| {
                            for option in [ShopTab::Detectors, ShopTab::Shovels] {
                                tab_button(tabs, option, option == tab);
                            }
                        });

                    // ── Catalog ──────────────────────────────────────────────
                    dialog
                        .spawn((
                            Node {
                                width: Val::Percent(100.0),
                                flex_direction: FlexDirection::Column,
                                row_gap: Val::Px(8.0),
                                ..default()
                            },
                            ShopCardList,
                        ))
                        .with_children(|list| match tab {
                            ShopTab::Detectors => {
                                for detector in &DETECTOR_TIERS {
                                    spawn_catalog_card(
                                        list,
                                        detector,
                                        &player,
                                        progress.equipped_detector,
                                        |stats| detector_stats(stats, detector, &player),
                                    );
                                }
                            }
                            ShopTab::Shovels => {
                                for shovel in &SHOVEL_TIERS {
                                    spawn_catalog_card(
                                        list,
                                        shovel,
                                        &player,
                                        progress.equipped_shovel,
                                        |stats| shovel_stats(stats, shovel, &player),
                                    );
                                }
                            }
                        });

                    // ── Close ────────────────────────────────────────────────
                    spacer(dialog, 4.0);
                    dialog
                        .spawn((
                            Button,
                            Node {
                                width: Val::Px(180.0),
                                height: Val::Px(38.0),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BackgroundColor(shop_close_bg()),
                            BorderColor::all(shop_close_border()),
                            ShopCloseButton,
                        ))
                        .with_children(|btn| label(btn, "CLOSE", 15.0, shop_close_text()));

                    label(
                        dialog,
                        "1 / 2: switch tabs  ·  ESC / B: close",
                        12.0,
                        hint_color(),
                    );
                });
        });
}

/// Balance / level summary box; `colors` is (background, border, value text).
fn stat_card(
    parent: &mut ChildSpawnerCommands<'_>,
    title: &str,
    value: String,
    colors: (Color, Color, Color),
) {
    let (bg, border, text) = colors;
    parent
        .spawn((
            Node {
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(bg),
            BorderColor::all(border),
        ))
        .with_children(|card| {
            label(card, title, 12.0, subtitle_color());
            label(card, value, 22.0, text);
        });
}

fn tab_button(parent: &mut ChildSpawnerCommands<'_>, tab: ShopTab, active: bool) {
    let (bg, text) = if active {
        (tab_active_bg(), tab_active_text())
    } else {
        (tab_idle_bg(), tab_idle_text())
    };
    parent
        .spawn((
            Button,
            Node {
                flex_grow: 1.0,
                height: Val::Px(36.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(bg),
            BorderColor::all(tab_border()),
            ShopTabButton(tab),
        ))
        .with_children(|btn| label(btn, tab.label(), 15.0, text));
}

/// Small filled chip with white text (tier and "EQUIPPED" badges).
fn badge(parent: &mut ChildSpawnerCommands<'_>, text: impl Into<String>, bg: Color) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(bg),
        ))
        .with_children(|chip| label(chip, text, 11.0, Color::WHITE));
}

/// One `Name: value` line inside a card's stats column.
fn stat_line(parent: &mut ChildSpawnerCommands<'_>, name: &str, value: String, color: Color) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(6.0),
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|row| {
            label(row, format!("{name}:"), 12.0, stat_label());
            label(row, value, 14.0, color);
        });
}

fn level_line<T: ShopItem>(parent: &mut ChildSpawnerCommands<'_>, item: &T, player: &PlayerSnapshot) {
    let color = if can_unlock(item, player) {
        good_text()
    } else {
        bad_text()
    };
    stat_line(
        parent,
        "Required Level",
        format!("Level {}", item.required_level()),
        color,
    );
}

fn detector_stats(
    parent: &mut ChildSpawnerCommands<'_>,
    detector: &DetectorTier,
    player: &PlayerSnapshot,
) {
    stat_line(
        parent,
        "Detection Bonus",
        format!("+{}%", detector.detection_bonus),
        stat_text(),
    );
    level_line(parent, detector, player);
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(4.0),
            row_gap: Val::Px(2.0),
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|chips| {
            label(chips, "Can Detect:", 12.0, stat_label());
            for rarity in detector.detectable_rarities {
                chips
                    .spawn((
                        Node {
                            padding: UiRect::axes(Val::Px(5.0), Val::Px(1.0)),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BorderColor::all(rarity.color()),
                    ))
                    .with_children(|chip| {
                        label(chip, rarity.label().to_uppercase(), 11.0, rarity.color())
                    });
            }
        });
}

fn shovel_stats(parent: &mut ChildSpawnerCommands<'_>, shovel: &ShovelTier, player: &PlayerSnapshot) {
    stat_line(
        parent,
        "Click Radius",
        format!("+{}px", shovel.click_radius_bonus),
        stat_text(),
    );
    stat_line(
        parent,
        "Value Bonus",
        format!("×{}", shovel.value_multiplier),
        good_text(),
    );
    label(
        parent,
        format!(
            "💡 Earn {}% more coins from each treasure!",
            shovel.value_bonus_percent()
        ),
        12.0,
        benefit_text(),
    );
    level_line(parent, shovel, player);
}

/// Spawn one catalog card.  `stats` fills the middle column with the
/// category-specific lines.
fn spawn_catalog_card<T, F>(
    list: &mut ChildSpawnerCommands<'_>,
    item: &T,
    player: &PlayerSnapshot,
    equipped_id: u32,
    stats: F,
) where
    T: ShopItem,
    F: FnOnce(&mut ChildSpawnerCommands<'_>),
{
    let state = card_state(item, player, equipped_id);
    let (bg, border) = card_colors(state, T::CATEGORY);
    let price = price_tag(item, player, equipped_id);
    let action = purchase_action(item, player, equipped_id);

    list.spawn((
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            column_gap: Val::Px(12.0),
            padding: UiRect::all(Val::Px(10.0)),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(bg),
        BorderColor::all(border),
        ShopCard {
            category: T::CATEGORY,
            id: item.id(),
        },
    ))
    .with_children(|card| {
        // ── Identity ─────────────────────────────────────────────────────────
        card.spawn(Node {
            width: Val::Px(230.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|col| {
            label(
                col,
                format!("{} {}", item.icon(), item.name()),
                18.0,
                card_name_color(state),
            );
            col.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(6.0),
                ..default()
            })
            .with_children(|badges| {
                badge(badges, item.tier().to_uppercase(), item.color().start());
                if state == CardState::Equipped {
                    badge(badges, "✔ EQUIPPED", equipped_badge_bg());
                }
            });
        });

        // ── Stats ────────────────────────────────────────────────────────────
        card.spawn(Node {
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(3.0),
            ..default()
        })
        .with_children(stats);

        // ── Price / purchase ─────────────────────────────────────────────────
        card.spawn(Node {
            width: Val::Px(170.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|col| {
            if let Some(tag) = &price {
                let color = match tag {
                    PriceTag::Free => good_text(),
                    PriceTag::Price { affordable: true, .. } => good_text(),
                    PriceTag::Price { .. } => bad_text(),
                };
                label(col, tag.text(), 18.0, color);
            }
            if let Some(action) = action {
                buy_button(col, T::CATEGORY, item.id(), action);
            }
        });
    });
}

fn buy_button(
    parent: &mut ChildSpawnerCommands<'_>,
    category: ItemCategory,
    id: u32,
    action: PurchaseAction,
) {
    let enabled = action.is_enabled();
    let (bg, border, text) = if enabled {
        (
            category_button_bg(category),
            category_accent(category),
            Color::WHITE,
        )
    } else {
        (
            disabled_button_bg(),
            disabled_button_border(),
            disabled_button_text(),
        )
    };
    let caption = match action {
        PurchaseAction::Locked => format!("🔒 {}", action.label()),
        _ => action.label().to_string(),
    };

    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(170.0),
                height: Val::Px(34.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(bg),
            BorderColor::all(border),
            ShopBuyButton {
                category,
                id,
                enabled,
            },
        ))
        .with_children(|btn| label(btn, caption, 13.0, text));
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// `B` while in `Playing` → open the shop.
pub fn open_shop_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::KeyB) {
        next_state.set(GameState::Shop);
    }
}

/// The tab is transient: every visit starts on the detector catalog.
pub fn reset_shop_tab(mut tab: ResMut<ShopTab>) {
    tab.set_if_neq(ShopTab::Detectors);
}

/// Spawn the shop overlay when entering [`GameState::Shop`].
pub fn setup_shop(mut commands: Commands, progress: Res<PlayerProgress>, tab: Res<ShopTab>) {
    spawn_shop_overlay(&mut commands, &progress, *tab);
}

/// Despawn the shop overlay when exiting [`GameState::Shop`].
pub fn cleanup_shop(mut commands: Commands, query: Query<Entity, With<ShopRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Rebuild the overlay in place when the tab or the player progress changed.
pub fn refresh_shop_system(
    mut commands: Commands,
    progress: Res<PlayerProgress>,
    tab: Res<ShopTab>,
    shop_root_query: Query<Entity, With<ShopRoot>>,
) {
    if !progress.is_changed() && !tab.is_changed() {
        return;
    }
    for entity in shop_root_query.iter() {
        commands.entity(entity).despawn();
    }
    spawn_shop_overlay(&mut commands, &progress, *tab);
}

/// Handle button and keyboard interactions in the shop.
///
/// - **CLOSE** button / **ESC** / **B**: return to [`GameState::Playing`].
/// - Tab buttons / **1** / **2**: switch catalogs.
/// - **PURCHASE**: write a [`BuyDetectorRequest`] or [`BuyShovelRequest`];
///   presses on disabled buttons are ignored.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn shop_button_system(
    keys: Res<ButtonInput<KeyCode>>,
    close_query: Query<&Interaction, (Changed<Interaction>, With<ShopCloseButton>)>,
    tab_query: Query<(&Interaction, &ShopTabButton), Changed<Interaction>>,
    buy_query: Query<(&Interaction, &ShopBuyButton), Changed<Interaction>>,
    mut tab: ResMut<ShopTab>,
    mut next_state: ResMut<NextState<GameState>>,
    mut buy_detector: MessageWriter<BuyDetectorRequest>,
    mut buy_shovel: MessageWriter<BuyShovelRequest>,
) {
    // ── Close ─────────────────────────────────────────────────────────────────
    let wants_close = keys.just_pressed(KeyCode::Escape)
        || keys.just_pressed(KeyCode::KeyB)
        || close_query.iter().any(|i| *i == Interaction::Pressed);
    if wants_close {
        next_state.set(GameState::Playing);
        return;
    }

    // ── Tabs ──────────────────────────────────────────────────────────────────
    if keys.just_pressed(KeyCode::Digit1) {
        tab.set_if_neq(ShopTab::Detectors);
    } else if keys.just_pressed(KeyCode::Digit2) {
        tab.set_if_neq(ShopTab::Shovels);
    }
    for (interaction, button) in tab_query.iter() {
        if *interaction == Interaction::Pressed {
            tab.set_if_neq(button.0);
        }
    }

    // ── Purchases ─────────────────────────────────────────────────────────────
    for (interaction, button) in buy_query.iter() {
        if *interaction != Interaction::Pressed || !button.enabled {
            continue;
        }
        match button.category {
            ItemCategory::Detector => {
                buy_detector.write(BuyDetectorRequest {
                    detector_id: button.id,
                });
            }
            ItemCategory::Shovel => {
                buy_shovel.write(BuyShovelRequest {
                    shovel_id: button.id,
                });
            }
        }
    }
}

/// Tint enabled purchase buttons white while hovered.
pub fn shop_hover_system(
    mut query: Query<(&Interaction, &ShopBuyButton, &mut BorderColor), Changed<Interaction>>,
) {
    for (interaction, button, mut border) in query.iter_mut() {
        if !button.enabled {
            continue;
        }
        *border = match interaction {
            Interaction::Hovered | Interaction::Pressed => BorderColor::all(Color::WHITE),
            Interaction::None => BorderColor::all(category_accent(button.category)),
        };
    }
}
