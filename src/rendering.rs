//! In-game HUD: balance, level, equipped gear and the last dig result.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::menu::GameState;
use crate::player::{init_player_progress, PlayerProgress};
use crate::shop::format_coins;
use crate::treasure::LastDig;

/// Root of the HUD; hidden while the shop is open.
#[derive(Component)]
pub struct HudRoot;

/// Tags the balance / level / gear line.
#[derive(Component)]
pub struct HudStatusText;

/// Tags the last-dig line.
#[derive(Component)]
pub struct HudDigText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud.after(init_player_progress))
            .add_systems(OnEnter(GameState::Shop), hide_hud)
            .add_systems(OnExit(GameState::Shop), show_hud)
            .add_systems(Update, hud_update_system.run_if(in_state(GameState::Playing)));
    }
}

pub fn status_line(progress: &PlayerProgress, xp_per_level: u32) -> String {
    format!(
        "💰 ${}   ⭐ Level {} ({}/{} XP)   {} {}   {} {}",
        format_coins(progress.coins),
        progress.level,
        progress.xp,
        progress.xp_to_next_level(xp_per_level),
        progress.detector().icon,
        progress.detector().name,
        progress.shovel().icon,
        progress.shovel().name,
    )
}

pub fn dig_line(last_dig: &LastDig) -> String {
    match (last_dig.digs, last_dig.found) {
        (0, _) => "SPACE: dig   B: upgrade shop".to_string(),
        (_, Some(treasure)) => format!(
            "Found a {} treasure worth ${}!",
            treasure.rarity.label().to_uppercase(),
            format_coins(treasure.value)
        ),
        (_, None) => "Nothing here... keep digging.".to_string(),
    }
}

/// Spawn the HUD in the top-left corner.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>, progress: Res<PlayerProgress>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(status_line(&progress, config.xp_per_level)),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
                HudStatusText,
            ));
            parent.spawn((
                Text::new(dig_line(&LastDig::default())),
                TextFont {
                    font_size: config.hud_font_size * 0.8,
                    ..default()
                },
                TextColor(Color::srgb(0.65, 0.80, 1.0)),
                HudDigText,
            ));
        });
}

pub fn hide_hud(mut query: Query<&mut Visibility, With<HudRoot>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

pub fn show_hud(mut query: Query<&mut Visibility, With<HudRoot>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}

/// Rewrite the HUD text when progress or the last dig changed.
#[allow(clippy::type_complexity)]
pub fn hud_update_system(
    progress: Res<PlayerProgress>,
    last_dig: Res<LastDig>,
    config: Res<GameConfig>,
    mut status_query: Query<&mut Text, (With<HudStatusText>, Without<HudDigText>)>,
    mut dig_query: Query<&mut Text, (With<HudDigText>, Without<HudStatusText>)>,
) {
    if progress.is_changed() {
        for mut text in status_query.iter_mut() {
            *text = Text::new(status_line(&progress, config.xp_per_level));
        }
    }
    if last_dig.is_changed() {
        for mut text in dig_query.iter_mut() {
            *text = Text::new(dig_line(&last_dig));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rarity;
    use crate::treasure::Treasure;

    #[test]
    fn status_line_shows_balance_and_gear() {
        let progress = PlayerProgress {
            coins: 12_345,
            level: 3,
            xp: 40,
            ..Default::default()
        };
        let line = status_line(&progress, 100);
        assert!(line.contains("$12,345"));
        assert!(line.contains("Level 3 (40/300 XP)"));
        assert!(line.contains("Basic Detector"));
        assert!(line.contains("Garden Trowel"));
    }

    #[test]
    fn dig_line_describes_outcome() {
        assert!(dig_line(&LastDig::default()).contains("SPACE"));
        let found = LastDig {
            digs: 1,
            found: Some(Treasure {
                rarity: Rarity::Rare,
                value: 1_500,
            }),
        };
        assert_eq!(dig_line(&found), "Found a RARE treasure worth $1,500!");
        let miss = LastDig {
            digs: 2,
            found: None,
        };
        assert!(dig_line(&miss).starts_with("Nothing"));
    }
}
