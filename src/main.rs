use bevy::prelude::*;
use bevy::window::WindowResolution;

use treasure_hunt::catalog::check_catalogs_system;
use treasure_hunt::config::{self, GameConfig};
use treasure_hunt::graphics;
use treasure_hunt::menu::ShopPlugin;
use treasure_hunt::player::PlayerPlugin;
use treasure_hunt::rendering::HudPlugin;
use treasure_hunt::treasure::TreasurePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Treasure Hunt".into(),
                resolution: WindowResolution::new(1200, 820),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(graphics::SOIL_COLOR))
        // Compiled defaults; load_game_config overwrites them from
        // assets/game.toml (if present) before anything reads them.
        .insert_resource(GameConfig::default())
        .add_systems(
            Startup,
            (
                config::load_game_config,
                graphics::setup_camera,
                check_catalogs_system,
            ),
        )
        .add_plugins((PlayerPlugin, ShopPlugin, TreasurePlugin, HudPlugin))
        .run();
}
