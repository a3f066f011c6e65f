use bevy::prelude::*;

/// Dark soil colour behind the HUD while digging.
pub const SOIL_COLOR: Color = Color::srgb(0.16, 0.11, 0.07);

/// Setup camera for 2D rendering; the HUD and shop overlay render through it.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    debug!("Camera spawned");
}
