use bevy::prelude::*;

mod camera;
mod input;
mod trail;
mod tween;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;

use crate::visual::plugin::TrailPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Image Trail".into(),
            resolution: WindowResolution::new(1280, 800),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.07, 0.07, 0.08)))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(TrailPlugin);

    app.run();
}
