use bevy::prelude::*;

use rpg_character::{
    content::ContentPlugin, core::CorePlugin, hazards::HazardsPlugin, movement::MovementPlugin,
    stats::StatsPlugin, ui::UiPlugin,
};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "RPG Character".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        ContentPlugin::default(),
        CorePlugin,
        StatsPlugin,
        MovementPlugin,
        HazardsPlugin,
        UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(rpg_character::debug::DebugPlugin);

    app.run();
}
