//! UI domain: death screen presentation and respawn flow.

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{MovementState, PLAYER_SPAWN, Player};
use crate::stats::ResourceRegulator;

/// Marker for the death screen overlay
#[derive(Component)]
pub struct DeathScreenUI;

/// Marker for the respawn button on death screen
#[derive(Component)]
pub struct RespawnButton;

pub(crate) fn spawn_death_screen(mut commands: Commands) {
    // Full screen dark overlay
    commands
        .spawn((
            DeathScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            // High z-index to be on top of everything
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("OUT OF BREATH"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    RespawnButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("RESPAWN"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Press [R] or click to respawn"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn despawn_death_screen(
    mut commands: Commands,
    death_screen_query: Query<Entity, With<DeathScreenUI>>,
) {
    for entity in &death_screen_query {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_respawn(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<RespawnButton>, Changed<Interaction>)>,
    mut player_query: Query<
        (&mut ResourceRegulator, &mut MovementState, &mut Transform),
        With<Player>,
    >,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let should_respawn = keyboard.just_pressed(KeyCode::KeyR)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if !should_respawn {
        return;
    }

    for (mut regulator, mut state, mut transform) in &mut player_query {
        regulator.revive();
        *state = MovementState {
            on_ground: true,
            ..default()
        };
        transform.translation = PLAYER_SPAWN;
    }

    next_state.set(GameState::Playing);
}
