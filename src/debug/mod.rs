//! Dev tools for poking at the stat regulator while the game runs.
//!
//! Hotkeys (hold Ctrl):
//! - S: refill stamina
//! - H: grant happiness
//! - U: toggle sprint unlock
//! - B: toggle input block
//! - J: dump the stat snapshot as JSON to the log
//! - D: toggle the stat info overlay

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::Player;
use crate::stats::{ResourceRegulator, StatKind};

const DEBUG_HAPPINESS_GRANT: f32 = 50.0;

// ============================================================================
// Debug State Resource
// ============================================================================

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the stat info overlay
    pub show_info: bool,
    /// Message shown in the overlay until its timer runs out
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_status_message,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}

// ============================================================================
// Systems
// ============================================================================

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut player_query: Query<&mut ResourceRegulator, With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+D works without a player
    if keyboard.just_pressed(KeyCode::KeyD) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Stat overlay {}", on_off(debug_state.show_info));
    }

    let Ok(mut regulator) = player_query.single_mut() else {
        return;
    };

    // Ctrl+S: Refill stamina
    if keyboard.just_pressed(KeyCode::KeyS) {
        let max = regulator.stamina().max;
        regulator.set_stamina(max);
        debug_state.set_message("Stamina refilled", 2.0);
        info!("[DEBUG] Stamina refilled to {}", max);
    }

    // Ctrl+H: Grant happiness
    if keyboard.just_pressed(KeyCode::KeyH) {
        regulator.add_happiness(DEBUG_HAPPINESS_GRANT, false);
        debug_state.set_message(format!("+{} happiness", DEBUG_HAPPINESS_GRANT), 2.0);
        info!("[DEBUG] Granted {} happiness", DEBUG_HAPPINESS_GRANT);
    }

    // Ctrl+U: Toggle sprint unlock
    if keyboard.just_pressed(KeyCode::KeyU) {
        let unlocked = !regulator.unlocks().sprint;
        regulator.set_sprint_unlocked(unlocked);
        let msg = format!("Sprint unlock {}", on_off(unlocked));
        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, 2.0);
    }

    // Ctrl+B: Toggle input block
    if keyboard.just_pressed(KeyCode::KeyB) {
        let blocked = !regulator.is_input_blocked();
        regulator.set_input_blocked(blocked);
        let msg = format!("Input block {}", on_off(blocked));
        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, 2.0);
    }

    // Ctrl+J: Dump snapshot
    if keyboard.just_pressed(KeyCode::KeyJ) {
        match serde_json::to_string_pretty(&regulator.snapshot()) {
            Ok(json) => {
                info!("[DEBUG] Stat snapshot:\n{}", json);
                debug_state.set_message("Snapshot written to log", 2.0);
            }
            Err(e) => warn!("[DEBUG] Failed to serialize stat snapshot: {}", e),
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// Update status message timer and fade out
fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    game_state: Res<State<GameState>>,
    player_query: Query<(&Transform, &ResourceRegulator), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok((transform, regulator)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let gate = regulator.gate();
        let mut info = format!(
            "Pos: ({:.0}, {:.0})\nState: {:?}\nStamina: {:.1} ({:?})\nBreath: {:.1}\nFullness: {:.1}\nHappiness: {:.1}\nLevel: {} / perks {}\nSprint {} Jump {} Dash {}\nExhausted: {}",
            pos.x,
            pos.y,
            game_state.get(),
            regulator.stamina().current,
            regulator.resource_state(StatKind::Stamina),
            regulator.breath().current,
            regulator.fullness().current,
            regulator.happiness().current,
            regulator.level(),
            regulator.perk_points(),
            gate.sprint_allowed,
            gate.jump_allowed,
            gate.dash_allowed,
            regulator.is_exhausted(),
        );
        if let Some((message, _)) = &debug_state.status_message {
            info.push_str("\n> ");
            info.push_str(message);
        }
        **text = info;
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
