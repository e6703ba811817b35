//! UI domain: player HUD bars for each regulated stat and the level readout.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::Player;
use crate::stats::{LeveledUpEvent, ResourceRegulator, StatChangedEvent, StatKind};

pub(crate) const STAT_BAR_WIDTH: f32 = 200.0;
pub(crate) const STAT_BAR_HEIGHT: f32 = 14.0;
pub(crate) const STAT_HUD_PADDING: f32 = 16.0;

/// Marker for the HUD root container
#[derive(Component)]
pub struct StatHudUI;

/// Fill element of the bar showing one stat
#[derive(Component, Debug, Clone, Copy)]
pub struct StatBarFill(pub StatKind);

/// Text showing level and perk points
#[derive(Component)]
pub struct LevelText;

fn bar_color(kind: StatKind) -> Color {
    match kind {
        StatKind::Stamina => Color::srgb(0.85, 0.75, 0.2),
        StatKind::Breath => Color::srgb(0.35, 0.65, 0.95),
        StatKind::Fullness => Color::srgb(0.8, 0.5, 0.25),
        StatKind::Happiness => Color::srgb(0.9, 0.4, 0.7),
    }
}

const EXHAUSTED_COLOR: Color = Color::srgb(0.8, 0.2, 0.2);

pub(crate) fn spawn_stat_hud(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            StatHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(STAT_HUD_PADDING),
                top: Val::Px(STAT_HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                LevelText,
                Text::new("Lv 1"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));

            for kind in StatKind::ALL {
                parent
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(8.0),
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            Text::new(kind.label()),
                            TextFont {
                                font_size: 12.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.7, 0.7, 0.7)),
                            Node {
                                width: Val::Px(70.0),
                                ..default()
                            },
                        ));

                        row.spawn((
                            Node {
                                width: Val::Px(STAT_BAR_WIDTH),
                                height: Val::Px(STAT_BAR_HEIGHT),
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                        ))
                        .with_child((
                            StatBarFill(kind),
                            Node {
                                width: Val::Percent(100.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(bar_color(kind)),
                        ));
                    });
            }
        });
}

/// Resize bars named by change messages; every bar on the regulator's first frame.
pub(crate) fn update_stat_bars(
    mut changed: MessageReader<StatChangedEvent>,
    added: Query<(), (With<Player>, Added<ResourceRegulator>)>,
    player_query: Query<&ResourceRegulator, With<Player>>,
    mut fill_query: Query<(&StatBarFill, &mut Node, &mut BackgroundColor)>,
) {
    let mut dirty: Vec<StatKind> = changed.read().map(|event| event.stat).collect();
    if !added.is_empty() {
        dirty.extend(StatKind::ALL);
    }
    if dirty.is_empty() {
        return;
    }

    let Ok(regulator) = player_query.single() else {
        return;
    };

    for (fill, mut node, mut bg_color) in &mut fill_query {
        if !dirty.contains(&fill.0) {
            continue;
        }

        node.width = Val::Percent(regulator.resource(fill.0).fraction() * 100.0);
        bg_color.0 = if fill.0 == StatKind::Stamina && regulator.is_exhausted() {
            EXHAUSTED_COLOR
        } else {
            bar_color(fill.0)
        };
    }
}

pub(crate) fn update_level_text(
    mut leveled: MessageReader<LeveledUpEvent>,
    added: Query<(), (With<Player>, Added<ResourceRegulator>)>,
    player_query: Query<&ResourceRegulator, With<Player>>,
    mut text_query: Query<&mut Text, With<LevelText>>,
) {
    let leveled_up = leveled.read().count() > 0;
    if !leveled_up && added.is_empty() {
        return;
    }

    let Ok(regulator) = player_query.single() else {
        return;
    };

    for mut text in &mut text_query {
        text.0 = format_level(regulator.level(), regulator.perk_points());
    }
}

pub(crate) fn format_level(level: u32, perk_points: u32) -> String {
    if perk_points == 0 {
        format!("Lv {}", level)
    } else {
        format!("Lv {}  ({} perk points)", level, perk_points)
    }
}

#[cfg(test)]
mod tests {
    use super::format_level;

    #[test]
    fn test_level_text_mentions_perks_once_earned() {
        assert_eq!(format_level(1, 0), "Lv 1");
        assert_eq!(format_level(3, 2), "Lv 3  (2 perk points)");
    }
}
