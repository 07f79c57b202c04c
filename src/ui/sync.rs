//! Systems for syncing Bevy entities with session state

use std::collections::HashSet;

use bevy::prelude::*;

use super::components::{
    rect_translation, to_color, CenterLineMark, GameplayVisual, HeldInput, LaneDash,
    PlayerSprite, SessionResource, TrafficSprite, Z_MARKINGS, Z_PLAYER, Z_TRAFFIC,
};
use super::world::spawn_car_visual;
use crate::simulation::{center_line_marks, lane_dividers, Paint};

/// System to run one session frame
pub fn tick_session(
    time: Res<Time>,
    held: Res<HeldInput>,
    mut session: ResMut<SessionResource>,
) {
    session.0.update(time.delta_secs() * 1000.0, &held.0);
}

/// Show gameplay sprites only while playing
pub fn sync_gameplay_visibility(
    session: Res<SessionResource>,
    mut query: Query<&mut Visibility, With<GameplayVisual>>,
) {
    let visibility = if session.0.is_playing() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut current in query.iter_mut() {
        current.set_if_neq(visibility);
    }
}

/// System to move the player's car
pub fn sync_player(
    session: Res<SessionResource>,
    mut query: Query<&mut Transform, With<PlayerSprite>>,
) {
    let session = &session.0;
    if let Ok(mut transform) = query.single_mut() {
        transform.translation =
            rect_translation(session.player.vehicle.rect(), session.config(), Z_PLAYER);
    }
}

/// System to sync traffic visuals from session state
///
/// Sprites are pooled by position in the traffic list, so a sprite may show
/// a different car from one frame to the next.
pub fn sync_traffic(
    mut commands: Commands,
    session: Res<SessionResource>,
    mut query: Query<(Entity, &TrafficSprite, &mut Transform, &mut Sprite)>,
) {
    let session = &session.0;
    let config = session.config();
    let mut existing = HashSet::new();

    for (entity, link, mut transform, mut sprite) in query.iter_mut() {
        match session.traffic.get(link.0) {
            Some(car) => {
                existing.insert(link.0);
                transform.translation = rect_translation(car.vehicle.rect(), config, Z_TRAFFIC);
                sprite.color = to_color(car.color);
            }
            None => {
                // Car no longer exists in the session, despawn
                commands.entity(entity).despawn();
            }
        }
    }

    for (index, car) in session.traffic.iter().enumerate() {
        if !existing.contains(&index) {
            let entity = spawn_car_visual(
                &mut commands,
                &car.vehicle,
                Paint::Traffic(car.color),
                config,
                Z_TRAFFIC,
            );
            commands.entity(entity).insert(TrafficSprite(index));
        }
    }
}

/// System to scroll the road markings with the player's speed
pub fn scroll_road_markings(
    session: Res<SessionResource>,
    mut marks: Query<(&CenterLineMark, &mut Transform), Without<LaneDash>>,
    mut dashes: Query<(&LaneDash, &mut Transform), Without<CenterLineMark>>,
) {
    let session = &session.0;
    let config = session.config();

    let positions = center_line_marks(config, session.road_offset);
    for (mark, mut transform) in marks.iter_mut() {
        if let Some(rect) = positions.get(mark.0) {
            transform.translation = rect_translation(*rect, config, Z_MARKINGS);
        }
    }

    let positions = lane_dividers(config, session.road_offset);
    for (dash, mut transform) in dashes.iter_mut() {
        if let Some(rect) = positions.get(dash.0) {
            transform.translation = rect_translation(*rect, config, Z_MARKINGS);
        }
    }
}
