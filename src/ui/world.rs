//! World setup systems for the camera, road and cars

use bevy::prelude::*;

use super::components::{
    rect_translation, to_color, CenterLineMark, GameplayVisual, LaneDash, MainCamera,
    PlayerSprite, RoadSurface, SessionResource, Z_MARKINGS, Z_PLAYER, Z_ROAD,
};
use crate::simulation::{
    center_line_marks, lane_dividers, window_rect, DriveConfig, Paint, Rect, Vehicle,
};

/// System to setup the camera, the road and the player's car
pub fn setup_world(mut commands: Commands, session: Res<SessionResource>) {
    let session = &session.0;
    let config = session.config();

    commands.spawn((MainCamera, Camera2d));
    commands.insert_resource(ClearColor(to_color(Paint::Background.color())));

    let road = Rect::new(config.road_left(), 0.0, config.road_width(), config.screen_height);
    commands.spawn((
        GameplayVisual,
        RoadSurface,
        Sprite::from_color(to_color(Paint::Road.color()), Vec2::new(road.width, road.height)),
        Transform::from_translation(rect_translation(road, config, Z_ROAD)),
    ));

    for (i, mark) in center_line_marks(config, session.road_offset)
        .into_iter()
        .enumerate()
    {
        commands.spawn((
            GameplayVisual,
            CenterLineMark(i),
            Sprite::from_color(
                to_color(Paint::CenterLine.color()),
                Vec2::new(mark.width, mark.height),
            ),
            Transform::from_translation(rect_translation(mark, config, Z_MARKINGS)),
        ));
    }

    for (i, dash) in lane_dividers(config, session.road_offset)
        .into_iter()
        .enumerate()
    {
        commands.spawn((
            GameplayVisual,
            LaneDash(i),
            Sprite::from_color(
                to_color(Paint::LaneLine.color()),
                Vec2::new(dash.width, dash.height),
            ),
            Transform::from_translation(rect_translation(dash, config, Z_MARKINGS)),
        ));
    }

    let player = &session.player;
    let body = spawn_car_visual(
        &mut commands,
        &player.vehicle,
        Paint::Player(player.color),
        config,
        Z_PLAYER,
    );
    commands.entity(body).insert(PlayerSprite);
}

/// Spawn a car body with its window as a child, returns the body entity
pub fn spawn_car_visual(
    commands: &mut Commands,
    vehicle: &Vehicle,
    paint: Paint,
    config: &DriveConfig,
    z: f32,
) -> Entity {
    let body = vehicle.rect();
    let window = window_rect(vehicle);
    // Child offset is relative to the body's centre
    let window_offset = rect_translation(window, config, 0.1) - rect_translation(body, config, 0.0);

    commands
        .spawn((
            GameplayVisual,
            Sprite::from_color(to_color(paint.color()), Vec2::new(body.width, body.height)),
            Transform::from_translation(rect_translation(body, config, z)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite::from_color(
                    to_color(Paint::Window.color()),
                    Vec2::new(window.width, window.height),
                ),
                Transform::from_translation(window_offset),
            ));
        })
        .id()
}
