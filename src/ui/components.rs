//! UI components and resources for linking Bevy entities to session state

use bevy::prelude::*;

use crate::simulation::{DriveConfig, DriveInput, Rect, Rgb, Session};

/// Resource wrapper for the driving session
#[derive(Resource)]
pub struct SessionResource(pub Session);

impl Default for SessionResource {
    fn default() -> Self {
        Self(Session::default())
    }
}

/// Keys held during the last rendered frame
#[derive(Resource, Default)]
pub struct HeldInput(pub DriveInput);

/// Marker for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for sprites that are only shown while playing
#[derive(Component)]
pub struct GameplayVisual;

/// Marker for the road surface
#[derive(Component)]
pub struct RoadSurface;

/// A centre line mark, by index into the scrolling pattern
#[derive(Component)]
pub struct CenterLineMark(pub usize);

/// A lane divider dash, by index into the scrolling pattern
#[derive(Component)]
pub struct LaneDash(pub usize);

/// Marker for the player's car sprite
#[derive(Component)]
pub struct PlayerSprite;

/// A pooled traffic sprite showing the car at this index of the traffic list
#[derive(Component)]
pub struct TrafficSprite(pub usize);

/// Marker for the HUD panel
#[derive(Component)]
pub struct HudPanel;

/// HUD text lines
#[derive(Component, Clone, Copy)]
pub enum HudText {
    Speed,
    Score,
    Anger,
    TimeLeft,
    Warning,
}

/// Marker for the start screen overlay
#[derive(Component)]
pub struct StartScreen;

/// Marker for the results screen overlay
#[derive(Component)]
pub struct ResultsScreen;

/// Results screen text lines
#[derive(Component, Clone, Copy)]
pub enum ResultsText {
    Score,
    Anger,
    Diagnosis,
    Advice,
    Infractions,
}

/// Z layers for 2D sprites
pub const Z_ROAD: f32 = 0.0;
pub const Z_MARKINGS: f32 = 1.0;
pub const Z_TRAFFIC: f32 = 2.0;
pub const Z_PLAYER: f32 = 3.0;

pub fn to_color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb.r, rgb.g, rgb.b)
}

/// Translation of a screen-space rectangle's centre in Bevy world space
///
/// Screen space has its origin at the top-left with y growing downward. The
/// 2D camera is centred on the screen with y growing upward.
pub fn rect_translation(rect: Rect, config: &DriveConfig, z: f32) -> Vec3 {
    Vec3::new(
        rect.x + rect.width / 2.0 - config.screen_width / 2.0,
        config.screen_height / 2.0 - (rect.y + rect.height / 2.0),
        z,
    )
}
