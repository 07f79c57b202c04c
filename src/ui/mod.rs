//! UI module that presents the driving session using Bevy
//!
//! This module is purely for presentation - all session logic is in the `simulation` module.
//! The UI polls the keyboard into `DriveInput`, ticks the session on a fixed
//! timestep and renders it with 2D sprites and UI text.

mod components;
mod input;
mod screens;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{HeldInput, SessionResource};

use input::{capture_drive_input, handle_signals};
use screens::{setup_screens, sync_screen_visibility, update_hud_text, update_results_text};
use sync::{scroll_road_markings, sync_gameplay_visibility, sync_player, sync_traffic, tick_session};
use world::setup_world;

/// Plugin to register all UI systems
pub struct SafeDriveUIPlugin;

impl Plugin for SafeDriveUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionResource>()
            .init_resource::<HeldInput>()
            .add_systems(Startup, (setup_world, setup_screens))
            .add_systems(FixedUpdate, tick_session)
            .add_systems(
                Update,
                (
                    (capture_drive_input, handle_signals),
                    (
                        sync_gameplay_visibility,
                        sync_player,
                        sync_traffic,
                        scroll_road_markings,
                        sync_screen_visibility,
                        update_hud_text,
                        update_results_text,
                    ),
                )
                    .chain(),
            );
    }
}
