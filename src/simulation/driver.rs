//! Scripted drivers for headless sessions
//!
//! A driver looks at the same read-only view a renderer gets and decides
//! which keys to hold for the next frame.

use clap::ValueEnum;

use super::input::DriveInput;
use super::render::SessionView;

/// How far ahead of the player a cautious driver looks for traffic
const LOOKAHEAD: f32 = 250.0;

/// Fraction of max speed a cautious driver cruises at
const CRUISE_RATIO: f32 = 0.5;

/// Built-in driving styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DriverProfile {
    /// Never touches the controls
    Idle,
    /// Cruises at half speed and steers around traffic ahead
    #[default]
    Cautious,
    /// Keeps the accelerator floored
    Reckless,
    /// Floors it and swerves left and right every second
    Weaver,
}

impl DriverProfile {
    /// Keys to hold for the next frame
    pub fn input(self, view: &SessionView<'_>) -> DriveInput {
        match self {
            DriverProfile::Idle => DriveInput::idle(),
            DriverProfile::Cautious => cautious_input(view),
            DriverProfile::Reckless => DriveInput::accelerating(),
            DriverProfile::Weaver => {
                let input = DriveInput::accelerating();
                if (view.elapsed_ms / 1000.0) as u64 % 2 == 0 {
                    input.with_left()
                } else {
                    input.with_right()
                }
            }
        }
    }
}

fn cautious_input(view: &SessionView<'_>) -> DriveInput {
    let config = view.config;
    let player = &view.player.vehicle;
    let cruise = config.max_speed * CRUISE_RATIO;

    let mut input = if player.speed < cruise {
        DriveInput::accelerating()
    } else {
        DriveInput::idle()
    };

    let left = player.position.x;
    let right = left + player.width;
    let threat = view.traffic.iter().any(|car| {
        let car = &car.vehicle;
        let horizontally_close =
            car.position.x < right + 10.0 && left - 10.0 < car.position.x + car.width;
        let gap = player.position.y - (car.position.y + car.height);
        horizontally_close && (-player.height..LOOKAHEAD).contains(&gap)
    });

    if threat {
        let player_center = left + player.width / 2.0;
        let road_center = config.road_left() + config.road_width() / 2.0;
        input = if player_center > road_center {
            input.with_left()
        } else {
            input.with_right()
        };
    }

    input
}
