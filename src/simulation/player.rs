//! The player's car: movement, score and infraction history
//!
//! Standalone implementation that doesn't depend on Bevy.

use log::debug;

use super::config::{DriveConfig, STARTING_SCORE};
use super::infraction::Infraction;
use super::input::DriveInput;
use super::types::{LaneIndex, Position, Rgb};
use super::vehicle::Vehicle;

/// The car driven by the player
#[derive(Debug, Clone)]
pub struct PlayerCar {
    pub vehicle: Vehicle,
    pub color: Rgb,
    /// Safe-driving score, starts at 100 and never goes below 0
    pub score: f32,
    /// Every infraction recorded this session, in order
    pub infractions: Vec<Infraction>,
    /// Aggressive-driving counter. Not capped.
    pub anger_level: u32,
}

impl PlayerCar {
    /// Place a fresh car at the bottom centre of the screen
    pub fn new(config: &DriveConfig) -> Self {
        let x = (config.screen_width / 2.0).floor() - (config.car_width / 2.0).floor();
        let y = config.screen_height - 100.0;
        Self {
            vehicle: Vehicle::new(
                Position::new(x, y),
                config.car_width,
                config.car_height,
                0.0,
            ),
            color: Rgb::PLAYER,
            score: STARTING_SCORE,
            infractions: Vec::new(),
            anger_level: 0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vehicle.speed
    }

    pub fn position(&self) -> Position {
        self.vehicle.position
    }

    /// Advance the car by one frame according to the held keys
    ///
    /// Accelerate wins over brake when both are held. With neither held the
    /// car coasts down at half the braking rate. Steering authority scales
    /// with speed, so a stopped car cannot move sideways.
    pub fn drive(&mut self, input: &DriveInput, config: &DriveConfig) {
        let speed = self.vehicle.speed;
        let speed = if input.accelerate {
            speed + config.acceleration
        } else if input.brake {
            speed - config.deceleration
        } else {
            speed - config.deceleration / 2.0
        };
        self.vehicle.speed = speed.clamp(0.0, config.max_speed);

        let step = config.steering * (self.vehicle.speed / config.max_speed);
        if input.steer_left {
            self.vehicle.position.x -= step;
        }
        if input.steer_right {
            self.vehicle.position.x += step;
        }

        self.vehicle.position.x = self
            .vehicle
            .position
            .x
            .clamp(config.min_player_x(), config.max_player_x());
    }

    /// Lane bucket the car currently sits in
    pub fn lane(&self, config: &DriveConfig) -> LaneIndex {
        LaneIndex::from_x(
            self.vehicle.position.x,
            config.road_left(),
            config.lane_width,
        )
    }

    pub fn is_speeding(&self, config: &DriveConfig) -> bool {
        self.vehicle.speed > config.speeding_threshold()
    }

    /// Record an infraction at its default severity
    pub fn record(&mut self, infraction: Infraction) {
        self.deduct(infraction, infraction.severity());
    }

    /// Deduct `severity` points and log the infraction
    ///
    /// The infraction is always logged, even when the score is already 0.
    pub fn deduct(&mut self, infraction: Infraction, severity: f32) {
        self.score = (self.score - severity).max(0.0);
        self.infractions.push(infraction);

        if infraction.raises_anger() {
            self.anger_level += 1;
        }

        debug!(
            "Infraction: {} (-{}) -> score {}, anger {}",
            infraction, severity, self.score, self.anger_level
        );
    }

    /// Infraction kinds in order of first occurrence, without repeats
    pub fn distinct_infractions(&self) -> Vec<Infraction> {
        let mut seen = Vec::new();
        for infraction in &self.infractions {
            if !seen.contains(infraction) {
                seen.push(*infraction);
            }
        }
        seen
    }
}
