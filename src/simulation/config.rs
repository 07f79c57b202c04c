//! Tunable parameters for a driving session
//!
//! Every constant the simulation uses lives here so that tests and the CLI
//! can shorten sessions or speed up traffic without touching the rules.

use anyhow::{bail, Result};

use super::types::{
    CAR_HEIGHT, CAR_WIDTH, LANE_WIDTH, ROAD_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH, TRAFFIC_LANES,
};

/// Length of a session in milliseconds
pub const GAME_DURATION_MS: f32 = 60_000.0;

/// Delay between traffic spawns in milliseconds
pub const SPAWN_DELAY_MS: f32 = 1_500.0;

/// Frame rate cap of the game loop
pub const TARGET_FPS: u32 = 60;

/// Score every session starts with
pub const STARTING_SCORE: f32 = 100.0;

/// Parameters for one driving session
#[derive(Debug, Clone, PartialEq)]
pub struct DriveConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Inset of the drivable band from each screen edge
    pub road_margin: f32,
    pub lane_width: f32,
    /// Lanes traffic may spawn into (0..traffic_lanes)
    pub traffic_lanes: u8,
    pub car_width: f32,
    pub car_height: f32,

    pub max_speed: f32,
    pub acceleration: f32,
    /// Speed lost per frame while braking. Coasting loses half of this.
    pub deceleration: f32,
    /// Lateral step at full speed
    pub steering: f32,
    /// Fraction of max speed above which the player is speeding
    pub speeding_ratio: f32,
    /// Road scroll distance per unit of player speed
    pub scroll_factor: f32,

    pub game_duration_ms: f32,
    pub spawn_delay_ms: f32,
    pub traffic_min_speed: f32,
    pub traffic_max_speed: f32,
    /// Traffic x is jittered by an integer in [-jitter, jitter]
    pub traffic_jitter: i32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            road_margin: ROAD_MARGIN,
            lane_width: LANE_WIDTH,
            traffic_lanes: TRAFFIC_LANES,
            car_width: CAR_WIDTH,
            car_height: CAR_HEIGHT,
            max_speed: 8.0,
            acceleration: 0.1,
            deceleration: 0.2,
            steering: 3.0,
            speeding_ratio: 0.8,
            scroll_factor: 2.0,
            game_duration_ms: GAME_DURATION_MS,
            spawn_delay_ms: SPAWN_DELAY_MS,
            traffic_min_speed: 3.0,
            traffic_max_speed: 6.0,
            traffic_jitter: 10,
        }
    }
}

impl DriveConfig {
    /// Left edge of the drivable band
    pub fn road_left(&self) -> f32 {
        self.road_margin
    }

    /// Width of the drivable road
    pub fn road_width(&self) -> f32 {
        self.screen_width - 2.0 * self.road_margin
    }

    /// Smallest x the player may occupy
    pub fn min_player_x(&self) -> f32 {
        self.road_margin
    }

    /// Largest x the player may occupy
    pub fn max_player_x(&self) -> f32 {
        self.screen_width - self.road_margin - self.car_width
    }

    /// Speed above which a frame counts as speeding
    pub fn speeding_threshold(&self) -> f32 {
        self.max_speed * self.speeding_ratio
    }

    /// Duration of one frame at the target frame rate
    pub fn frame_ms(&self) -> f32 {
        1000.0 / TARGET_FPS as f32
    }

    /// Reject configurations the frame update cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            bail!(
                "screen must have a positive size, got {}x{}",
                self.screen_width,
                self.screen_height
            );
        }
        if self.car_width <= 0.0 || self.car_height <= 0.0 {
            bail!("cars must have a positive size");
        }
        if self.lane_width <= 0.0 {
            bail!("lane width must be positive, got {}", self.lane_width);
        }
        if self.traffic_lanes == 0 {
            bail!("at least one traffic lane is required");
        }
        if self.min_player_x() > self.max_player_x() {
            bail!(
                "road of width {} is narrower than a car ({})",
                self.road_width(),
                self.car_width
            );
        }
        if self.max_speed <= 0.0 {
            bail!("max speed must be positive, got {}", self.max_speed);
        }
        if self.acceleration < 0.0 || self.deceleration < 0.0 {
            bail!("acceleration and deceleration cannot be negative");
        }
        if self.game_duration_ms <= 0.0 {
            bail!(
                "session duration must be positive, got {}ms",
                self.game_duration_ms
            );
        }
        if self.spawn_delay_ms <= 0.0 {
            bail!("spawn delay must be positive, got {}ms", self.spawn_delay_ms);
        }
        if self.traffic_min_speed > self.traffic_max_speed {
            bail!(
                "traffic speed range is inverted: [{}, {}]",
                self.traffic_min_speed,
                self.traffic_max_speed
            );
        }
        if self.traffic_jitter < 0 {
            bail!("traffic jitter cannot be negative");
        }
        Ok(())
    }
}
