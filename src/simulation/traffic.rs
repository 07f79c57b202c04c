//! Traffic cars and the generator that spawns them
//!
//! Traffic drives straight down the screen at a constant speed and is culled
//! once it leaves the bottom edge.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::config::DriveConfig;
use super::types::{Position, Rgb, TRAFFIC_PALETTE};
use super::vehicle::Vehicle;

/// A car driving down one of the traffic lanes
#[derive(Debug, Clone)]
pub struct TrafficCar {
    pub vehicle: Vehicle,
    /// Lane the car spawned in. Only used to place it.
    pub lane: u8,
    pub color: Rgb,
}

impl TrafficCar {
    /// Create a car just above the top edge of the screen
    pub fn new(lane: u8, speed: f32, jitter: i32, color: Rgb, config: &DriveConfig) -> Self {
        let x = config.road_left() + lane as f32 * config.lane_width + jitter as f32;
        let y = -config.car_height;
        Self {
            vehicle: Vehicle::new(
                Position::new(x, y),
                config.car_width,
                config.car_height,
                speed,
            ),
            lane,
            color,
        }
    }

    /// Advance one frame down the screen
    pub fn advance(&mut self) {
        self.vehicle.position.y += self.vehicle.speed;
    }

    /// True once the car has left through the bottom edge
    pub fn is_offscreen(&self, screen_height: f32) -> bool {
        self.vehicle.position.y > screen_height
    }
}

/// Spawns one traffic car every `spawn_delay_ms`
#[derive(Debug, Clone, Default)]
pub struct TrafficGenerator {
    /// Time accumulated since the last spawn
    pub spawn_timer: f32,
}

impl TrafficGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate frame time and spawn a car when the delay has elapsed
    ///
    /// At most one car is produced per call. The timer resets to zero rather
    /// than carrying over the remainder.
    pub fn tick<R: Rng>(
        &mut self,
        delta_ms: f32,
        config: &DriveConfig,
        rng: &mut R,
    ) -> Option<TrafficCar> {
        self.spawn_timer += delta_ms;
        if self.spawn_timer < config.spawn_delay_ms {
            return None;
        }
        self.spawn_timer = 0.0;
        Some(Self::spawn(config, rng))
    }

    /// Build a car in a random lane with a random speed
    pub fn spawn<R: Rng>(config: &DriveConfig, rng: &mut R) -> TrafficCar {
        let lane = rng.random_range(0..config.traffic_lanes);
        let speed = rng.random_range(config.traffic_min_speed..=config.traffic_max_speed);
        let jitter = rng.random_range(-config.traffic_jitter..=config.traffic_jitter);
        let color = *TRAFFIC_PALETTE.choose(rng).unwrap_or(&Rgb::RED);

        debug!("Spawning traffic in lane {} at speed {:.2}", lane, speed);
        TrafficCar::new(lane, speed, jitter, color, config)
    }
}

/// Move every car one frame and drop the ones that left the screen
///
/// Returns how many cars were removed. Insertion order is preserved.
pub fn advance_traffic(traffic: &mut Vec<TrafficCar>, screen_height: f32) -> usize {
    let before = traffic.len();
    traffic.retain_mut(|car| {
        car.advance();
        !car.is_offscreen(screen_height)
    });
    before - traffic.len()
}
