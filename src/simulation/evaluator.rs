//! Per-frame infraction checks
//!
//! Runs once per Playing frame, after traffic has moved. The checks run in a
//! fixed order (collision, speeding, lane discipline) and each one can cost
//! the player points independently.

use log::{debug, trace};

use super::config::DriveConfig;
use super::infraction::Infraction;
use super::player::PlayerCar;
use super::traffic::TrafficCar;
use super::types::LaneIndex;

/// What the evaluator recorded during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Infractions recorded this frame, in check order
    pub infractions: Vec<Infraction>,
    /// Index the colliding car held in the traffic list before removal
    pub collided_with: Option<usize>,
}

impl Evaluation {
    pub fn is_clean(&self) -> bool {
        self.infractions.is_empty()
    }
}

/// Holds the state the checks need between frames
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    /// Lane the player was in on the previous evaluated frame
    pub last_lane: Option<LaneIndex>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every check against the current frame
    pub fn evaluate(
        &mut self,
        player: &mut PlayerCar,
        traffic: &mut Vec<TrafficCar>,
        config: &DriveConfig,
    ) -> Evaluation {
        let mut evaluation = Evaluation::default();

        if let Some(index) = check_collisions(player, traffic) {
            evaluation.infractions.push(Infraction::Collision);
            evaluation.collided_with = Some(index);
        }
        if check_speeding(player, config) {
            evaluation.infractions.push(Infraction::Speeding);
        }
        if self.check_lane_discipline(player, config) {
            evaluation.infractions.push(Infraction::FrequentLaneChange);
        }

        trace!("Evaluation: {:?}", evaluation);
        evaluation
    }

    /// Penalise a move into a different lane bucket since the last frame
    ///
    /// The first evaluated frame only records the lane. Returns true when a
    /// lane change was penalised.
    pub fn check_lane_discipline(&mut self, player: &mut PlayerCar, config: &DriveConfig) -> bool {
        let lane = player.lane(config);
        let changed = matches!(self.last_lane, Some(last) if last != lane);
        if changed {
            player.record(Infraction::FrequentLaneChange);
        }
        self.last_lane = Some(lane);
        changed
    }
}

/// Penalise the first traffic car overlapping the player and remove it
///
/// Cars are tested in list order and only one collision is counted per
/// frame, even if several cars overlap the player.
pub fn check_collisions(player: &mut PlayerCar, traffic: &mut Vec<TrafficCar>) -> Option<usize> {
    let index = traffic
        .iter()
        .position(|car| player.vehicle.overlaps(&car.vehicle))?;

    let car = traffic.remove(index);
    debug!(
        "Collision with traffic in lane {} at ({:.1}, {:.1})",
        car.lane, car.vehicle.position.x, car.vehicle.position.y
    );
    player.record(Infraction::Collision);
    Some(index)
}

/// Penalise every frame spent above the speeding threshold
pub fn check_speeding(player: &mut PlayerCar, config: &DriveConfig) -> bool {
    if player.is_speeding(config) {
        player.record(Infraction::Speeding);
        true
    } else {
        false
    }
}
