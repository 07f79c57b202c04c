//! The driving session: state machine and per-frame update
//!
//! This is the entry point for running the simulation without any Bevy
//! dependencies. The owner of the frame loop feeds it signals and held keys,
//! calls `update` once per frame and reads it back through `view()`.

use std::ops::ControlFlow;

use anyhow::{Context, Result};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::DriveConfig;
use super::evaluator::{Evaluation, Evaluator};
use super::input::{DriveInput, SessionSignal};
use super::player::PlayerCar;
use super::report::DrivingReport;
use super::traffic::{advance_traffic, TrafficCar, TrafficGenerator};

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the start signal
    #[default]
    Start,
    /// Clock running, traffic spawning, infractions scored
    Playing,
    /// Session over, waiting for the reset signal
    Results,
}

/// Counters kept for logging and the headless summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames updated while playing
    pub frames: u64,
    pub traffic_spawned: u32,
    /// Traffic that left the bottom of the screen
    pub traffic_passed: u32,
    pub collisions: u32,
}

/// A complete driving session
pub struct Session {
    config: DriveConfig,
    state: SessionState,

    pub player: PlayerCar,

    /// Active traffic, in spawn order
    pub traffic: Vec<TrafficCar>,

    /// Time spent playing, in milliseconds
    pub elapsed_ms: f32,

    pub generator: TrafficGenerator,
    pub evaluator: Evaluator,

    /// Cosmetic road scroll, grows with player speed
    pub road_offset: f32,

    pub stats: SessionStats,

    /// Optional seeded RNG for reproducible sessions
    rng: Option<StdRng>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DriveConfig::default())
    }
}

impl Session {
    fn new_internal(config: DriveConfig, rng: Option<StdRng>) -> Self {
        Self {
            player: PlayerCar::new(&config),
            config,
            state: SessionState::Start,
            traffic: Vec::new(),
            elapsed_ms: 0.0,
            generator: TrafficGenerator::new(),
            evaluator: Evaluator::new(),
            road_offset: 0.0,
            stats: SessionStats::default(),
            rng,
        }
    }

    pub fn new(config: DriveConfig) -> Self {
        Self::new_internal(config, None)
    }

    /// Create a session whose traffic is reproducible from `seed`
    pub fn with_seed(config: DriveConfig, seed: u64) -> Self {
        Self::new_internal(config, Some(StdRng::seed_from_u64(seed)))
    }

    /// Validate `config` before building a session from it
    pub fn try_new(config: DriveConfig, seed: Option<u64>) -> Result<Self> {
        config.validate().context("Invalid drive configuration")?;
        Ok(match seed {
            Some(seed) => Self::with_seed(config, seed),
            None => Self::new(config),
        })
    }

    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Milliseconds left on the clock
    pub fn remaining_ms(&self) -> f32 {
        (self.config.game_duration_ms - self.elapsed_ms).max(0.0)
    }

    /// Whole seconds left on the clock, as shown on the HUD
    pub fn remaining_secs(&self) -> u32 {
        (self.remaining_ms() / 1000.0).floor() as u32
    }

    /// Results for the session so far
    pub fn report(&self) -> DrivingReport {
        DrivingReport::from_player(&self.player)
    }

    /// Start -> Playing. Returns false in any other state.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Start {
            return false;
        }
        self.state = SessionState::Playing;
        info!("Session started");
        true
    }

    /// Playing -> Results. Returns false in any other state.
    pub fn finish(&mut self) -> bool {
        if self.state != SessionState::Playing {
            return false;
        }
        self.state = SessionState::Results;
        info!(
            "Session finished after {:.1}s: {}",
            self.elapsed_ms / 1000.0,
            self.report()
        );
        true
    }

    /// Results -> Start, by rebuilding the whole session
    ///
    /// Player, clock, traffic and infraction history are discarded. The
    /// configuration and the RNG stream carry over.
    pub fn reset(&mut self) -> bool {
        if self.state != SessionState::Results {
            return false;
        }
        let config = self.config.clone();
        let rng = self.rng.take();
        *self = Self::new_internal(config, rng);
        info!("Session reset");
        true
    }

    /// React to an edge-triggered signal
    ///
    /// Signals that don't apply to the current state are ignored. `Quit`
    /// asks the frame loop to stop and leaves the session untouched.
    pub fn handle_signal(&mut self, signal: SessionSignal) -> ControlFlow<()> {
        match signal {
            SessionSignal::Start => {
                self.start();
            }
            SessionSignal::Reset => {
                self.reset();
            }
            SessionSignal::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Whether the clock has run out or the score is gone
    pub fn is_over(&self) -> bool {
        self.elapsed_ms >= self.config.game_duration_ms || self.player.score <= 0.0
    }

    /// Advance one frame of `delta_ms` milliseconds
    ///
    /// Does nothing outside the Playing state. Returns what the evaluator
    /// recorded for this frame.
    pub fn update(&mut self, delta_ms: f32, input: &DriveInput) -> Option<Evaluation> {
        if self.state != SessionState::Playing {
            return None;
        }

        self.player.drive(input, &self.config);

        self.elapsed_ms += delta_ms;
        self.road_offset += self.player.speed() * self.config.scroll_factor;
        self.stats.frames += 1;

        // Spawn new traffic
        let spawned = match &mut self.rng {
            Some(rng) => self.generator.tick(delta_ms, &self.config, rng),
            None => self
                .generator
                .tick(delta_ms, &self.config, &mut rand::rng()),
        };
        if let Some(car) = spawned {
            self.stats.traffic_spawned += 1;
            self.traffic.push(car);
        }

        // Move traffic and cull what left the screen
        let passed = advance_traffic(&mut self.traffic, self.config.screen_height);
        if passed > 0 {
            trace!("{} traffic car(s) left the screen", passed);
            self.stats.traffic_passed += passed as u32;
        }

        let evaluation = self
            .evaluator
            .evaluate(&mut self.player, &mut self.traffic, &self.config);
        if evaluation.collided_with.is_some() {
            self.stats.collisions += 1;
        }
        if !evaluation.is_clean() {
            debug!(
                "Frame {}: {:?} -> score {}",
                self.stats.frames, evaluation.infractions, self.player.score
            );
        }

        if self.is_over() {
            self.finish();
        }

        Some(evaluation)
    }
}
