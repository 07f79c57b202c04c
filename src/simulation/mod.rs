//! Standalone driving simulation module
//!
//! This module contains all the core session logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod config;
mod driver;
mod evaluator;
mod infraction;
mod input;
mod player;
mod render;
mod report;
mod session;
mod traffic;
mod types;
mod vehicle;

pub use config::{DriveConfig, GAME_DURATION_MS, SPAWN_DELAY_MS, STARTING_SCORE, TARGET_FPS};
pub use driver::DriverProfile;
pub use evaluator::{check_collisions, check_speeding, Evaluation, Evaluator};
pub use infraction::{
    Infraction, COLLISION_PENALTY, LANE_CHANGE_PENALTY, OVERTAKING_PENALTY, SPEEDING_PENALTY,
};
pub use input::{DriveInput, SessionSignal};
pub use player::PlayerCar;
pub use render::{
    center_line_marks, draw_session, lane_dividers, tone_color, window_rect, Align, Canvas,
    Paint, SessionView, TextCanvas, CENTER_LINE_MARKS, DASHES_PER_DIVIDER,
};
pub use report::{
    speed_kmh, Diagnosis, DrivingReport, Tone, ACCEPTABLE_SCORE, ANGER_DISPLAY_MAX,
    EXCELLENT_MAX_ANGER, EXCELLENT_SCORE, WARNING_MAX_ANGER,
};
pub use session::{Session, SessionState, SessionStats};
pub use traffic::{advance_traffic, TrafficCar, TrafficGenerator};
pub use types::{
    LaneIndex, Position, Rect, Rgb, CAR_HEIGHT, CAR_WIDTH, LANE_WIDTH, ROAD_MARGIN,
    SCREEN_HEIGHT, SCREEN_WIDTH, TRAFFIC_LANES, TRAFFIC_PALETTE,
};
pub use vehicle::Vehicle;
