//! Infraction scoring validation tests
//!
//! These tests validate the per-frame collision, speeding and lane checks
//! and the score deduction rules they share.

use safe_drive::simulation::{
    check_collisions, DriveConfig, Evaluator, Infraction, LaneIndex, PlayerCar, Rgb,
    TrafficCar, COLLISION_PENALTY,
};

fn setup() -> (DriveConfig, PlayerCar, Evaluator) {
    let config = DriveConfig::default();
    let player = PlayerCar::new(&config);
    (config, player, Evaluator::new())
}

/// Traffic car parked with its top-left corner at (x, y)
fn traffic_at(x: f32, y: f32, config: &DriveConfig) -> TrafficCar {
    let mut car = TrafficCar::new(0, 0.0, 0, Rgb::RED, config);
    car.vehicle.position.x = x;
    car.vehicle.position.y = y;
    car
}

#[test]
fn test_collision_deducts_and_removes_car() {
    let (config, mut player, mut evaluator) = setup();
    let position = player.position();
    let mut traffic = vec![traffic_at(position.x + 10.0, position.y + 30.0, &config)];

    let evaluation = evaluator.evaluate(&mut player, &mut traffic, &config);

    assert_eq!(player.score, 100.0 - COLLISION_PENALTY);
    assert_eq!(player.infractions, vec![Infraction::Collision]);
    assert!(traffic.is_empty());
    assert_eq!(evaluation.collided_with, Some(0));
    assert_eq!(evaluation.infractions, vec![Infraction::Collision]);
}

#[test]
fn test_only_one_collision_per_frame() {
    let (config, mut player, mut evaluator) = setup();
    let position = player.position();
    let mut traffic = vec![
        traffic_at(position.x - 300.0, position.y, &config),
        traffic_at(position.x + 5.0, position.y, &config),
        traffic_at(position.x - 5.0, position.y + 5.0, &config),
    ];

    evaluator.evaluate(&mut player, &mut traffic, &config);

    assert_eq!(player.score, 80.0);
    assert_eq!(player.infractions, vec![Infraction::Collision]);
    // The first overlapping car in list order is the one removed
    assert_eq!(traffic.len(), 2);
    assert_eq!(traffic[0].vehicle.position.x, position.x - 300.0);
    assert_eq!(traffic[1].vehicle.position.x, position.x - 5.0);

    // The remaining overlap is penalised on the next frame
    evaluator.evaluate(&mut player, &mut traffic, &config);
    assert_eq!(player.score, 60.0);
    assert_eq!(traffic.len(), 1);
}

#[test]
fn test_touching_edges_do_not_collide() {
    let (config, mut player, _) = setup();
    let position = player.position();
    let mut traffic = vec![
        traffic_at(position.x + config.car_width, position.y, &config),
        traffic_at(position.x, position.y - config.car_height, &config),
    ];

    assert_eq!(check_collisions(&mut player, &mut traffic), None);
    assert_eq!(player.score, 100.0);
    assert_eq!(traffic.len(), 2);
}

#[test]
fn test_collision_score_floors_at_zero() {
    let (config, mut player, mut evaluator) = setup();
    player.score = 10.0;
    let position = player.position();
    let mut traffic = vec![traffic_at(position.x, position.y, &config)];

    evaluator.evaluate(&mut player, &mut traffic, &config);

    assert_eq!(player.score, 0.0);
    assert_eq!(player.infractions, vec![Infraction::Collision]);
}

#[test]
fn test_speeding_sustained_three_frames() {
    let (config, mut player, mut evaluator) = setup();
    player.vehicle.speed = 0.85 * config.max_speed;
    let mut traffic = Vec::new();

    for _ in 0..3 {
        evaluator.evaluate(&mut player, &mut traffic, &config);
    }

    assert_eq!(player.score, 97.0);
    assert_eq!(player.infractions, vec![Infraction::Speeding; 3]);
    assert_eq!(player.anger_level, 3);
}

#[test]
fn test_speeding_threshold_is_strict() {
    let (config, mut player, mut evaluator) = setup();
    player.vehicle.speed = config.speeding_threshold();
    let mut traffic = Vec::new();

    let evaluation = evaluator.evaluate(&mut player, &mut traffic, &config);

    assert!(evaluation.is_clean());
    assert_eq!(player.score, 100.0);
    assert_eq!(player.anger_level, 0);
}

#[test]
fn test_lane_change_deducts_half_point() {
    let (config, mut player, mut evaluator) = setup();
    let mut traffic = Vec::new();

    player.vehicle.position.x = config.road_left() + config.lane_width + 10.0;
    assert_eq!(player.lane(&config), LaneIndex(1));
    evaluator.evaluate(&mut player, &mut traffic, &config);

    player.vehicle.position.x = config.road_left() + 2.0 * config.lane_width + 10.0;
    assert_eq!(player.lane(&config), LaneIndex(2));
    let evaluation = evaluator.evaluate(&mut player, &mut traffic, &config);

    assert_eq!(player.score, 99.5);
    assert_eq!(player.infractions, vec![Infraction::FrequentLaneChange]);
    assert_eq!(evaluation.infractions, vec![Infraction::FrequentLaneChange]);
    assert_eq!(player.anger_level, 0);
}

#[test]
fn test_staying_in_lane_records_nothing() {
    let (config, mut player, mut evaluator) = setup();
    let mut traffic = Vec::new();

    for offset in [0.0, 20.0, 40.0, 60.0] {
        player.vehicle.position.x = config.road_left() + config.lane_width + offset;
        evaluator.evaluate(&mut player, &mut traffic, &config);
    }

    assert_eq!(player.score, 100.0);
    assert!(player.infractions.is_empty());
}

#[test]
fn test_first_frame_only_stores_lane() {
    let (config, mut player, mut evaluator) = setup();
    assert_eq!(evaluator.last_lane, None);

    assert!(!evaluator.check_lane_discipline(&mut player, &config));
    assert_eq!(evaluator.last_lane, Some(player.lane(&config)));
    assert!(player.infractions.is_empty());
}

#[test]
fn test_checks_run_in_order() {
    let (config, mut player, mut evaluator) = setup();
    let mut traffic = Vec::new();
    evaluator.evaluate(&mut player, &mut traffic, &config);

    player.vehicle.speed = config.max_speed;
    player.vehicle.position.x += config.lane_width;
    let position = player.position();
    traffic.push(traffic_at(position.x, position.y, &config));

    let evaluation = evaluator.evaluate(&mut player, &mut traffic, &config);

    assert_eq!(
        evaluation.infractions,
        vec![
            Infraction::Collision,
            Infraction::Speeding,
            Infraction::FrequentLaneChange
        ]
    );
    assert_eq!(player.score, 100.0 - 20.0 - 1.0 - 0.5);
}

#[test]
fn test_deduction_logged_even_at_zero_score() {
    let (_, mut player, _) = setup();
    player.score = 0.0;

    player.record(Infraction::Speeding);
    player.record(Infraction::FrequentLaneChange);

    assert_eq!(player.score, 0.0);
    assert_eq!(player.infractions.len(), 2);
    assert_eq!(player.anger_level, 1);
}

#[test]
fn test_anger_only_from_speeding_and_overtaking() {
    let (_, mut player, _) = setup();

    player.record(Infraction::Collision);
    player.record(Infraction::FrequentLaneChange);
    assert_eq!(player.anger_level, 0);

    player.record(Infraction::DangerousOvertaking);
    player.record(Infraction::Speeding);
    assert_eq!(player.anger_level, 2);
}

#[test]
fn test_anger_is_not_capped() {
    let (_, mut player, _) = setup();

    for _ in 0..15 {
        player.record(Infraction::Speeding);
    }

    assert_eq!(player.anger_level, 15);
    assert_eq!(player.score, 85.0);
}

#[test]
fn test_explicit_severity() {
    let (_, mut player, _) = setup();

    player.deduct(Infraction::Collision, 35.0);
    assert_eq!(player.score, 65.0);

    player.deduct(Infraction::Collision, 100.0);
    assert_eq!(player.score, 0.0);
    assert_eq!(player.infractions, vec![Infraction::Collision; 2]);
}
