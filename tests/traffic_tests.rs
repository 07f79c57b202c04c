//! Traffic spawning and movement validation tests

use rand::rngs::StdRng;
use rand::SeedableRng;
use safe_drive::simulation::{
    advance_traffic, DriveConfig, Rgb, TrafficCar, TrafficGenerator, TRAFFIC_PALETTE,
};

#[test]
fn test_traffic_car_placement() {
    let config = DriveConfig::default();
    let car = TrafficCar::new(2, 4.0, -5, Rgb::GREEN, &config);

    assert_eq!(car.vehicle.position.x, 345.0);
    assert_eq!(car.vehicle.position.y, -70.0);
    assert_eq!(car.vehicle.speed, 4.0);
    assert_eq!(car.lane, 2);
}

#[test]
fn test_traffic_moves_straight_down() {
    let config = DriveConfig::default();
    let mut car = TrafficCar::new(1, 5.0, 0, Rgb::RED, &config);
    let x = car.vehicle.position.x;

    for _ in 0..10 {
        car.advance();
    }

    assert_eq!(car.vehicle.position.x, x);
    assert_eq!(car.vehicle.position.y, -70.0 + 50.0);
}

#[test]
fn test_offscreen_boundary() {
    let config = DriveConfig::default();
    let mut car = TrafficCar::new(0, 3.0, 0, Rgb::RED, &config);

    car.vehicle.position.y = config.screen_height;
    assert!(!car.is_offscreen(config.screen_height));

    car.vehicle.position.y = config.screen_height + 0.5;
    assert!(car.is_offscreen(config.screen_height));
}

#[test]
fn test_advance_traffic_culls_and_keeps_order() {
    let config = DriveConfig::default();
    let mut traffic = vec![
        TrafficCar::new(0, 3.0, 0, Rgb::RED, &config),
        TrafficCar::new(1, 3.0, 0, Rgb::GREEN, &config),
        TrafficCar::new(2, 3.0, 0, Rgb::YELLOW, &config),
    ];
    traffic[1].vehicle.position.y = 699.0;

    let removed = advance_traffic(&mut traffic, config.screen_height);

    assert_eq!(removed, 1);
    assert_eq!(traffic.len(), 2);
    assert_eq!(traffic[0].lane, 0);
    assert_eq!(traffic[1].lane, 2);
    assert_eq!(traffic[0].vehicle.position.y, -67.0);
}

#[test]
fn test_generator_waits_for_spawn_delay() {
    let config = DriveConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut generator = TrafficGenerator::new();

    assert!(generator.tick(1000.0, &config, &mut rng).is_none());
    assert!(generator.tick(499.0, &config, &mut rng).is_none());
    assert!(generator.tick(1.0, &config, &mut rng).is_some());
    assert_eq!(generator.spawn_timer, 0.0);

    assert!(generator.tick(16.0, &config, &mut rng).is_none());
}

#[test]
fn test_generator_spawns_one_car_per_tick() {
    let config = DriveConfig::default();
    let mut rng = StdRng::seed_from_u64(2);
    let mut generator = TrafficGenerator::new();

    // Long frames don't queue extra spawns, the remainder is dropped
    assert!(generator.tick(5000.0, &config, &mut rng).is_some());
    assert_eq!(generator.spawn_timer, 0.0);
    assert!(generator.tick(16.0, &config, &mut rng).is_none());
}

#[test]
fn test_spawned_traffic_within_ranges() {
    let config = DriveConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut lanes_seen = [false; 4];

    for _ in 0..500 {
        let car = TrafficGenerator::spawn(&config, &mut rng);
        assert!(car.lane < 4);
        lanes_seen[car.lane as usize] = true;

        assert!((3.0..=6.0).contains(&car.vehicle.speed));

        let lane_x = 150.0 + car.lane as f32 * 100.0;
        let jitter = car.vehicle.position.x - lane_x;
        assert!((-10.0..=10.0).contains(&jitter));
        assert_eq!(jitter.fract(), 0.0);

        assert_eq!(car.vehicle.position.y, -70.0);
        assert_eq!(car.vehicle.width, 40.0);
        assert_eq!(car.vehicle.height, 70.0);
        assert!(TRAFFIC_PALETTE.contains(&car.color));
    }

    assert!(lanes_seen.iter().all(|seen| *seen));
}
