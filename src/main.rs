use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use safe_drive::simulation::{
    draw_session, DriveConfig, DriverProfile, Session, SessionSignal, SessionState,
    TextCanvas, TARGET_FPS,
};

#[derive(Parser)]
#[command(name = "safe_drive")]
#[command(about = "Safe driving diagnosis with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Maximum number of frames to run in headless mode
    #[arg(long, default_value = "3600")]
    frames: u32,

    /// Time per frame in milliseconds (defaults to the 60 fps frame time)
    #[arg(long)]
    delta_ms: Option<f32>,

    /// Seed for reproducible traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Scripted driver used in headless mode
    #[arg(long, value_enum, default_value_t = DriverProfile::Cautious)]
    driver: DriverProfile,

    /// Session length in milliseconds
    #[arg(long, default_value = "60000")]
    duration_ms: f32,

    /// Delay between traffic spawns in milliseconds
    #[arg(long, default_value = "1500")]
    spawn_delay_ms: f32,

    /// Print the road every N frames (0 disables)
    #[arg(long, default_value = "0")]
    print_every: u32,
}

impl Cli {
    fn drive_config(&self) -> DriveConfig {
        DriveConfig {
            game_duration_ms: self.duration_ms,
            spawn_delay_ms: self.spawn_delay_ms,
            ..DriveConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.drive_config();
    config.validate().context("Invalid command line options")?;

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(config, cli.seed);
        }
        #[cfg(not(feature = "ui"))]
        {
            anyhow::bail!("UI feature is not enabled. Rebuild with --features ui");
        }
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn,safe_drive=info"),
        )
        .init();
        run_headless(&cli, config)?;
    }
    Ok(())
}

/// Run a session in headless mode (no graphics) with a scripted driver
fn run_headless(cli: &Cli, config: DriveConfig) -> Result<()> {
    let delta_ms = cli.delta_ms.unwrap_or_else(|| config.frame_ms());
    info!(
        "Running headless session: driver {:?}, up to {} frames of {:.2}ms ({} fps nominal)",
        cli.driver, cli.frames, delta_ms, TARGET_FPS
    );

    let mut session = Session::try_new(config, cli.seed)?;
    let mut canvas = TextCanvas::for_config(session.config());
    let mut stdout = std::io::stdout().lock();

    if session.handle_signal(SessionSignal::Start).is_break() {
        return Ok(());
    }

    let mut frame = 0;
    while frame < cli.frames && session.state() == SessionState::Playing {
        frame += 1;
        let input = cli.driver.input(&session.view());
        session.update(delta_ms, &input);

        if cli.print_every > 0 && frame % cli.print_every == 0 {
            draw_session(&session.view(), &mut canvas);
            canvas.write_to(&mut stdout)?;
        }
    }

    // Ran out of frames before the clock did
    session.finish();

    draw_session(&session.view(), &mut canvas);
    canvas.write_to(&mut stdout)?;

    log_summary(&session);
    Ok(())
}

fn log_summary(session: &Session) {
    let report = session.report();
    let stats = &session.stats;
    info!("=== DRIVE COMPLETE ===");
    info!("Elapsed time: {:.2}s", session.elapsed_ms / 1000.0);
    info!("Frames played: {}", stats.frames);
    info!("Final score: {}", report.score);
    info!("Anger level: {}", report.anger_level);
    info!("Diagnosis: {}", report.diagnosis);
    info!("Infractions recorded: {}", report.infraction_count);
    if !report.infractions.is_empty() {
        info!("Infraction kinds: {}", report.infraction_summary());
    }
    info!("Traffic spawned: {}", stats.traffic_spawned);
    info!("Traffic passed: {}", stats.traffic_passed);
    info!("Collisions: {}", stats.collisions);
}

#[cfg(feature = "ui")]
fn run_with_ui(config: DriveConfig, seed: Option<u64>) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use safe_drive::ui::{SafeDriveUIPlugin, SessionResource};

    println!("Starting Safe Driving Diagnosis...");
    println!();
    println!("Controls:");
    println!("  Up/W        - Accelerate");
    println!("  Down/S      - Brake");
    println!("  Left/A      - Steer left");
    println!("  Right/D     - Steer right");
    println!("  Space       - Start");
    println!("  R           - Restart from the results screen");
    println!("  ESC         - Exit");
    println!();

    let session = match seed {
        Some(seed) => Session::with_seed(config.clone(), seed),
        None => Session::new(config.clone()),
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,safe_drive=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Safe Driving Diagnosis".into(),
                        resolution: (config.screen_width as u32, config.screen_height as u32)
                            .into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(Time::<Fixed>::from_hz(TARGET_FPS as f64))
        .insert_resource(SessionResource(session))
        .add_plugins(SafeDriveUIPlugin)
        .run();
}
