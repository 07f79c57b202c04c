use std::process::Command;

fn run_headless(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_safe_drive"))
        .args(args)
        .env("RUST_LOG", "warn,safe_drive=info")
        .output()
        .expect("Failed to execute safe_drive")
}

/// Pull the number after `label` out of the logged summary
fn logged_value(stderr: &str, label: &str) -> f32 {
    let line = stderr
        .lines()
        .find(|line| line.contains(label))
        .unwrap_or_else(|| panic!("Could not find '{}' line in: {}", label, stderr));

    // Handle log format with timestamp
    let parts: Vec<&str> = line.split(label).collect();
    parts
        .get(1)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| panic!("Could not parse value from line: {}", line))
}

/// Test that a headless session runs to completion and logs its summary
#[test]
fn test_headless_session_runs() {
    let output = run_headless(&["--duration-ms", "5000", "--seed", "7"]);

    assert!(
        output.status.success(),
        "Session failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("=== DRIVE COMPLETE ==="),
        "Session did not complete properly. stderr: {}",
        stderr
    );
    for label in [
        "Final score:",
        "Anger level:",
        "Diagnosis:",
        "Traffic spawned:",
        "Collisions:",
    ] {
        assert!(stderr.contains(label), "Missing '{}' statistic", label);
    }

    let score = logged_value(&stderr, "Final score:");
    assert!((0.0..=100.0).contains(&score));

    // The results screen is printed to stdout
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DIAGNOSIS RESULTS"));
}

/// Test that traffic spawns during a headless session
#[test]
fn test_traffic_spawns_during_session() {
    let output = run_headless(&["--duration-ms", "5000", "--seed", "3", "--driver", "idle"]);
    assert!(output.status.success(), "Session failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let spawned = logged_value(&stderr, "Traffic spawned:");
    assert!(spawned >= 3.0, "Expected at least 3 spawns, got {}", spawned);
}

/// Test that a reckless driver is diagnosed as angry
#[test]
fn test_reckless_driver_summary() {
    let output = run_headless(&["--duration-ms", "5000", "--seed", "5", "--driver", "reckless"]);
    assert!(output.status.success(), "Session failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let anger = logged_value(&stderr, "Anger level:");
    assert!(anger > 0.0, "Reckless driving should raise anger");
    assert!(stderr.contains("speeding"));
}

/// Test that invalid options are rejected before a session starts
#[test]
fn test_invalid_options_rejected() {
    let output = run_headless(&["--spawn-delay-ms", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("spawn delay must be positive"), "stderr: {}", stderr);
    assert!(!stderr.contains("DRIVE COMPLETE"));
}
