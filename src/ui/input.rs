//! Input handling systems

use bevy::prelude::*;

use super::components::{HeldInput, SessionResource};
use crate::simulation::{DriveInput, SessionSignal};

/// Snapshot the driving keys for the next simulation tick
pub fn capture_drive_input(keyboard: Res<ButtonInput<KeyCode>>, mut held: ResMut<HeldInput>) {
    held.0 = DriveInput {
        accelerate: keyboard.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]),
        brake: keyboard.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]),
        steer_left: keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]),
        steer_right: keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]),
    };
}

/// Forward start, reset and quit key presses to the session
pub fn handle_signals(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<SessionResource>,
    mut exit: MessageWriter<AppExit>,
) {
    let mut signals = Vec::new();
    if keyboard.just_pressed(KeyCode::Space) {
        signals.push(SessionSignal::Start);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        signals.push(SessionSignal::Reset);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        signals.push(SessionSignal::Quit);
    }

    for signal in signals {
        if session.0.handle_signal(signal).is_break() {
            exit.write(AppExit::Success);
            return;
        }
    }
}
