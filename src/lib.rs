//! Safe Driving Diagnosis Library
//!
//! A short arcade driving session that scores "safe driving" behavior. The
//! simulation runs on its own or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
