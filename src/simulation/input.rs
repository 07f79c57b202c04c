//! Input seen by the simulation each frame
//!
//! The simulation never polls a keyboard. Whoever owns the frame loop turns
//! its device state into these values.

/// Keys held down during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveInput {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl DriveInput {
    /// No keys held
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn accelerating() -> Self {
        Self {
            accelerate: true,
            ..Self::default()
        }
    }

    pub fn braking() -> Self {
        Self {
            brake: true,
            ..Self::default()
        }
    }

    pub fn with_left(mut self) -> Self {
        self.steer_left = true;
        self
    }

    pub fn with_right(mut self) -> Self {
        self.steer_right = true;
        self
    }
}

/// Edge-triggered signals, delivered once per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// Leave the start screen
    Start,
    /// Rebuild the session from the results screen
    Reset,
    /// Stop the frame loop
    Quit,
}
