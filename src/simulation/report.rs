//! Results of a driving session
//!
//! Turns the player's final score and anger level into the diagnosis shown
//! on the results screen.

use std::fmt;

use super::infraction::Infraction;
use super::player::PlayerCar;

/// Minimum score for an excellent diagnosis
pub const EXCELLENT_SCORE: f32 = 80.0;

/// Maximum anger for an excellent diagnosis
pub const EXCELLENT_MAX_ANGER: u32 = 3;

/// Minimum score for an acceptable diagnosis
pub const ACCEPTABLE_SCORE: f32 = 60.0;

/// Anger at or below which the anger gauge turns from warning to bad
pub const WARNING_MAX_ANGER: u32 = 6;

/// Top of the anger scale shown to the player. Anger itself is not capped.
pub const ANGER_DISPLAY_MAX: u32 = 10;

/// Qualitative verdict on the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Excellent,
    Acceptable,
    NeedsImprovement,
}

impl Diagnosis {
    pub fn from_scores(score: f32, anger_level: u32) -> Self {
        if score >= EXCELLENT_SCORE && anger_level <= EXCELLENT_MAX_ANGER {
            Diagnosis::Excellent
        } else if score >= ACCEPTABLE_SCORE {
            Diagnosis::Acceptable
        } else {
            Diagnosis::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::Excellent => "excellent",
            Diagnosis::Acceptable => "acceptable",
            Diagnosis::NeedsImprovement => "needs improvement",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Diagnosis::Excellent => "Excellent safe driver!",
            Diagnosis::Acceptable => "Mostly safe driver",
            Diagnosis::NeedsImprovement => "Driving behavior needs improvement",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Diagnosis::Excellent => "Keep up the good driving habits.",
            Diagnosis::Acceptable => "Pay attention to improving some driving behaviors.",
            Diagnosis::NeedsImprovement => {
                "You may have road rage tendencies, please consider seeking professional help."
            }
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour band a gauge is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warning,
    Bad,
}

impl Tone {
    pub fn for_score(score: f32) -> Self {
        if score >= EXCELLENT_SCORE {
            Tone::Good
        } else if score >= ACCEPTABLE_SCORE {
            Tone::Warning
        } else {
            Tone::Bad
        }
    }

    pub fn for_anger(anger_level: u32) -> Self {
        if anger_level <= EXCELLENT_MAX_ANGER {
            Tone::Good
        } else if anger_level <= WARNING_MAX_ANGER {
            Tone::Warning
        } else {
            Tone::Bad
        }
    }
}

/// Speedometer reading in km/h for a speed in units per frame
pub fn speed_kmh(speed: f32) -> u32 {
    (speed * 20.0) as u32
}

/// Everything the results screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct DrivingReport {
    pub score: f32,
    pub anger_level: u32,
    pub diagnosis: Diagnosis,
    /// Distinct infraction kinds, in order of first occurrence
    pub infractions: Vec<Infraction>,
    /// Total number of infractions recorded, including repeats
    pub infraction_count: usize,
}

impl DrivingReport {
    pub fn from_player(player: &PlayerCar) -> Self {
        Self {
            score: player.score,
            anger_level: player.anger_level,
            diagnosis: Diagnosis::from_scores(player.score, player.anger_level),
            infractions: player.distinct_infractions(),
            infraction_count: player.infractions.len(),
        }
    }

    pub fn score_tone(&self) -> Tone {
        Tone::for_score(self.score)
    }

    pub fn anger_tone(&self) -> Tone {
        Tone::for_anger(self.anger_level)
    }

    /// Comma separated infraction labels, empty for a clean session
    pub fn infraction_summary(&self) -> String {
        self.infractions
            .iter()
            .map(|infraction| infraction.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DrivingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}/100 | Anger: {}/{} | Diagnosis: {}",
            self.score, self.anger_level, ANGER_DISPLAY_MAX, self.diagnosis
        )?;
        if !self.infractions.is_empty() {
            write!(f, " | Infractions: {}", self.infraction_summary())?;
        }
        Ok(())
    }
}
