//! Kinds of driving infractions and how much each one costs

use std::fmt;

/// Points lost for a collision
pub const COLLISION_PENALTY: f32 = 20.0;

/// Points lost per frame spent speeding
pub const SPEEDING_PENALTY: f32 = 1.0;

/// Points lost per lane change
pub const LANE_CHANGE_PENALTY: f32 = 0.5;

/// Points lost for a dangerous overtake
pub const OVERTAKING_PENALTY: f32 = 1.0;

/// A named category of rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Infraction {
    Collision,
    Speeding,
    FrequentLaneChange,
    /// Counts towards anger but no check currently produces it
    DangerousOvertaking,
}

impl Infraction {
    /// Default number of points this infraction costs
    pub fn severity(self) -> f32 {
        match self {
            Infraction::Collision => COLLISION_PENALTY,
            Infraction::Speeding => SPEEDING_PENALTY,
            Infraction::FrequentLaneChange => LANE_CHANGE_PENALTY,
            Infraction::DangerousOvertaking => OVERTAKING_PENALTY,
        }
    }

    /// Whether recording this infraction raises the anger level
    pub fn raises_anger(self) -> bool {
        matches!(
            self,
            Infraction::Speeding | Infraction::DangerousOvertaking
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Infraction::Collision => "collision",
            Infraction::Speeding => "speeding",
            Infraction::FrequentLaneChange => "frequent lane change",
            Infraction::DangerousOvertaking => "dangerous overtaking",
        }
    }
}

impl fmt::Display for Infraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
