//! Spatial state shared by the player and traffic

use super::types::{Position, Rect};

/// Position, size and forward speed of a car
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Top-left corner in screen space
    pub position: Position,
    pub width: f32,
    pub height: f32,
    /// Forward speed in units per frame
    pub speed: f32,
}

impl Vehicle {
    pub fn new(position: Position, width: f32, height: f32, speed: f32) -> Self {
        Self {
            position,
            width,
            height,
            speed,
        }
    }

    /// Bounding box used for collision checks
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn overlaps(&self, other: &Vehicle) -> bool {
        self.rect().overlaps(&other.rect())
    }
}
