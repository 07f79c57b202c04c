//! Core types for the driving simulation
//!
//! These are standalone types that don't depend on Bevy.

/// Screen width in world units
pub const SCREEN_WIDTH: f32 = 1000.0;

/// Screen height in world units
pub const SCREEN_HEIGHT: f32 = 700.0;

/// Inset of the drivable road from each side of the screen
pub const ROAD_MARGIN: f32 = 150.0;

/// Width of one lane bucket
pub const LANE_WIDTH: f32 = 100.0;

/// Number of lanes traffic can spawn into
pub const TRAFFIC_LANES: u8 = 4;

/// Width of every vehicle
pub const CAR_WIDTH: f32 = 40.0;

/// Height (length) of every vehicle
pub const CAR_HEIGHT: f32 = 70.0;

/// Index of a lane bucket, derived from an x position.
///
/// Signed because the bucket is computed with a floor division and the
/// player is not bound to the traffic lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneIndex(pub i32);

impl LaneIndex {
    /// Bucket an x position into a lane, `floor((x - road_left) / lane_width)`
    pub fn from_x(x: f32, road_left: f32, lane_width: f32) -> Self {
        Self(((x - road_left) / lane_width).floor() as i32)
    }
}

/// A 2D screen-space position (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the two rectangles share an area greater than zero.
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// An RGB colour. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const DARK_GRAY: Rgb = Rgb::new(50, 50, 50);
    pub const ROAD: Rgb = Rgb::new(40, 40, 40);
    pub const PLAYER: Rgb = Rgb::new(0, 120, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const RUST: Rgb = Rgb::new(200, 100, 50);
}

/// Colours traffic cars are painted with
pub const TRAFFIC_PALETTE: [Rgb; 4] = [
    Rgb::RED,
    Rgb::GREEN,
    Rgb::YELLOW,
    Rgb::RUST,
];
