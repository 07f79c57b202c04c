//! Read-only presentation of a session
//!
//! Renderers never touch `Session` directly. They get a `SessionView` and
//! draw it onto a `Canvas`, the rendering context passed in by the caller.
//! `TextCanvas` is the terminal implementation used in headless mode.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};

use super::config::DriveConfig;
use super::player::PlayerCar;
use super::report::{speed_kmh, DrivingReport, Tone, ANGER_DISPLAY_MAX};
use super::session::{Session, SessionState};
use super::traffic::TrafficCar;
use super::types::{Position, Rect, Rgb};
use super::vehicle::Vehicle;

/// What a filled rectangle represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Background,
    Road,
    CenterLine,
    LaneLine,
    Window,
    Player(Rgb),
    Traffic(Rgb),
}

impl Paint {
    pub fn color(self) -> Rgb {
        match self {
            Paint::Background => Rgb::BLACK,
            Paint::Road => Rgb::ROAD,
            Paint::CenterLine => Rgb::YELLOW,
            Paint::LaneLine => Rgb::WHITE,
            Paint::Window => Rgb::DARK_GRAY,
            Paint::Player(color) | Paint::Traffic(color) => color,
        }
    }
}

/// Horizontal anchoring of a text line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `x` is the left edge of the text
    Left,
    /// Text is centred on the screen, `x` is ignored
    Center,
}

/// A rendering context
pub trait Canvas {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, paint: Paint);
    fn text(&mut self, position: Position, align: Align, text: &str, color: Rgb);
}

pub fn tone_color(tone: Tone) -> Rgb {
    match tone {
        Tone::Good => Rgb::GREEN,
        Tone::Warning => Rgb::YELLOW,
        Tone::Bad => Rgb::RED,
    }
}

/// Borrowed snapshot of everything a renderer may read
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub state: SessionState,
    pub config: &'a DriveConfig,
    pub player: &'a PlayerCar,
    pub traffic: &'a [TrafficCar],
    pub elapsed_ms: f32,
    pub remaining_secs: u32,
    pub road_offset: f32,
}

impl<'a> SessionView<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            state: session.state(),
            config: session.config(),
            player: &session.player,
            traffic: &session.traffic,
            elapsed_ms: session.elapsed_ms,
            remaining_secs: session.remaining_secs(),
            road_offset: session.road_offset,
        }
    }

    pub fn speed_kmh(&self) -> u32 {
        speed_kmh(self.player.speed())
    }

    /// Whether the HUD should flash the speeding warning
    pub fn speeding_warning(&self) -> bool {
        self.player.is_speeding(self.config)
    }

    pub fn report(&self) -> DrivingReport {
        DrivingReport::from_player(self.player)
    }
}

impl Session {
    pub fn view(&self) -> SessionView<'_> {
        SessionView::new(self)
    }
}

/// Draw the current screen of a session
pub fn draw_session(view: &SessionView<'_>, canvas: &mut impl Canvas) {
    canvas.clear();
    match view.state {
        SessionState::Start => draw_start_screen(canvas),
        SessionState::Playing => {
            draw_road(view, canvas);
            for car in view.traffic {
                draw_vehicle(&car.vehicle, Paint::Traffic(car.color), canvas);
            }
            draw_vehicle(&view.player.vehicle, Paint::Player(view.player.color), canvas);
            draw_hud(view, canvas);
        }
        SessionState::Results => draw_results_screen(view, canvas),
    }
}

fn draw_road(view: &SessionView<'_>, canvas: &mut impl Canvas) {
    let config = view.config;
    canvas.fill_rect(
        Rect::new(config.road_left(), 0.0, config.road_width(), config.screen_height),
        Paint::Road,
    );
    for mark in center_line_marks(config, view.road_offset) {
        canvas.fill_rect(mark, Paint::CenterLine);
    }
    for dash in lane_dividers(config, view.road_offset) {
        canvas.fill_rect(dash, Paint::LaneLine);
    }
}

/// Number of centre line marks drawn per frame
pub const CENTER_LINE_MARKS: usize = 20;

/// Number of dashes drawn per lane divider
pub const DASHES_PER_DIVIDER: usize = 30;

/// Scrolling centre line marks for a given road offset
pub fn center_line_marks(config: &DriveConfig, road_offset: f32) -> Vec<Rect> {
    let wrap = config.screen_height + 200.0;
    (0..CENTER_LINE_MARKS)
        .map(|i| {
            let y = (i as f32 * 100.0 + road_offset).rem_euclid(wrap) - 100.0;
            Rect::new(config.screen_width / 2.0 - 5.0, y, 10.0, 50.0)
        })
        .collect()
}

/// Dashed dividers between the traffic lanes, grouped divider by divider
pub fn lane_dividers(config: &DriveConfig, road_offset: f32) -> Vec<Rect> {
    let wrap = config.screen_height + 40.0;
    (1..config.traffic_lanes)
        .flat_map(|lane| {
            let x = config.road_left() + lane as f32 * config.lane_width;
            (0..DASHES_PER_DIVIDER).map(move |j| {
                let y = (j as f32 * 40.0 + road_offset).rem_euclid(wrap) - 20.0;
                Rect::new(x, y, 4.0, 20.0)
            })
        })
        .collect()
}

/// Window strip drawn on top of a car body
pub fn window_rect(vehicle: &Vehicle) -> Rect {
    let Position { x, y } = vehicle.position;
    Rect::new(x + 5.0, y + 5.0, vehicle.width - 10.0, 15.0)
}

fn draw_vehicle(vehicle: &Vehicle, paint: Paint, canvas: &mut impl Canvas) {
    canvas.fill_rect(vehicle.rect(), paint);
    canvas.fill_rect(window_rect(vehicle), Paint::Window);
}

fn draw_hud(view: &SessionView<'_>, canvas: &mut impl Canvas) {
    let player = view.player;
    let lines = [
        format!("Speed: {} km/h", view.speed_kmh()),
        format!("Score: {}", player.score),
        format!("Anger: {}/{}", player.anger_level, ANGER_DISPLAY_MAX),
    ];
    for (i, line) in lines.iter().enumerate() {
        canvas.text(
            Position::new(10.0, 50.0 + i as f32 * 40.0),
            Align::Left,
            line,
            Rgb::WHITE,
        );
    }

    canvas.text(
        Position::new(view.config.screen_width - 140.0, 50.0),
        Align::Left,
        &format!("Time: {}s", view.remaining_secs),
        Rgb::WHITE,
    );

    if view.speeding_warning() {
        canvas.text(
            Position::new(0.0, 100.0),
            Align::Center,
            "WARNING: SPEEDING!",
            Rgb::RED,
        );
    }
}

fn draw_start_screen(canvas: &mut impl Canvas) {
    canvas.text(
        Position::new(0.0, 150.0),
        Align::Center,
        "SAFE DRIVING DIAGNOSIS",
        Rgb::GREEN,
    );
    let instructions = [
        "Use the arrow keys or WASD to drive",
        "Avoid collisions and obey the rules of the road",
        "Your driving behavior will be evaluated",
        "Press SPACE to start",
    ];
    for (i, line) in instructions.iter().enumerate() {
        canvas.text(
            Position::new(0.0, 300.0 + i as f32 * 50.0),
            Align::Center,
            line,
            Rgb::WHITE,
        );
    }
}

fn draw_results_screen(view: &SessionView<'_>, canvas: &mut impl Canvas) {
    let report = view.report();

    canvas.text(
        Position::new(0.0, 100.0),
        Align::Center,
        "DIAGNOSIS RESULTS",
        Rgb::GREEN,
    );
    canvas.text(
        Position::new(0.0, 200.0),
        Align::Center,
        &format!("Safe driving score: {}/100", report.score),
        tone_color(report.score_tone()),
    );
    canvas.text(
        Position::new(0.0, 250.0),
        Align::Center,
        &format!("Anger level: {}/{}", report.anger_level, ANGER_DISPLAY_MAX),
        tone_color(report.anger_tone()),
    );
    canvas.text(
        Position::new(0.0, 320.0),
        Align::Center,
        report.diagnosis.headline(),
        Rgb::WHITE,
    );
    canvas.text(
        Position::new(0.0, 370.0),
        Align::Center,
        report.diagnosis.advice(),
        Rgb::YELLOW,
    );
    if !report.infractions.is_empty() {
        canvas.text(
            Position::new(0.0, 450.0),
            Align::Center,
            &format!("Infractions: {}", report.infraction_summary()),
            Rgb::RED,
        );
    }
    canvas.text(
        Position::new(0.0, 550.0),
        Align::Center,
        "Press R to play again",
        Rgb::WHITE,
    );
}

/// Character-grid canvas for terminals
///
/// Each cell covers `cell_width` x `cell_height` world units. Colours are
/// dropped; each paint gets its own glyph.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    columns: usize,
    rows: usize,
    cell_width: f32,
    cell_height: f32,
    grid: Vec<Vec<char>>,
}

impl TextCanvas {
    pub fn new(screen_width: f32, screen_height: f32, cell_width: f32, cell_height: f32) -> Self {
        let columns = (screen_width / cell_width).ceil().max(1.0) as usize;
        let rows = (screen_height / cell_height).ceil().max(1.0) as usize;
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
            grid: vec![vec![' '; columns]; rows],
        }
    }

    /// Canvas sized for the session's screen at 10x25 units per cell
    pub fn for_config(config: &DriveConfig) -> Self {
        Self::new(config.screen_width, config.screen_height, 10.0, 25.0)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.grid.iter().map(|row| row.iter().collect())
    }

    /// Glyph at a cell, if it is on the canvas
    pub fn glyph(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row).and_then(|cells| cells.get(column)).copied()
    }

    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line.trim_end()).context("Failed to write canvas")?;
        }
        Ok(())
    }

    fn glyph_for(paint: Paint) -> char {
        match paint {
            Paint::Background => ' ',
            Paint::Road => '.',
            Paint::CenterLine => '|',
            Paint::LaneLine => ':',
            Paint::Window => '=',
            Paint::Player(_) => 'P',
            Paint::Traffic(_) => 'T',
        }
    }

    /// Cell span covering `[start, start + length)` along one axis
    fn span(start: f32, length: f32, cell: f32, limit: usize) -> std::ops::Range<usize> {
        let first = (start / cell).floor().max(0.0) as usize;
        let last = ((start + length) / cell).ceil().max(0.0) as usize;
        first.min(limit)..last.min(limit)
    }
}

impl Canvas for TextCanvas {
    fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        let glyph = Self::glyph_for(paint);
        let rows = Self::span(rect.y, rect.height, self.cell_height, self.rows);
        let columns = Self::span(rect.x, rect.width, self.cell_width, self.columns);
        for row in rows {
            for column in columns.clone() {
                self.grid[row][column] = glyph;
            }
        }
    }

    fn text(&mut self, position: Position, align: Align, text: &str, _color: Rgb) {
        if position.y < 0.0 {
            return;
        }
        let row = (position.y / self.cell_height) as usize;
        let Some(cells) = self.grid.get_mut(row) else {
            return;
        };
        let length = text.chars().count();
        let start = match align {
            Align::Left => (position.x.max(0.0) / self.cell_width) as usize,
            Align::Center => self.columns.saturating_sub(length) / 2,
        };
        for (cell, ch) in cells.iter_mut().skip(start).zip(text.chars()) {
            *cell = ch;
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
