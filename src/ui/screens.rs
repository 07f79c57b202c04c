//! HUD, start screen and results screen

use bevy::prelude::*;

use super::components::{
    to_color, HudPanel, HudText, ResultsScreen, ResultsText, SessionResource, StartScreen,
};
use crate::simulation::{tone_color, Rgb, SessionState, ANGER_DISPLAY_MAX};

/// System to spawn the HUD and the two overlay screens
pub fn setup_screens(mut commands: Commands) {
    // HUD panel at top-left of screen
    commands
        .spawn((
            HudPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(40.0),
                left: Val::Px(10.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            for line in [HudText::Speed, HudText::Score, HudText::Anger] {
                parent.spawn(hud_line(line, 24.0, Color::WHITE));
            }
        });

    commands.spawn((
        HudPanel,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(40.0),
            right: Val::Px(20.0),
            ..default()
        },
        hud_line(HudText::TimeLeft, 24.0, Color::WHITE),
    ));

    commands.spawn((
        HudPanel,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(90.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        children![hud_line(HudText::Warning, 32.0, to_color(Rgb::RED))],
    ));

    commands
        .spawn((StartScreen, overlay_node()))
        .with_children(|parent| {
            parent.spawn(label("SAFE DRIVING DIAGNOSIS", 56.0, to_color(Rgb::GREEN)));
            for line in [
                "Use the arrow keys or WASD to drive",
                "Avoid collisions and obey the rules of the road",
                "Your driving behavior will be evaluated",
                "Press SPACE to start",
            ] {
                parent.spawn(label(line, 28.0, Color::WHITE));
            }
        });

    commands
        .spawn((ResultsScreen, overlay_node()))
        .with_children(|parent| {
            parent.spawn(label("DIAGNOSIS RESULTS", 56.0, to_color(Rgb::GREEN)));
            for line in [
                ResultsText::Score,
                ResultsText::Anger,
                ResultsText::Diagnosis,
                ResultsText::Advice,
                ResultsText::Infractions,
            ] {
                parent.spawn((label("", 28.0, Color::WHITE), line));
            }
            parent.spawn(label("Press R to play again", 28.0, Color::WHITE));
        });
}

fn overlay_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        row_gap: Val::Px(20.0),
        display: Display::None,
        ..default()
    }
}

fn label(text: &str, font_size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    )
}

fn hud_line(line: HudText, font_size: f32, color: Color) -> impl Bundle {
    (label("", font_size, color), line)
}

/// Show the overlay that matches the session state
pub fn sync_screen_visibility(
    session: Res<SessionResource>,
    mut start: Query<&mut Node, (With<StartScreen>, Without<ResultsScreen>, Without<HudPanel>)>,
    mut results: Query<&mut Node, (With<ResultsScreen>, Without<StartScreen>, Without<HudPanel>)>,
    mut hud: Query<&mut Node, (With<HudPanel>, Without<StartScreen>, Without<ResultsScreen>)>,
) {
    let state = session.0.state();
    let display = |shown: bool| if shown { Display::Flex } else { Display::None };

    for mut node in start.iter_mut() {
        node.display = display(state == SessionState::Start);
    }
    for mut node in results.iter_mut() {
        node.display = display(state == SessionState::Results);
    }
    for mut node in hud.iter_mut() {
        node.display = display(state == SessionState::Playing);
    }
}

/// System to update the HUD while playing
pub fn update_hud_text(
    session: Res<SessionResource>,
    mut text_query: Query<(&HudText, &mut Text)>,
) {
    let session = &session.0;
    if !session.is_playing() {
        return;
    }
    let view = session.view();

    for (line, mut text) in text_query.iter_mut() {
        **text = match line {
            HudText::Speed => format!("Speed: {} km/h", view.speed_kmh()),
            HudText::Score => format!("Score: {}", view.player.score),
            HudText::Anger => format!("Anger: {}/{}", view.player.anger_level, ANGER_DISPLAY_MAX),
            HudText::TimeLeft => format!("Time: {}s", view.remaining_secs),
            HudText::Warning if view.speeding_warning() => "WARNING: SPEEDING!".to_string(),
            HudText::Warning => String::new(),
        };
    }
}

/// System to fill in the results screen
pub fn update_results_text(
    session: Res<SessionResource>,
    mut text_query: Query<(&ResultsText, &mut Text, &mut TextColor)>,
) {
    let session = &session.0;
    if session.state() != SessionState::Results {
        return;
    }
    let report = session.report();

    for (line, mut text, mut color) in text_query.iter_mut() {
        let (content, rgb) = match line {
            ResultsText::Score => (
                format!("Safe driving score: {}/100", report.score),
                tone_color(report.score_tone()),
            ),
            ResultsText::Anger => (
                format!("Anger level: {}/{}", report.anger_level, ANGER_DISPLAY_MAX),
                tone_color(report.anger_tone()),
            ),
            ResultsText::Diagnosis => (report.diagnosis.headline().to_string(), Rgb::WHITE),
            ResultsText::Advice => (report.diagnosis.advice().to_string(), Rgb::YELLOW),
            ResultsText::Infractions if report.infractions.is_empty() => {
                (String::new(), Rgb::RED)
            }
            ResultsText::Infractions => (
                format!("Infractions: {}", report.infraction_summary()),
                Rgb::RED,
            ),
        };
        **text = content;
        *color = TextColor(to_color(rgb));
    }
}
