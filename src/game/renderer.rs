//! Draws the game onto the terminal. Everything the game simulates
//! lives in the logical 800x600 space; this module projects those
//! rectangles onto whatever cell grid the terminal currently has.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::assets::SpriteSet;
use crate::core::lanes::{HEIGHT, LANE_COUNT, LANE_WIDTH, WIDTH};
use crate::core::rect::Rect as GameRect;
use crate::game::state::{GameState, CART_W, CART_Y, MARKER_LEN};

const ROAD_STYLE: Style = Style::new().bg(Color::DarkGray);
const OBSTACLE_COLORS: [Color; 5] = [
    Color::Red,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Green,
];

/// Maps a logical-space rectangle onto terminal cells, clipped to the
/// play area. Returns None when nothing of it is on screen.
fn project(rect: &GameRect, area: Rect) -> Option<Rect> {
    let x1 = rect.x.max(0);
    let y1 = rect.y.max(0);
    let x2 = (rect.x + rect.w).min(WIDTH);
    let y2 = (rect.y + rect.h).min(HEIGHT);
    if x1 >= x2 || y1 >= y2 {
        return None;
    }

    let cx1 = scale(x1, WIDTH, area.width);
    let cy1 = scale(y1, HEIGHT, area.height);
    let cx2 = scale(x2, WIDTH, area.width);
    let cy2 = scale(y2, HEIGHT, area.height);
    Some(Rect::new(
        area.x + cx1,
        area.y + cy1,
        (cx2 - cx1).max(1),
        (cy2 - cy1).max(1),
    ))
}

fn scale(v: i32, logical: i32, cells: u16) -> u16 {
    (v as i64 * cells as i64 / logical as i64) as u16
}

pub fn draw_playing(f: &mut Frame, state: &GameState, sprites: &SpriteSet) {
    let area = f.area();

    // road surface
    f.render_widget(Block::default().style(ROAD_STYLE), area);

    draw_lane_markers(f, state, area);

    for obstacle in state.obstacles.iter() {
        if let Some(cell) = project(&obstacle.rect, area) {
            let art = Paragraph::new(sprites.obstacles[obstacle.sprite].text())
                .style(Style::default().fg(OBSTACLE_COLORS[obstacle.sprite]));
            f.render_widget(art, cell);
        }
    }

    if state.autopilot {
        if let Some(target) = state.autopilot_target {
            draw_autopilot_path(f, state, target, area);
        }
    }

    if let Some(cell) = project(&state.cart, area) {
        let cart = Paragraph::new(sprites.cart.text())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(cart, cell);
    }

    draw_hud(f, state, area);
}

fn draw_lane_markers(f: &mut Frame, state: &GameState, area: Rect) {
    for divider in 1..LANE_COUNT {
        let x = divider as i32 * LANE_WIDTH;
        for &offset in &state.marker_offsets {
            let stripe = GameRect::new(x - 2, offset, 4, MARKER_LEN);
            if let Some(cell) = project(&stripe, area) {
                let bar = vec!["|"; cell.height as usize].join("\n");
                f.render_widget(
                    Paragraph::new(bar).style(Style::default().fg(Color::White)),
                    cell,
                );
            }
        }
    }
}

/// Dotted guide from the cart up toward the lane the autopilot picked.
fn draw_autopilot_path(f: &mut Frame, state: &GameState, target: usize, area: Rect) {
    let from_x = state.cart.x + CART_W / 2;
    let to_x = target as i32 * LANE_WIDTH + LANE_WIDTH / 2;
    const STEPS: i32 = 8;
    for i in 0..=STEPS {
        let x = from_x + (to_x - from_x) * i / STEPS;
        let y = CART_Y - 100 * i / STEPS;
        let dot = GameRect::new(x, y, 8, 8);
        if let Some(cell) = project(&dot, area) {
            f.render_widget(
                Paragraph::new("*").style(Style::default().fg(Color::Blue)),
                cell,
            );
        }
    }
}

fn draw_hud(f: &mut Frame, state: &GameState, area: Rect) {
    let score = Paragraph::new(format!("Score: {}", state.score))
        .style(Style::default().fg(Color::White));
    f.render_widget(score, Rect::new(area.x, area.y, area.width, 1));

    if area.height > 1 {
        let best = Paragraph::new(format!("High Score: {}", state.high_score))
            .style(Style::default().fg(Color::White));
        f.render_widget(best, Rect::new(area.x, area.y + 1, area.width, 1));
    }

    if state.autopilot {
        let badge = Paragraph::new("AUTOPILOT ON")
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
        f.render_widget(badge, Rect::new(area.x, area.y, area.width, 1));
    }
}

/// Title screen. Returns the Start button's cell rect so the engine can
/// hit-test mouse clicks against it.
pub fn draw_name_entry(f: &mut Frame, name: &str) -> Rect {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new("A U T O C A R T")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    let prompt = Paragraph::new("Enter your name:")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    f.render_widget(prompt, chunks[1]);

    let name_box = centered(34, chunks[2]);
    f.render_widget(
        Paragraph::new(name.to_string()).block(Block::default().borders(Borders::ALL)),
        name_box,
    );

    let start_button = centered(20, chunks[3]);
    f.render_widget(
        Paragraph::new("Start Game")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().bg(Color::Blue).fg(Color::White)),
        start_button,
    );

    let instructions =
        Paragraph::new("Type your name · Enter or click Start to begin · Esc to quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
    f.render_widget(instructions, chunks[4]);

    start_button
}

pub fn draw_game_over(f: &mut Frame, state: &GameState) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::new().bg(Color::Black)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let summary = Paragraph::new(format!(
        "{} - Game Over! Final Score: {}",
        state.player_name, state.score
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::White));
    f.render_widget(summary, chunks[1]);

    if state.score > state.high_score {
        let banner = Paragraph::new("🏁 New High Score!")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        f.render_widget(banner, chunks[2]);
    }
}

/// Horizontally centers a fixed-width strip inside `chunk`.
fn centered(width: u16, chunk: Rect) -> Rect {
    let width = width.min(chunk.width);
    let x = chunk.x + (chunk.width - width) / 2;
    Rect::new(x, chunk.y, width, chunk.height)
}
