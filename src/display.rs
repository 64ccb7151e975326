//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates the
//! 800x200 logical surface into terminal cells (10x10 units per cell).

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use dino_run::consts::*;
use dino_run::entities::{
    format_score, CactusVariant, GameState, Obstacle, ObstacleKind, PlayerSprite, Rect,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_FLOOR: Color = Color::DarkYellow;
const C_CLOUD: Color = Color::DarkGrey;
const C_CACTUS: Color = Color::Green;
const C_FLYER: Color = Color::Magenta;
const C_PLAYER: Color = Color::White;
const C_PLAYER_DEAD: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HIGH: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;
const C_RESET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if let Some(control) = state.reset_control() {
        draw_reset_control(out, &control)?;
    }
    for segment in &state.floor {
        draw_floor(out, &segment.rect())?;
    }
    for cloud in &state.clouds {
        fill_rect(out, &cloud.rect(), '░', C_CLOUD)?;
    }
    for obstacle in &state.obstacles {
        draw_obstacle(out, obstacle)?;
    }

    draw_hud(out, state)?;
    draw_player(out, state)?;
    draw_controls_hint(out, state)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, MIN_TERMINAL_ROWS.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Cell mapping ──────────────────────────────────────────────────────────────

/// Terminal cells covered by `rect`, clipped to the play field, as
/// `(first_col, last_col_exclusive, first_row, last_row_exclusive)`.
fn cell_span(rect: &Rect) -> Option<(u16, u16, u16, u16)> {
    let clip = |v: f32, max: u16| v.max(0.0).min(max as f32) as u16;

    let c0 = clip((rect.left() / CELL_WIDTH).floor(), FIELD_COLS);
    let c1 = clip((rect.right() / CELL_WIDTH).ceil(), FIELD_COLS);
    let r0 = clip((rect.top() / CELL_HEIGHT).floor(), FIELD_ROWS);
    let r1 = clip((rect.bottom() / CELL_HEIGHT).ceil(), FIELD_ROWS);

    (c0 < c1 && r0 < r1).then_some((c0, c1, r0 + FIELD_TOP_ROW, r1 + FIELD_TOP_ROW))
}

fn fill_rect<W: Write>(out: &mut W, rect: &Rect, glyph: char, color: Color) -> std::io::Result<()> {
    let Some((c0, c1, r0, r1)) = cell_span(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(glyph).take((c1 - c0) as usize).collect();

    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Scenery ───────────────────────────────────────────────────────────────────

fn draw_floor<W: Write>(out: &mut W, rect: &Rect) -> std::io::Result<()> {
    // Only the top edge row; the floor is 12 units thick.
    let edge = Rect::new(rect.x, rect.y, rect.w, CELL_HEIGHT.min(rect.h));
    fill_rect(out, &edge, '▔', C_FLOOR)
}

fn draw_obstacle<W: Write>(out: &mut W, obstacle: &Obstacle) -> std::io::Result<()> {
    let rect = obstacle.rect();
    match obstacle.kind {
        ObstacleKind::Cactus { variant, .. } => {
            let glyph = match variant {
                CactusVariant::Single => '║',
                CactusVariant::Double => '╫',
                CactusVariant::Cluster => '▓',
            };
            fill_rect(out, &rect, glyph, C_CACTUS)
        }
        ObstacleKind::Flyer { wing_frame, .. } => {
            let glyph = if wing_frame == 0 { '▲' } else { '▼' };
            fill_rect(out, &rect, glyph, C_FLYER)
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let player = &state.player;
    let rect = player.rect();
    let (glyph, color) = match player.sprite() {
        PlayerSprite::Static | PlayerSprite::Run1 => ('█', C_PLAYER),
        PlayerSprite::Run2 => ('▉', C_PLAYER),
        PlayerSprite::Jump => ('▀', C_PLAYER),
        PlayerSprite::Duck1 => ('▄', C_PLAYER),
        PlayerSprite::Duck2 => ('▃', C_PLAYER),
        PlayerSprite::Dead => ('X', C_PLAYER_DEAD),
    };
    fill_rect(out, &rect, glyph, color)
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // Score on the right, blinks during the milestone flash
    let score = format_score(state.display_score());
    let score_col = FIELD_COLS.saturating_sub(score.len() as u16);
    if state.score_visible() {
        out.queue(cursor::MoveTo(score_col, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(&score))?;
    }

    // High score, left of the score
    if state.high_score > 0 {
        let high = format!("HI {}", format_score(state.high_score));
        let col = score_col.saturating_sub(high.len() as u16 + 3);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
        out.queue(Print(&high))?;
    }

    if state.is_game_over() {
        draw_game_over(out)?;
    }

    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W) -> std::io::Result<()> {
    let banner = "G A M E   O V E R";
    let (cx, cy) = GAME_OVER_BANNER_CENTER;
    let col = ((cx / CELL_WIDTH) as u16).saturating_sub(banner.chars().count() as u16 / 2);
    let row = (cy / CELL_HEIGHT) as u16 + FIELD_TOP_ROW;

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    out.queue(Print(banner))?;
    Ok(())
}

fn draw_reset_control<W: Write>(out: &mut W, control: &Rect) -> std::io::Result<()> {
    let Some((c0, c1, r0, r1)) = cell_span(control) else {
        return Ok(());
    };
    let inner = (c1 - c0).saturating_sub(2) as usize;

    out.queue(style::SetForegroundColor(C_RESET))?;
    for row in r0..r1 {
        let line = if row == r0 {
            format!("┌{}┐", "─".repeat(inner))
        } else if row + 1 == r1 {
            format!("└{}┘", "─".repeat(inner))
        } else if row == (r0 + r1) / 2 {
            format!("│{:^inner$}│", "↻")
        } else {
            format!("│{}│", " ".repeat(inner))
        };
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let hint = if state.is_game_over() {
        "SPACE / click ↻ : Play Again   Q : Quit"
    } else {
        "SPACE / ↑ : Jump   ↓ : Duck   Q : Quit"
    };
    out.queue(cursor::MoveTo(1, FIELD_TOP_ROW + FIELD_ROWS))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
