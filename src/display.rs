/// Terminal renderer.  Reads the session, queues crossterm commands, never
/// mutates anything.
///
/// Scale: one terminal column covers `COL_PX` world pixels, one row covers a
/// whole tile.  Row 0 is the HUD, rows 1..=15 the playfield, the row after
/// that the controls hint.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use tile_dash::entities::{
    Actor, Enemy, EnemyKind, EnemyState, Facing, GameState, GameStatus, ParticleColor,
};
use tile_dash::grid::{cell_index, TileKind, TILE};

/// World pixels per terminal column.
pub const COL_PX: f32 = 16.0;
const PLAYFIELD_TOP: u16 = 1;
/// More lives than this show as a count.
const MAX_HEARTS: u32 = 5;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_GROUND: Color = Color::DarkRed;
const C_BRICK: Color = Color::DarkYellow;
const C_QUESTION: Color = Color::Yellow;
const C_SPENT: Color = Color::DarkGrey;
const C_PIPE: Color = Color::Green;
const C_POLE: Color = Color::Grey;
const C_PENNANT: Color = Color::Red;
const C_PLAYER: Color = Color::Red;
const C_GOOMBA: Color = Color::DarkYellow;
const C_KOOPA: Color = Color::Green;
const C_SHELL_BLINK: Color = Color::Green;
const C_SHELL: Color = Color::DarkGreen;
const C_COIN: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// World width visible in a terminal `cols` wide.
pub fn view_width_for(cols: u16) -> f32 {
    cols as f32 * COL_PX
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state, cols)?;
    draw_tiles(out, state, cols)?;

    for coin in &state.effects.coins {
        if let Some((x, y)) = to_screen(state, coin.x, coin.y, cols) {
            out.queue(cursor::MoveTo(x, y))?;
            out.queue(style::SetForegroundColor(C_COIN))?;
            out.queue(Print("$"))?;
        }
    }
    for p in &state.effects.particles {
        if let Some((x, y)) = to_screen(state, p.x, p.y, cols) {
            out.queue(cursor::MoveTo(x, y))?;
            out.queue(style::SetForegroundColor(particle_color(p.color)))?;
            out.queue(Print("·"))?;
        }
    }

    for enemy in state.enemies.iter().filter(|e| e.is_alive()) {
        draw_enemy(out, state, enemy, cols)?;
    }
    draw_player(out, state, cols)?;
    draw_controls_hint(out, state)?;

    match state.status {
        GameStatus::Playing => {}
        GameStatus::GameOver => draw_banner(out, state, cols, "GAME  OVER", Color::Red)?,
        GameStatus::Won => draw_banner(out, state, cols, " YOU  WIN!", Color::Yellow)?,
    }

    // Park the cursor under the hint row.
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, hint_row(state) + 1))?;
    out.flush()?;
    Ok(())
}

fn hint_row(state: &GameState) -> u16 {
    PLAYFIELD_TOP + state.grid.rows() as u16
}

/// World point → terminal cell, or `None` when off screen.
fn to_screen(state: &GameState, x: f32, y: f32, cols: u16) -> Option<(u16, u16)> {
    let col = ((x - state.camera_x) / COL_PX).floor();
    let row = cell_index(y);
    if col < 0.0 || col >= cols as f32 || row < 0 || row >= state.grid.rows() as i32 {
        return None;
    }
    Some((col as u16, PLAYFIELD_TOP + row as u16))
}

fn particle_color(color: ParticleColor) -> Color {
    match color {
        ParticleColor::Gold => C_COIN,
        ParticleColor::Green => C_KOOPA,
        ParticleColor::Brown => C_GOOMBA,
    }
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.player.score)))?;

    let lives = state.player.lives;
    let lives_text = if lives <= MAX_HEARTS {
        format!("Lives: {}", "♥".repeat(lives as usize))
    } else {
        format!("Lives: ♥×{}", lives)
    };
    let x = cols.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;
    Ok(())
}

// ── Tiles ─────────────────────────────────────────────────────────────────────

fn draw_tiles<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    let grid = &state.grid;
    for screen_col in 0..cols {
        let world_x = state.camera_x + (screen_col as f32 + 0.5) * COL_PX;
        let col = cell_index(world_x);
        for row in 0..grid.rows() as i32 {
            let tile = grid.tile_at_cell(row, col);
            let (glyph, color) = match tile {
                TileKind::Air => continue,
                TileKind::Ground => ("█", C_GROUND),
                TileKind::Brick => ("▓", C_BRICK),
                TileKind::Question if state.is_spent((row as usize, col as usize)) => {
                    ("■", C_SPENT)
                }
                TileKind::Question => ("?", C_QUESTION),
                TileKind::PipeTopLeft | TileKind::PipeTopRight => ("▀", C_PIPE),
                TileKind::PipeBottomLeft | TileKind::PipeBottomRight => ("█", C_PIPE),
                TileKind::Flag => {
                    let top = grid.tile_at_cell(row - 1, col) != TileKind::Flag;
                    let left_half = world_x < (col as f32 + 0.5) * TILE;
                    match (top, left_half) {
                        (true, true) => ("◀", C_PENNANT),
                        (false, true) => continue,
                        (_, false) => ("│", C_POLE),
                    }
                }
            };
            out.queue(cursor::MoveTo(screen_col, PLAYFIELD_TOP + row as u16))?;
            out.queue(style::SetForegroundColor(color))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── Actors ────────────────────────────────────────────────────────────────────

/// Print `sprite` across the columns `body` covers, on its centre row.
fn draw_body<W: Write>(
    out: &mut W,
    state: &GameState,
    body: &Actor,
    sprite: &[&str],
    color: Color,
    cols: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    for (i, glyph) in sprite.iter().enumerate() {
        let x = body.x + i as f32 * COL_PX;
        if let Some((sx, sy)) = to_screen(state, x, body.center_y(), cols) {
            out.queue(cursor::MoveTo(sx, sy))?;
            out.queue(Print(*glyph))?;
        }
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    let body = &state.player.body;
    let sprite: [&str; 2] = match (body.facing, body.anim.frame) {
        (Facing::Right, 1) => ["@", "›"],
        (Facing::Right, _) => ["@", ">"],
        (Facing::Left, 1) => ["‹", "@"],
        (Facing::Left, _) => ["<", "@"],
    };
    draw_body(out, state, body, &sprite, C_PLAYER, cols)
}

fn draw_enemy<W: Write>(
    out: &mut W,
    state: &GameState,
    enemy: &Enemy,
    cols: u16,
) -> std::io::Result<()> {
    let feet = enemy.body.anim.frame == 0;
    match (enemy.kind, enemy.state) {
        (_, EnemyState::Dead) => Ok(()),
        (EnemyKind::Goomba, _) => {
            let sprite = if feet { ["m", "m"] } else { ["n", "n"] };
            draw_body(out, state, &enemy.body, &sprite, C_GOOMBA, cols)
        }
        (EnemyKind::Koopa, EnemyState::Shelled { .. }) => {
            let color = if enemy.shell_blinking() { C_SHELL_BLINK } else { C_SHELL };
            draw_body(out, state, &enemy.body, &["(", ")"], color, cols)
        }
        (EnemyKind::Koopa, EnemyState::Walking) => {
            let sprite = match enemy.body.facing {
                Facing::Left => ["<", "K"],
                Facing::Right => ["K", ">"],
            };
            draw_body(out, state, &enemy.body, &sprite, C_KOOPA, cols)
        }
    }
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, hint_row(state)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   ↑ W SPACE : Jump   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── End-of-session overlay ────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    title: &str,
    color: Color,
) -> std::io::Result<()> {
    let title_line = format!("║    {}    ║", title);
    let score_line = format!("Final Score: {}", state.player.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", color),
        (&title_line, color),
        ("╚══════════════════╝", color),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = cols / 2;
    let start_row = (PLAYFIELD_TOP + state.grid.rows() as u16 / 2)
        .saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
