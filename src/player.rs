/// Player controller: input → velocity → resolved position → world effects.

use log::info;
use rand::Rng;

use crate::effects::hit_from_below;
use crate::entities::{Actor, Facing, GameState, GameStatus, Player};
use crate::grid::TileKind;
use crate::input::{InputSource, LogicalKey};
use crate::physics::{apply_gravity, fell_into_pit, resolve_x, resolve_y};

pub const PLAYER_WIDTH: f32 = 24.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const MOVE_SPEED: f32 = 4.0;
pub const JUMP_FORCE: f32 = -12.0;
pub const FLAG_SCORE: u32 = 500;

const WALK_FRAMES: u8 = 3;
const WALK_FRAME_TICKS: u8 = 6;
const AIRBORNE_FRAME: u8 = 2;

pub fn spawn_player(spawn: (f32, f32), lives: u32) -> Player {
    Player {
        body: Actor::new(spawn.0, spawn.1, PLAYER_WIDTH, PLAYER_HEIGHT),
        score: 0,
        lives,
        spawn,
    }
}

/// One controller tick.  Does nothing once the session has ended.
pub fn update_player(state: &mut GameState, input: &impl InputSource, rng: &mut impl Rng) {
    if state.status != GameStatus::Playing {
        return;
    }

    // Right wins when both directions are held.
    let mut dir = 0.0;
    if input.is_held(LogicalKey::Left) {
        dir = -1.0;
    }
    if input.is_held(LogicalKey::Right) {
        dir = 1.0;
    }

    let body = &mut state.player.body;
    body.vx = dir * MOVE_SPEED;
    if dir < 0.0 {
        body.facing = Facing::Left;
    } else if dir > 0.0 {
        body.facing = Facing::Right;
    }

    if input.is_held(LogicalKey::Jump) && body.grounded {
        body.vy = JUMP_FORCE;
        body.grounded = false;
    }

    apply_gravity(body);

    body.x = (body.x + body.vx).max(0.0);
    resolve_x(body, &state.grid);

    body.y += body.vy;
    let contact = resolve_y(body, &state.grid);
    if let Some(cell) = contact.ceiling {
        hit_from_below(state, cell, rng);
    }

    if fell_into_pit(&state.player.body, &state.grid) {
        info!("player fell into a pit");
        lose_life(state);
    }

    animate(&mut state.player.body);

    let body = &state.player.body;
    if state.status == GameStatus::Playing
        && state.grid.tile_at(body.center_x(), body.center_y()) == TileKind::Flag
    {
        state.status = GameStatus::Won;
        state.player.score += FLAG_SCORE;
        info!("flag reached, final score {}", state.player.score);
    }
}

/// Take a life.  With lives left the player goes back to the spawn point and
/// the camera rewinds; otherwise the session is over.  No-op unless playing.
pub fn lose_life(state: &mut GameState) {
    if state.status != GameStatus::Playing {
        return;
    }

    let player = &mut state.player;
    player.lives = player.lives.saturating_sub(1);
    if player.lives == 0 {
        state.status = GameStatus::GameOver;
        info!("game over, final score {}", player.score);
        return;
    }

    let (x, y) = player.spawn;
    player.body.x = x;
    player.body.y = y;
    player.body.vx = 0.0;
    player.body.vy = 0.0;
    state.camera_x = 0.0;
    info!("life lost, {} remaining", player.lives);
}

fn animate(body: &mut Actor) {
    if !body.grounded {
        body.anim.frame = AIRBORNE_FRAME;
    } else if body.vx.abs() > 0.5 {
        body.anim.timer += 1;
        if body.anim.timer > WALK_FRAME_TICKS {
            body.anim.frame = (body.anim.frame + 1) % WALK_FRAMES;
            body.anim.timer = 0;
        }
    } else {
        body.anim.frame = 0;
    }
}
