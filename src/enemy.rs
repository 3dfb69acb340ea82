/// Enemy AI: per-enemy state machine over Walking / Shelled / Dead.
///
/// Each live enemy inside the activation window gets, in order: physics,
/// hop cadence, shell countdown, wall and ledge probes, player contact,
/// shell projectile sweep, and finally the pit check.

use log::debug;
use rand::Rng;

use crate::combat::{resolve_player_contact, shell_sweep, Contact};
use crate::entities::{
    Actor, Enemy, EnemyKind, EnemySpawn, EnemyState, Facing, GameState, GameStatus,
};
use crate::grid::{Grid, TILE};
use crate::physics::{apply_gravity, fell_into_pit, step_body};
use crate::player::lose_life;

pub const SHELL_HEIGHT: f32 = 24.0;
pub const SHELL_DURATION: u32 = 180;

/// Enemies further than this past the visible window are frozen.
const ACTIVATION_MARGIN: f32 = 200.0;
const EDGE_PROBE_AHEAD: f32 = 2.0;
const EDGE_PROBE_BELOW: f32 = 4.0;
const WALK_FRAME_TICKS: u8 = 10;
const INITIAL_JUMP_MAX: i32 = 120;

// ── Archetype tables ─────────────────────────────────────────────────────────

pub fn walk_speed(kind: EnemyKind) -> f32 {
    match kind {
        EnemyKind::Goomba => 1.2,
        EnemyKind::Koopa => 1.8,
    }
}

/// Standing `(width, height)`.
pub fn body_size(kind: EnemyKind) -> (f32, f32) {
    match kind {
        EnemyKind::Goomba => (28.0, 28.0),
        EnemyKind::Koopa => (26.0, 36.0),
    }
}

fn spawn_row(kind: EnemyKind) -> f32 {
    match kind {
        EnemyKind::Goomba => 12.0,
        EnemyKind::Koopa => 11.0,
    }
}

/// Koopas hop higher: `-11 - U[0,2)` against `-9 - U[0,3)`.
fn jump_impulse(kind: EnemyKind, rng: &mut impl Rng) -> f32 {
    match kind {
        EnemyKind::Goomba => -9.0 - rng.gen::<f32>() * 3.0,
        EnemyKind::Koopa => -11.0 - rng.gen::<f32>() * 2.0,
    }
}

/// Ticks until the next hop.  Koopas hop more often.
fn jump_reseed(kind: EnemyKind, rng: &mut impl Rng) -> i32 {
    match kind {
        EnemyKind::Goomba => 60 + rng.gen_range(0..80),
        EnemyKind::Koopa => 40 + rng.gen_range(0..60),
    }
}

// ── Construction / reset ─────────────────────────────────────────────────────

pub fn spawn_enemy(spawn: EnemySpawn, rng: &mut impl Rng) -> Enemy {
    let mut enemy = Enemy {
        kind: spawn.kind,
        body: Actor::new(0.0, 0.0, 0.0, 0.0),
        state: EnemyState::Walking,
        jump_countdown: 0,
        spawn,
    };
    reset_enemy(&mut enemy, rng);
    enemy
}

/// Put an enemy back at its spawn pose, in place.
pub fn reset_enemy(enemy: &mut Enemy, rng: &mut impl Rng) {
    let kind = enemy.spawn.kind;
    let (w, h) = body_size(kind);
    let mut body = Actor::new(
        enemy.spawn.col as f32 * TILE,
        spawn_row(kind) * TILE,
        w,
        h,
    );
    body.vx = -walk_speed(kind);
    body.facing = Facing::Left;

    enemy.kind = kind;
    enemy.body = body;
    enemy.state = EnemyState::Walking;
    enemy.jump_countdown = rng.gen_range(0..INITIAL_JUMP_MAX);
}

// ── Shell transitions ────────────────────────────────────────────────────────

/// Walking koopa → shell.  Shrinks the box and drops it so the bottom stays
/// on the same floor.
pub fn enter_shell(enemy: &mut Enemy) {
    let drop = enemy.body.h - SHELL_HEIGHT;
    enemy.body.h = SHELL_HEIGHT;
    enemy.body.y += drop;
    enemy.body.vx = 0.0;
    enemy.state = EnemyState::Shelled {
        remaining: SHELL_DURATION,
    };
}

/// Shell → walking koopa, heading away from the player.
fn leave_shell(enemy: &mut Enemy, player_x: f32) {
    let (_, full_height) = body_size(enemy.kind);
    enemy.body.y -= full_height - enemy.body.h;
    enemy.body.h = full_height;
    let speed = walk_speed(enemy.kind);
    enemy.body.vx = if player_x > enemy.body.x { -speed } else { speed };
    enemy.state = EnemyState::Walking;
    debug!("koopa left its shell at x={:.0}", enemy.body.x);
}

// ── Per-enemy step (no combat) ───────────────────────────────────────────────

/// Physics plus AI for one live enemy.  Contact with the player and other
/// enemies is handled by the caller.
pub fn step_enemy(enemy: &mut Enemy, grid: &Grid, player_x: f32, rng: &mut impl Rng) {
    enemy.body.anim.timer += 1;
    if enemy.body.anim.timer > WALK_FRAME_TICKS {
        enemy.body.anim.frame = (enemy.body.anim.frame + 1) % 2;
        enemy.body.anim.timer = 0;
    }

    apply_gravity(&mut enemy.body);
    step_body(&mut enemy.body, grid);

    if enemy.body.grounded && enemy.state == EnemyState::Walking {
        enemy.jump_countdown -= 1;
        if enemy.jump_countdown <= 0 {
            enemy.body.vy = jump_impulse(enemy.kind, rng);
            enemy.body.grounded = false;
            enemy.jump_countdown = jump_reseed(enemy.kind, rng);
        }
    }

    if let EnemyState::Shelled { remaining } = enemy.state {
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            leave_shell(enemy, player_x);
        } else {
            enemy.state = EnemyState::Shelled { remaining };
        }
    }

    let body = &mut enemy.body;

    // Wall: the column just past the leading edge, at mid-height.
    let probe_x = if body.vx > 0.0 { body.right() } else { body.x - 1.0 };
    if grid.tile_at(probe_x, body.center_y()).is_solid() {
        body.vx = -body.vx;
    }

    // Ledge: nothing solid just ahead of and below the feet.
    if body.grounded {
        let edge_x = if body.vx > 0.0 {
            body.right() + EDGE_PROBE_AHEAD
        } else {
            body.x - EDGE_PROBE_AHEAD
        };
        if !grid.tile_at(edge_x, body.bottom() + EDGE_PROBE_BELOW).is_solid() {
            body.vx = -body.vx;
        }
    }

    if body.vx > 0.0 {
        body.facing = Facing::Right;
    } else if body.vx < 0.0 {
        body.facing = Facing::Left;
    }
}

/// Whether the enemy is close enough to the camera to be simulated.
pub fn in_activation_window(enemy: &Enemy, camera_x: f32, view_width: f32) -> bool {
    (enemy.body.x - camera_x).abs() <= view_width + ACTIVATION_MARGIN
}

// ── All enemies, in storage order ────────────────────────────────────────────

pub fn update_enemies(state: &mut GameState, rng: &mut impl Rng) {
    if state.status != GameStatus::Playing {
        return;
    }

    for i in 0..state.enemies.len() {
        if !state.enemies[i].is_alive()
            || !in_activation_window(&state.enemies[i], state.camera_x, state.view_width)
        {
            continue;
        }

        step_enemy(&mut state.enemies[i], &state.grid, state.player.body.x, rng);

        let contact = resolve_player_contact(
            &mut state.player,
            &mut state.enemies[i],
            &mut state.effects,
            rng,
        );
        if contact == Some(Contact::Hurt) {
            lose_life(state);
        }

        shell_sweep(
            &mut state.enemies,
            i,
            &mut state.player.score,
            &mut state.effects,
            rng,
        );

        let enemy = &mut state.enemies[i];
        if enemy.is_alive() && fell_into_pit(&enemy.body, &state.grid) {
            enemy.state = EnemyState::Dead;
            debug!("{:?} fell into a pit", enemy.kind);
        }
    }
}
