/// Simulation clock: session construction, the per-tick pipeline, restart.
///
/// Every function mutates the session in place.  All randomness comes
/// through the injected `rng`, so a seeded RNG makes a run reproducible.

use std::collections::HashSet;

use log::info;
use rand::Rng;

use crate::effects::update_effects;
use crate::enemy::{reset_enemy, spawn_enemy, update_enemies};
use crate::entities::{Effects, EnemySpawn, GameState, GameStatus};
use crate::grid::Grid;
use crate::input::{InputSource, LogicalKey};
use crate::level::{build_grid, ENEMY_SPAWNS, PLAYER_SPAWN};
use crate::player::{spawn_player, update_player};

/// Fraction of the remaining distance the camera covers each tick.
const CAMERA_EASE: f32 = 0.1;

// ── Constructors ─────────────────────────────────────────────────────────────

/// A session on the built-in level.
pub fn init_state(lives: u32, view_width: f32, rng: &mut impl Rng) -> GameState {
    new_session(build_grid(), PLAYER_SPAWN, &ENEMY_SPAWNS, lives, view_width, rng)
}

/// A session on an arbitrary grid and roster.
pub fn new_session(
    grid: Grid,
    player_spawn: (f32, f32),
    spawns: &[EnemySpawn],
    lives: u32,
    view_width: f32,
    rng: &mut impl Rng,
) -> GameState {
    GameState {
        grid,
        spent_blocks: HashSet::new(),
        player: spawn_player(player_spawn, lives),
        enemies: spawns.iter().map(|&s| spawn_enemy(s, rng)).collect(),
        effects: Effects::default(),
        camera_x: 0.0,
        view_width,
        status: GameStatus::Playing,
        frame: 0,
        initial_lives: lives,
    }
}

// ── Session control ──────────────────────────────────────────────────────────

/// Reset every piece of mutable state to its spawn value.  The grid and the
/// enemy collection itself are kept; safe from any status.
pub fn restart(state: &mut GameState, rng: &mut impl Rng) {
    let spawn = state.player.spawn;
    state.player = spawn_player(spawn, state.initial_lives);
    for enemy in &mut state.enemies {
        reset_enemy(enemy, rng);
    }
    state.spent_blocks.clear();
    state.effects.clear();
    state.camera_x = 0.0;
    state.status = GameStatus::Playing;
    info!("session restarted");
}

// ── Per-tick pipeline ────────────────────────────────────────────────────────

/// Advance the session by one tick: player, then enemies in storage order,
/// then effects and camera.  Once the session has ended only a held
/// `Restart` does anything to the actors.
pub fn tick(state: &mut GameState, input: &impl InputSource, rng: &mut impl Rng) {
    state.frame += 1;

    if state.status == GameStatus::Playing {
        update_player(state, input, rng);
        update_enemies(state, rng);
    } else if input.is_held(LogicalKey::Restart) {
        restart(state, rng);
    }

    update_effects(&mut state.effects);
    update_camera(state);
}

/// Ease toward a point a third of the view left of the player, clamped to
/// the level.
pub fn update_camera(state: &mut GameState) {
    let target = state.player.body.x - state.view_width / 3.0;
    let max_x = (state.grid.width_px() - state.view_width).max(0.0);
    state.camera_x += (target - state.camera_x) * CAMERA_EASE;
    state.camera_x = state.camera_x.clamp(0.0, max_x);
}
