/// Block rewards and short-lived visual effects.

use log::debug;
use rand::Rng;

use crate::entities::{Coin, Effects, GameState, Particle, ParticleColor};
use crate::grid::{Cell, TileKind, TILE};

pub const QUESTION_BLOCK_SCORE: u32 = 10;

const COIN_LAUNCH_SPEED: f32 = -6.0;
const COIN_GRAVITY: f32 = 0.3;
const COIN_LIFE: u32 = 30;
const PARTICLE_GRAVITY: f32 = 0.2;

/// Shape of one particle burst.
#[derive(Clone, Copy, Debug)]
pub struct Burst {
    pub count: usize,
    /// Horizontal velocity is uniform in `±spread / 2`.
    pub spread: f32,
    /// Upward speed is `lift_min + U[0, lift_range)`.
    pub lift_min: f32,
    pub lift_range: f32,
    pub life: u32,
    /// Extra lifetime drawn from `0..life_jitter`.
    pub life_jitter: u32,
    pub size: f32,
}

pub const BLOCK_BURST: Burst = Burst {
    count: 5,
    spread: 4.0,
    lift_min: 2.0,
    lift_range: 4.0,
    life: 20,
    life_jitter: 10,
    size: 3.0,
};

pub const SHELL_BURST: Burst = Burst {
    count: 4,
    spread: 4.0,
    lift_min: 1.0,
    lift_range: 3.0,
    life: 15,
    life_jitter: 0,
    size: 3.0,
};

pub const STOMP_BURST: Burst = Burst {
    count: 8,
    spread: 6.0,
    lift_min: 0.0,
    lift_range: 3.0,
    life: 20,
    life_jitter: 0,
    size: 4.0,
};

pub const SHELL_HIT_BURST: Burst = Burst {
    count: 6,
    spread: 6.0,
    lift_min: 0.0,
    lift_range: 4.0,
    life: 20,
    life_jitter: 0,
    size: 4.0,
};

pub fn spawn_burst(
    effects: &mut Effects,
    x: f32,
    y: f32,
    burst: Burst,
    color: ParticleColor,
    rng: &mut impl Rng,
) {
    for _ in 0..burst.count {
        let jitter = if burst.life_jitter > 0 {
            rng.gen_range(0..burst.life_jitter)
        } else {
            0
        };
        effects.particles.push(Particle {
            x,
            y,
            vx: (rng.gen::<f32>() - 0.5) * burst.spread,
            vy: -(rng.gen::<f32>() * burst.lift_range) - burst.lift_min,
            life: burst.life + jitter,
            color,
            size: burst.size,
        });
    }
}

/// Reward for bumping `cell` from below.
///
/// Pays out once per question block: marks it spent, adds the score, pops a
/// coin and a gold burst.  Any other tile, or a spent block, is a no-op.
/// Returns whether a reward was paid.
pub fn hit_from_below(state: &mut GameState, cell: Cell, rng: &mut impl Rng) -> bool {
    let (row, col) = cell;
    if state.grid.tile_at_cell(row as i32, col as i32) != TileKind::Question {
        return false;
    }
    if !state.spent_blocks.insert(cell) {
        return false;
    }

    state.player.score += QUESTION_BLOCK_SCORE;
    let tile_x = col as f32 * TILE;
    let tile_y = row as f32 * TILE;
    state.effects.coins.push(Coin {
        x: tile_x + 8.0,
        y: tile_y - 16.0,
        vy: COIN_LAUNCH_SPEED,
        life: COIN_LIFE,
    });
    spawn_burst(
        &mut state.effects,
        tile_x + TILE / 2.0,
        tile_y,
        BLOCK_BURST,
        ParticleColor::Gold,
        rng,
    );
    debug!("question block {:?} spent, score {}", cell, state.player.score);
    true
}

/// Advance every coin and particle one tick and drop the expired ones.
pub fn update_effects(effects: &mut Effects) {
    for coin in &mut effects.coins {
        coin.y += coin.vy;
        coin.vy += COIN_GRAVITY;
        coin.life = coin.life.saturating_sub(1);
    }
    effects.coins.retain(|c| c.life > 0);

    for p in &mut effects.particles {
        p.x += p.vx;
        p.y += p.vy;
        p.vy += PARTICLE_GRAVITY;
        p.life = p.life.saturating_sub(1);
    }
    effects.particles.retain(|p| p.life > 0);
}
