/// All game entity types: pure data, plus the few derived accessors the
/// renderer reads.  Behaviour lives in `player`, `enemy`, `combat`, `effects`.

use std::collections::HashSet;

use crate::grid::{Cell, Grid};

// ── Shared actor shape ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Walk-cycle counter.  View-only: nothing in the simulation branches on it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Animation {
    pub frame: u8,
    pub timer: u8,
}

/// An axis-aligned body.  `(x, y)` is the top-left corner in world pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
    pub facing: Facing,
    pub anim: Animation,
}

impl Actor {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            vx: 0.0,
            vy: 0.0,
            grounded: false,
            facing: Facing::Right,
            anim: Animation::default(),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Actor,
    pub score: u32,
    pub lives: u32,
    /// Fixed respawn point (top-left of the body).
    pub spawn: (f32, f32),
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Goomba,
    Koopa,
}

/// Per-enemy AI state.  Only koopas ever enter `Shelled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    Walking,
    /// Retracted; `remaining` ticks until the koopa re-emerges.
    Shelled { remaining: u32 },
    /// Terminal.  The enemy stays in storage but is never simulated again.
    Dead,
}

/// Static spawn descriptor from the level asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemySpawn {
    pub col: usize,
    pub kind: EnemyKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub body: Actor,
    pub state: EnemyState,
    /// Grounded ticks left before the next hop.
    pub jump_countdown: i32,
    pub spawn: EnemySpawn,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.state != EnemyState::Dead
    }

    pub fn is_shelled(&self) -> bool {
        matches!(self.state, EnemyState::Shelled { .. })
    }

    /// True while a shell is close to re-emerging and should flicker.
    pub fn shell_blinking(&self) -> bool {
        match self.state {
            EnemyState::Shelled { remaining } => remaining < 60 && remaining % 10 < 5,
            _ => false,
        }
    }
}

// ── Ephemeral effects ─────────────────────────────────────────────────────────

/// A coin popping out of a question block.
#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    /// Remaining ticks before removal.
    pub life: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
    Gold,
    Green,
    Brown,
}

impl From<EnemyKind> for ParticleColor {
    fn from(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Goomba => ParticleColor::Brown,
            EnemyKind::Koopa => ParticleColor::Green,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u32,
    pub color: ParticleColor,
    pub size: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Effects {
    pub coins: Vec<Coin>,
    pub particles: Vec<Particle>,
}

impl Effects {
    pub fn clear(&mut self) {
        self.coins.clear();
        self.particles.clear();
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Won,
}

/// The entire session.  Owned by the simulation clock; the renderer only
/// ever borrows it immutably.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Static level layout.  Never touched by `restart`.
    pub grid: Grid,
    /// Question blocks that already paid out, keyed by `(row, col)`.
    pub spent_blocks: HashSet<Cell>,
    pub player: Player,
    /// Every enemy from the spawn list, dead or alive, in spawn order.
    pub enemies: Vec<Enemy>,
    pub effects: Effects,
    /// Left edge of the visible window, in world pixels.
    pub camera_x: f32,
    /// Width of the visible window, in world pixels.  Set by the host.
    pub view_width: f32,
    pub status: GameStatus,
    pub frame: u64,
    pub initial_lives: u32,
}

impl GameState {
    pub fn is_spent(&self, cell: Cell) -> bool {
        self.spent_blocks.contains(&cell)
    }
}
