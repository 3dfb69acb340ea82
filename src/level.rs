/// The single hand-authored level: tile layout, player spawn, enemy roster.

use crate::entities::{EnemyKind, EnemySpawn};
use crate::grid::{Grid, TileKind, TILE};

pub const LEVEL_COLS: usize = 200;
pub const LEVEL_ROWS: usize = 15;

/// Player start, top-left of the body.
pub const PLAYER_SPAWN: (f32, f32) = (3.0 * TILE, 11.0 * TILE);

const GROUND_ROWS: [usize; 2] = [13, 14];

/// Inclusive column ranges with no ground underneath.
const GAPS: [(usize, usize); 4] = [(15, 17), (38, 40), (68, 70), (120, 122)];

/// `(row, first col, last col)` brick runs.
const BRICK_RUNS: [(usize, usize, usize); 16] = [
    (9, 8, 11),
    (9, 22, 26),
    (7, 30, 33),
    (9, 45, 47),
    (6, 50, 54),
    (9, 60, 65),
    (7, 75, 78),
    (9, 85, 88),
    (5, 90, 92),
    (9, 100, 103),
    (7, 108, 112),
    (9, 130, 134),
    (6, 140, 143),
    (9, 150, 152),
    (8, 160, 163),
    (9, 170, 175),
];

/// `(row, col)` of every coin block.  Each sits inside a brick run.
const QUESTION_BLOCKS: [(usize, usize); 16] = [
    (9, 10),
    (9, 24),
    (7, 32),
    (9, 46),
    (6, 52),
    (9, 63),
    (7, 76),
    (9, 87),
    (5, 91),
    (9, 102),
    (7, 110),
    (9, 132),
    (6, 142),
    (9, 151),
    (8, 162),
    (9, 173),
];

/// Left column of each two-wide pipe.
const PIPE_COLS: [usize; 7] = [20, 42, 72, 95, 115, 145, 168];

const STAIRCASE_COL: usize = 180;
const STAIRCASE_STEPS: usize = 8;

const FLAG_COL: usize = 192;
const FLAG_TOP_ROW: usize = 4;

pub const ENEMY_SPAWNS: [EnemySpawn; 18] = [
    goomba(12),
    goomba(18),
    koopa(28),
    goomba(35),
    goomba(48),
    koopa(55),
    goomba(65),
    koopa(78),
    goomba(88),
    koopa(98),
    goomba(105),
    koopa(113),
    goomba(125),
    koopa(135),
    goomba(148),
    koopa(155),
    goomba(165),
    koopa(175),
];

const fn goomba(col: usize) -> EnemySpawn {
    EnemySpawn { col, kind: EnemyKind::Goomba }
}

const fn koopa(col: usize) -> EnemySpawn {
    EnemySpawn { col, kind: EnemyKind::Koopa }
}

/// Lay out the level.  Later passes overwrite earlier ones.
pub fn build_grid() -> Grid {
    let mut grid = Grid::new(LEVEL_COLS, LEVEL_ROWS);

    for row in GROUND_ROWS {
        for col in 0..LEVEL_COLS {
            grid.set(row, col, TileKind::Ground);
        }
    }
    for (start, end) in GAPS {
        for col in start..=end {
            for row in GROUND_ROWS {
                grid.set(row, col, TileKind::Air);
            }
        }
    }

    for (row, start, end) in BRICK_RUNS {
        for col in start..=end {
            grid.set(row, col, TileKind::Brick);
        }
    }
    for (row, col) in QUESTION_BLOCKS {
        grid.set(row, col, TileKind::Question);
    }

    for col in PIPE_COLS {
        grid.set(11, col, TileKind::PipeTopLeft);
        grid.set(11, col + 1, TileKind::PipeTopRight);
        grid.set(12, col, TileKind::PipeBottomLeft);
        grid.set(12, col + 1, TileKind::PipeBottomRight);
    }

    // Step i is i+1 bricks tall, resting on the ground at row 12.
    for i in 0..STAIRCASE_STEPS {
        for j in 0..=i {
            grid.set(12 - j, STAIRCASE_COL + i, TileKind::Brick);
        }
    }

    for row in FLAG_TOP_ROW..13 {
        grid.set(row, FLAG_COL, TileKind::Flag);
    }

    grid
}
