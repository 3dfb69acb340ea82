/// Axis-separated AABB-vs-grid collision, shared by the player and enemies.
///
/// Callers integrate one axis, resolve it, then do the other.  Each resolve is
/// a single sweep over the cells the body overlaps; there is no sub-stepping,
/// which holds up because every speed stays below one tile per tick.

use std::ops::RangeInclusive;

use crate::entities::Actor;
use crate::grid::{cell_index, Cell, Grid, TILE};

pub const GRAVITY: f32 = 0.6;
pub const MAX_FALL_SPEED: f32 = 12.0;

/// What the vertical resolve ran into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerticalContact {
    /// Came to rest on a solid tile.
    pub landed: bool,
    /// Cell that stopped upward motion, if any.
    pub ceiling: Option<Cell>,
}

pub fn apply_gravity(body: &mut Actor) {
    body.vy = (body.vy + GRAVITY).min(MAX_FALL_SPEED);
}

/// Cells covered by the half-open span `[lo, hi)`.
fn cell_span(lo: f32, hi: f32) -> RangeInclusive<i32> {
    cell_index(lo)..=((hi / TILE).ceil() as i32 - 1)
}

/// Push the body out of every solid cell it overlaps, on the side opposite to
/// its horizontal velocity.  Later cells in the sweep win over earlier ones.
///
/// Returns whether any solid cell was hit.
pub fn resolve_x(body: &mut Actor, grid: &Grid) -> bool {
    let rows = cell_span(body.y, body.bottom());
    let cols = cell_span(body.x, body.right());
    let mut blocked = false;

    for row in rows {
        for col in cols.clone() {
            if !grid.tile_at_cell(row, col).is_solid() {
                continue;
            }
            blocked = true;
            if body.vx > 0.0 {
                body.x = col as f32 * TILE - body.w;
            } else if body.vx < 0.0 {
                body.x = (col + 1) as f32 * TILE;
            }
        }
    }
    blocked
}

/// Vertical counterpart of [`resolve_x`].  Clears `grounded` first; the first
/// solid cell met zeroes `vy`, so only one floor or ceiling is reported.
pub fn resolve_y(body: &mut Actor, grid: &Grid) -> VerticalContact {
    let rows = cell_span(body.y, body.bottom());
    let cols = cell_span(body.x, body.right());
    let mut contact = VerticalContact::default();
    body.grounded = false;

    for row in rows {
        for col in cols.clone() {
            if !grid.tile_at_cell(row, col).is_solid() {
                continue;
            }
            if body.vy > 0.0 {
                body.y = row as f32 * TILE - body.h;
                body.vy = 0.0;
                body.grounded = true;
                contact.landed = true;
            } else if body.vy < 0.0 {
                body.y = (row + 1) as f32 * TILE;
                body.vy = 0.0;
                // Solid tiles only exist inside the grid, so both are >= 0.
                contact.ceiling = Some((row as usize, col as usize));
            }
        }
    }
    contact
}

/// Integrate and resolve both axes, horizontal first.
pub fn step_body(body: &mut Actor, grid: &Grid) -> (bool, VerticalContact) {
    body.x += body.vx;
    let blocked = resolve_x(body, grid);
    body.y += body.vy;
    let contact = resolve_y(body, grid);
    (blocked, contact)
}

/// Below the grid's bottom edge.  Reported separately from collision.
pub fn fell_into_pit(body: &Actor, grid: &Grid) -> bool {
    body.y > grid.height_px()
}

pub fn overlaps(a: &Actor, b: &Actor) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
