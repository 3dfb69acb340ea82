/// Player × enemy contact rules and moving-shell hits.
///
/// Priority on contact: stomp, then shell kick, then damage.  A downward hit
/// is never read as damage, and a resting shell can always be kicked.

use log::debug;
use rand::Rng;

use crate::effects::{spawn_burst, SHELL_BURST, SHELL_HIT_BURST, STOMP_BURST};
use crate::entities::{Effects, Enemy, EnemyKind, EnemyState, ParticleColor, Player};
use crate::enemy::enter_shell;
use crate::physics::overlaps;
use crate::player::JUMP_FORCE;

/// Max depth of the player's feet into the enemy's top for a stomp.
pub const STOMP_THRESHOLD: f32 = 16.0;
pub const STOMP_BOUNCE: f32 = JUMP_FORCE * 0.6;
pub const KICK_SPEED: f32 = 6.0;
/// A shell faster than this kills whatever it runs into.
pub const PROJECTILE_SPEED: f32 = 2.0;

pub const SHELL_SCORE: u32 = 15;
pub const KICK_SCORE: u32 = 5;
pub const SHELL_HIT_SCORE: u32 = 20;

pub fn stomp_score(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Goomba => 20,
        EnemyKind::Koopa => 40,
    }
}

/// Outcome of a player touching a live enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Stomped a walking koopa into its shell.
    Shelled,
    /// Stomped and killed.
    Stomped,
    /// Kicked a resting shell.
    Kicked,
    /// Side contact or a moving shell: the player loses a life.
    Hurt,
}

/// Apply the contact rules if the player overlaps `enemy`.
///
/// Scores are credited here; the life loss for `Contact::Hurt` is left to the
/// caller, which owns the session.
pub fn resolve_player_contact(
    player: &mut Player,
    enemy: &mut Enemy,
    effects: &mut Effects,
    rng: &mut impl Rng,
) -> Option<Contact> {
    if !enemy.is_alive() || !overlaps(&player.body, &enemy.body) {
        return None;
    }

    let penetration = player.body.bottom() - enemy.body.y;
    if player.body.vy > 0.0 && penetration < STOMP_THRESHOLD {
        player.body.vy = STOMP_BOUNCE;

        if enemy.kind == EnemyKind::Koopa && enemy.state == EnemyState::Walking {
            enter_shell(enemy);
            player.score += SHELL_SCORE;
            spawn_burst(
                effects,
                enemy.body.center_x(),
                enemy.body.y,
                SHELL_BURST,
                ParticleColor::Green,
                rng,
            );
            debug!("koopa shelled at x={:.0}", enemy.body.x);
            return Some(Contact::Shelled);
        }

        enemy.state = EnemyState::Dead;
        player.score += stomp_score(enemy.kind);
        spawn_burst(
            effects,
            enemy.body.center_x(),
            enemy.body.bottom(),
            STOMP_BURST,
            enemy.kind.into(),
            rng,
        );
        debug!("{:?} stomped at x={:.0}", enemy.kind, enemy.body.x);
        return Some(Contact::Stomped);
    }

    if enemy.is_shelled() && enemy.body.vx == 0.0 {
        enemy.body.vx = if player.body.x < enemy.body.x {
            KICK_SPEED
        } else {
            -KICK_SPEED
        };
        player.score += KICK_SCORE;
        debug!("shell kicked, vx={}", enemy.body.vx);
        return Some(Contact::Kicked);
    }

    Some(Contact::Hurt)
}

/// Let the enemy at `shooter` act as a projectile if it is a fast shell:
/// every other live enemy it overlaps dies.  The shell itself is untouched.
///
/// Returns the number of enemies killed.
pub fn shell_sweep(
    enemies: &mut [Enemy],
    shooter: usize,
    score: &mut u32,
    effects: &mut Effects,
    rng: &mut impl Rng,
) -> usize {
    let Some(shell) = enemies.get(shooter) else {
        return 0;
    };
    if !shell.is_shelled() || shell.body.vx.abs() <= PROJECTILE_SPEED {
        return 0;
    }
    let hitbox = shell.body.clone();

    let mut kills = 0;
    for (j, other) in enemies.iter_mut().enumerate() {
        if j == shooter || !other.is_alive() || !overlaps(&hitbox, &other.body) {
            continue;
        }
        other.state = EnemyState::Dead;
        *score += SHELL_HIT_SCORE;
        spawn_burst(
            effects,
            other.body.center_x(),
            other.body.center_y(),
            SHELL_HIT_BURST,
            other.kind.into(),
            rng,
        );
        kills += 1;
        debug!("{:?} knocked out by a shell", other.kind);
    }
    kills
}
