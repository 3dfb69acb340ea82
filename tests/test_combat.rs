use tile_dash::combat::*;
use tile_dash::enemy::{body_size, SHELL_DURATION, SHELL_HEIGHT};
use tile_dash::entities::*;
use tile_dash::player::spawn_player;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_enemy(kind: EnemyKind, x: f32, floor: f32) -> Enemy {
    let (w, h) = body_size(kind);
    let mut body = Actor::new(x, floor - h, w, h);
    body.vx = -1.2;
    body.grounded = true;
    Enemy {
        kind,
        body,
        state: EnemyState::Walking,
        jump_countdown: 100,
        spawn: EnemySpawn { col: 0, kind },
    }
}

fn shelled(x: f32, floor: f32) -> Enemy {
    let mut e = make_enemy(EnemyKind::Koopa, x, floor);
    e.body.h = SHELL_HEIGHT;
    e.body.y = floor - SHELL_HEIGHT;
    e.body.vx = 0.0;
    e.state = EnemyState::Shelled { remaining: SHELL_DURATION };
    e
}

/// Player whose feet sit `depth` px into the top of `enemy`, falling at `vy`.
fn player_above(enemy: &Enemy, depth: f32, vy: f32) -> Player {
    let mut p = spawn_player((0.0, 0.0), 3);
    p.body.x = enemy.body.x;
    p.body.y = enemy.body.y - p.body.h + depth;
    p.body.vy = vy;
    p
}

fn player_beside(enemy: &Enemy, from_left: bool) -> Player {
    let mut p = spawn_player((0.0, 0.0), 3);
    p.body.x = if from_left {
        enemy.body.x - p.body.w + 4.0
    } else {
        enemy.body.right() - 4.0
    };
    p.body.y = enemy.body.bottom() - p.body.h;
    p.body.vy = 0.0;
    p
}

// ── Stomp ────────────────────────────────────────────────────────────────────

#[test]
fn stomp_on_walking_koopa_shells_it() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut koopa = make_enemy(EnemyKind::Koopa, 200.0, 416.0);
    let mut player = player_above(&koopa, 5.0, 3.0);

    let contact = resolve_player_contact(&mut player, &mut koopa, &mut fx, &mut rng);

    assert_eq!(contact, Some(Contact::Shelled));
    assert_eq!(koopa.state, EnemyState::Shelled { remaining: SHELL_DURATION });
    assert_eq!(player.body.vy, STOMP_BOUNCE);
    assert_eq!(player.lives, 3);
    assert_eq!(player.score, SHELL_SCORE);
    assert_eq!(koopa.body.vx, 0.0);
    assert_eq!(koopa.body.h, SHELL_HEIGHT);
    // Still standing on the same floor.
    assert_eq!(koopa.body.bottom(), 416.0);
    assert_eq!(fx.particles.len(), 4);
    assert!(fx.particles.iter().all(|p| p.color == ParticleColor::Green));
}

#[test]
fn stomp_kills_goomba() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut goomba = make_enemy(EnemyKind::Goomba, 200.0, 416.0);
    let mut player = player_above(&goomba, 10.0, 6.0);

    let contact = resolve_player_contact(&mut player, &mut goomba, &mut fx, &mut rng);

    assert_eq!(contact, Some(Contact::Stomped));
    assert_eq!(goomba.state, EnemyState::Dead);
    assert_eq!(player.score, stomp_score(EnemyKind::Goomba));
    assert_eq!(player.body.vy, STOMP_BOUNCE);
    assert_eq!(fx.particles.len(), 8);
    assert!(fx.particles.iter().all(|p| p.color == ParticleColor::Brown));
}

#[test]
fn stomp_on_shell_kills_koopa_for_more_points() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut shell = shelled(200.0, 416.0);
    let mut player = player_above(&shell, 2.0, 4.0);

    let contact = resolve_player_contact(&mut player, &mut shell, &mut fx, &mut rng);

    assert_eq!(contact, Some(Contact::Stomped));
    assert_eq!(shell.state, EnemyState::Dead);
    assert_eq!(player.score, 40);
    assert!(stomp_score(EnemyKind::Koopa) > stomp_score(EnemyKind::Goomba));
}

#[test]
fn deep_overlap_is_not_a_stomp() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut goomba = make_enemy(EnemyKind::Goomba, 200.0, 416.0);
    let mut player = player_above(&goomba, STOMP_THRESHOLD + 1.0, 6.0);

    let contact = resolve_player_contact(&mut player, &mut goomba, &mut fx, &mut rng);

    assert_eq!(contact, Some(Contact::Hurt));
    assert_eq!(goomba.state, EnemyState::Walking);
    assert_eq!(player.score, 0);
}

#[test]
fn rising_player_is_not_a_stomp() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut goomba = make_enemy(EnemyKind::Goomba, 200.0, 416.0);
    let mut player = player_above(&goomba, 4.0, -3.0);

    let contact = resolve_player_contact(&mut player, &mut goomba, &mut fx, &mut rng);
    assert_eq!(contact, Some(Contact::Hurt));
}

// ── Shell kick ───────────────────────────────────────────────────────────────

#[test]
fn side_contact_kicks_resting_shell_away_from_player() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();

    let mut shell = shelled(200.0, 416.0);
    let mut player = player_beside(&shell, true);
    let contact = resolve_player_contact(&mut player, &mut shell, &mut fx, &mut rng);
    assert_eq!(contact, Some(Contact::Kicked));
    assert_eq!(shell.body.vx, KICK_SPEED);
    assert!(shell.is_shelled());
    assert_eq!(player.lives, 3);
    assert_eq!(player.score, KICK_SCORE);

    let mut shell = shelled(200.0, 416.0);
    let mut player = player_beside(&shell, false);
    let contact = resolve_player_contact(&mut player, &mut shell, &mut fx, &mut rng);
    assert_eq!(contact, Some(Contact::Kicked));
    assert_eq!(shell.body.vx, -KICK_SPEED);
}

#[test]
fn moving_shell_hurts_on_side_contact() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut shell = shelled(200.0, 416.0);
    shell.body.vx = -KICK_SPEED;
    let mut player = player_beside(&shell, true);

    let contact = resolve_player_contact(&mut player, &mut shell, &mut fx, &mut rng);
    assert_eq!(contact, Some(Contact::Hurt));
    assert_eq!(shell.body.vx, -KICK_SPEED);
}

#[test]
fn side_contact_with_walker_hurts() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut koopa = make_enemy(EnemyKind::Koopa, 200.0, 416.0);
    let mut player = player_beside(&koopa, false);

    let contact = resolve_player_contact(&mut player, &mut koopa, &mut fx, &mut rng);
    assert_eq!(contact, Some(Contact::Hurt));
    assert_eq!(koopa.state, EnemyState::Walking);
    assert!(fx.particles.is_empty());
}

#[test]
fn no_contact_without_overlap_or_when_dead() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut goomba = make_enemy(EnemyKind::Goomba, 200.0, 416.0);
    let mut far = spawn_player((0.0, 0.0), 3);
    assert_eq!(
        resolve_player_contact(&mut far, &mut goomba, &mut fx, &mut rng),
        None
    );

    let mut near = player_beside(&goomba, true);
    goomba.state = EnemyState::Dead;
    assert_eq!(
        resolve_player_contact(&mut near, &mut goomba, &mut fx, &mut rng),
        None
    );
}

// ── Shell projectile ─────────────────────────────────────────────────────────

#[test]
fn moving_shell_kills_overlapping_walker_and_keeps_going() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut shell = shelled(200.0, 416.0);
    shell.body.vx = KICK_SPEED;
    let goomba = make_enemy(EnemyKind::Goomba, 210.0, 416.0);
    let shell_before = shell.clone();
    let mut enemies = vec![shell, goomba];
    let mut score = 0;

    let kills = shell_sweep(&mut enemies, 0, &mut score, &mut fx, &mut rng);

    assert_eq!(kills, 1);
    assert_eq!(enemies[1].state, EnemyState::Dead);
    assert_eq!(enemies[0], shell_before);
    assert_eq!(score, SHELL_HIT_SCORE);
    assert_eq!(fx.particles.len(), 6);
}

#[test]
fn slow_shell_is_harmless() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut shell = shelled(200.0, 416.0);
    shell.body.vx = PROJECTILE_SPEED;
    let goomba = make_enemy(EnemyKind::Goomba, 210.0, 416.0);
    let mut enemies = vec![shell, goomba];
    let mut score = 0;

    assert_eq!(shell_sweep(&mut enemies, 0, &mut score, &mut fx, &mut rng), 0);
    assert_eq!(enemies[1].state, EnemyState::Walking);
    assert_eq!(score, 0);
}

#[test]
fn walking_enemy_is_not_a_projectile() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut koopa = make_enemy(EnemyKind::Koopa, 200.0, 416.0);
    koopa.body.vx = 6.0;
    let goomba = make_enemy(EnemyKind::Goomba, 210.0, 416.0);
    let mut enemies = vec![koopa, goomba];
    let mut score = 0;

    assert_eq!(shell_sweep(&mut enemies, 0, &mut score, &mut fx, &mut rng), 0);
    assert!(enemies[1].is_alive());
}

#[test]
fn shell_sweep_skips_dead_and_distant_enemies() {
    let mut rng = seeded_rng();
    let mut fx = Effects::default();
    let mut shell = shelled(200.0, 416.0);
    shell.body.vx = -KICK_SPEED;
    let mut dead = make_enemy(EnemyKind::Goomba, 205.0, 416.0);
    dead.state = EnemyState::Dead;
    let far = make_enemy(EnemyKind::Koopa, 400.0, 416.0);
    let near_shell = shelled(215.0, 416.0);
    let mut enemies = vec![dead, shell, far, near_shell];
    let mut score = 0;

    let kills = shell_sweep(&mut enemies, 1, &mut score, &mut fx, &mut rng);

    assert_eq!(kills, 1);
    assert_eq!(enemies[0].state, EnemyState::Dead);
    assert!(enemies[2].is_alive());
    assert_eq!(enemies[3].state, EnemyState::Dead);
    assert_eq!(fx.particles.len(), 6);
    assert!(fx.particles.iter().all(|p| p.color == ParticleColor::Green));
}
