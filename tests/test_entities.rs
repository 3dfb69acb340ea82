use tile_dash::entities::*;

fn shelled_koopa(remaining: u32) -> Enemy {
    Enemy {
        kind: EnemyKind::Koopa,
        body: Actor::new(0.0, 0.0, 26.0, 24.0),
        state: EnemyState::Shelled { remaining },
        jump_countdown: 10,
        spawn: EnemySpawn { col: 0, kind: EnemyKind::Koopa },
    }
}

#[test]
fn entity_clone_and_eq() {
    assert_eq!(EnemyKind::Goomba, EnemyKind::Goomba);
    assert_ne!(EnemyKind::Goomba, EnemyKind::Koopa);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_ne!(GameStatus::GameOver, GameStatus::Won);

    let state = EnemyState::Shelled { remaining: 5 };
    assert_eq!(state.clone(), EnemyState::Shelled { remaining: 5 });
    assert_ne!(state, EnemyState::Shelled { remaining: 6 });
}

#[test]
fn actor_edges() {
    let a = Actor::new(10.0, 20.0, 24.0, 30.0);
    assert_eq!(a.right(), 34.0);
    assert_eq!(a.bottom(), 50.0);
    assert_eq!(a.center_x(), 22.0);
    assert_eq!(a.center_y(), 35.0);
    assert_eq!(a.vx, 0.0);
    assert_eq!(a.vy, 0.0);
    assert!(!a.grounded);
}

#[test]
fn dead_enemy_is_not_alive_or_shelled() {
    let mut e = shelled_koopa(100);
    assert!(e.is_alive());
    assert!(e.is_shelled());
    e.state = EnemyState::Dead;
    assert!(!e.is_alive());
    assert!(!e.is_shelled());
}

#[test]
fn shell_blinks_only_near_the_end() {
    assert!(!shelled_koopa(120).shell_blinking());
    assert!(!shelled_koopa(60).shell_blinking());
    assert!(shelled_koopa(54).shell_blinking()); // 54 % 10 = 4
    assert!(!shelled_koopa(55).shell_blinking()); // 55 % 10 = 5
    assert!(shelled_koopa(1).shell_blinking());

    let mut walking = shelled_koopa(1);
    walking.state = EnemyState::Walking;
    assert!(!walking.shell_blinking());
}

#[test]
fn particle_color_follows_archetype() {
    assert_eq!(ParticleColor::from(EnemyKind::Goomba), ParticleColor::Brown);
    assert_eq!(ParticleColor::from(EnemyKind::Koopa), ParticleColor::Green);
}

#[test]
fn effects_clear_empties_both_lists() {
    let mut fx = Effects::default();
    fx.coins.push(Coin { x: 0.0, y: 0.0, vy: -6.0, life: 30 });
    fx.particles.push(Particle {
        x: 0.0,
        y: 0.0,
        vx: 1.0,
        vy: -1.0,
        life: 20,
        color: ParticleColor::Gold,
        size: 3.0,
    });
    fx.clear();
    assert!(fx.coins.is_empty());
    assert!(fx.particles.is_empty());
}
