//! Destruction of meteors that leave play without being collected.
use forager::{ArenaConfig, ForagerConfig, MeteorColor, MeteorId, Removal};
use glam::Vec2;
use rstest::{fixture, rstest};
use test_utils::fixtures::{arena, arena_with, moving_meteor};

/// One-second unseen lifetime, i.e. 50 ticks.
#[fixture]
fn short_lifetime() -> ForagerConfig {
    ForagerConfig {
        arena: ArenaConfig {
            unseen_lifetime: 1.0,
            ..ArenaConfig::default()
        },
        ..ForagerConfig::default()
    }
}

fn step_n(a: &mut forager::Arena, n: usize) -> Vec<Removal> {
    (0..n).flat_map(|_| a.step().removals).collect()
}

#[rstest]
fn meteor_that_never_enters_expires(short_lifetime: ForagerConfig) {
    let mut a = arena_with(short_lifetime);
    a.place_agent(Vec2::new(0.0, -45.0));
    a.set_rival_motion(Vec2::new(0.0, 45.0), Vec2::ZERO);
    let outbound = a.spawn_meteor(Vec2::new(60.0, 0.0), Vec2::new(10.0, 0.0), MeteorColor::Red);
    let inbound = a.spawn_meteor(Vec2::new(-50.9, 0.0), Vec2::new(10.0, 0.0), MeteorColor::Blue);

    assert!(step_n(&mut a, 49).is_empty());
    assert!(a.is_alive(outbound));

    let removals = a.step().removals;
    assert_eq!(removals, vec![Removal::Expired { meteor: outbound }]);
    assert!(!a.is_alive(outbound));
    // Entered on tick 5, so its expiry is ignored.
    assert!(a.is_alive(inbound));
    assert!(a.registry().contains(inbound));
}

#[rstest]
fn expiry_is_not_reached_early_with_default_lifetime() {
    let mut a = arena();
    let id = a.spawn_meteor(Vec2::new(60.0, 0.0), Vec2::new(10.0, 0.0), MeteorColor::Green);
    assert!(step_n(&mut a, 499).is_empty());
    assert!(a.is_alive(id));
    assert_eq!(a.step().removals, vec![Removal::Expired { meteor: id }]);
}

#[rstest]
fn registered_meteor_crossing_the_edge_is_removed() {
    let mut a = arena();
    a.place_agent(Vec2::new(-40.0, 0.0));
    a.set_rival_motion(Vec2::new(-40.0, 10.0), Vec2::ZERO);
    a.register_meteor(moving_meteor(3, MeteorColor::Red, (49.9, 0.0), (10.0, 0.0)));
    a.register_meteor(moving_meteor(4, MeteorColor::Red, (0.0, 20.0), (0.0, 0.0)));

    let removals = a.step().removals;
    assert_eq!(removals, vec![Removal::Exited { meteor: MeteorId(3) }]);
    assert!(!a.is_alive(MeteorId(3)));
    assert!(a.registry().contains(MeteorId(4)));
}
