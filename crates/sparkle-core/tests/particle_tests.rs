// Host-side tests for the sparkle simulator.

use sparkle_core::constants::*;
use sparkle_core::*;
use std::collections::{HashMap, HashSet};
use std::f32::consts::TAU;

fn make_sim(params: SparkleParams) -> ParticleSimulator {
    ParticleSimulator::new(params, 42).expect("valid params")
}

#[test]
fn batch_of_three_is_a_radial_burst_around_origin() {
    let mut sim = make_sim(SparkleParams::with_fixed_batch(3));
    let ids = sim.spawn_batch(100.0, 100.0);
    assert_eq!(ids.len(), 3);
    assert_eq!(sim.len(), 3);

    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 3, "batch ids must be distinct");

    let half_span = SPAWN_OFFSET_SPAN / 2.0;
    for (i, id) in ids.iter().enumerate() {
        let p = sim.get(*id).expect("spawned sparkle is live");
        assert!((p.position.x - 100.0).abs() <= half_span);
        assert!((p.position.y - 100.0).abs() <= half_span);

        // Launch direction sits at 2π·i/3 plus a jitter in [0, ANGLE_JITTER_RAD)
        let angle = p.velocity.y.atan2(p.velocity.x).rem_euclid(TAU);
        let base = TAU * i as f32 / 3.0;
        let d = (angle - base).rem_euclid(TAU);
        assert!(
            d < ANGLE_JITTER_RAD + 1e-4 || d > TAU - 1e-4,
            "sparkle {i} angle {angle} too far from {base}"
        );
    }
}

#[test]
fn random_batch_size_stays_in_range() {
    let mut sim = make_sim(SparkleParams::default());
    for k in 0..200 {
        let ids = sim.spawn_batch(k as f32, 0.0);
        assert!(
            (SPAWN_COUNT_MIN..=SPAWN_COUNT_MAX).contains(&ids.len()),
            "batch of {} sparkles",
            ids.len()
        );
    }
}

#[test]
fn spawned_sparkles_respect_initial_ranges() {
    let mut sim = make_sim(SparkleParams::default());
    for _ in 0..100 {
        sim.spawn_batch(300.0, 200.0);
    }
    for p in sim.particles() {
        let speed = p.velocity.length();
        assert!(speed >= SPEED_MIN - 1e-4 && speed < SPEED_MAX + 1e-4);
        assert!(p.size >= SIZE_MIN && p.size < SIZE_MAX);
        assert!((LIFE_MIN..=LIFE_MAX).contains(&p.max_life));
        assert_eq!(p.remaining_life, p.max_life);
        assert!(SPARKLE_PALETTE.contains(&p.color));
        assert!((p.fade_ratio() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn sparkle_with_life_twenty_is_gone_after_twentieth_tick() {
    let params = SparkleParams {
        life: 20..=20,
        ..SparkleParams::with_fixed_batch(1)
    };
    let mut sim = make_sim(params);
    let id = sim.spawn_batch(0.0, 0.0)[0];
    for _ in 0..19 {
        sim.tick();
    }
    let p = sim.get(id).expect("still alive after 19 ticks");
    assert_eq!(p.remaining_life, 1);
    sim.tick();
    assert!(sim.get(id).is_none(), "culled in the tick its life hit zero");
    assert!(sim.is_empty());
}

#[test]
fn tick_integrates_velocity_gravity_and_decay() {
    let mut sim = make_sim(SparkleParams::with_fixed_batch(1));
    let id = sim.spawn_batch(50.0, 50.0)[0];
    let before = sim.get(id).cloned().expect("spawned");
    sim.tick();
    let after = sim.get(id).expect("alive after one tick");
    assert!((after.position - (before.position + before.velocity)).length() < 1e-4);
    assert!((after.velocity.y - (before.velocity.y + GRAVITY)).abs() < 1e-5);
    assert!((after.velocity.x - before.velocity.x).abs() < 1e-6);
    assert!((after.size - before.size * SIZE_DECAY).abs() < 1e-5);
    assert_eq!(after.remaining_life, before.remaining_life - 1);
}

#[test]
fn life_and_size_never_increase_and_dead_sparkles_never_linger() {
    let mut sim = make_sim(SparkleParams::default());
    let mut seen: HashMap<u64, (u32, f32)> = HashMap::new();
    for frame in 0..120 {
        if frame % 3 == 0 {
            sim.spawn_batch(frame as f32, 10.0);
        }
        sim.tick();
        for p in sim.particles() {
            assert!(p.remaining_life > 0, "dead sparkle {} still live", p.id);
            assert!(p.size >= 0.0);
            if let Some((life, size)) = seen.get(&p.id) {
                assert!(p.remaining_life <= *life);
                assert!(p.size <= *size);
            }
            seen.insert(p.id, (p.remaining_life, p.size));
        }
    }
    assert!(!seen.is_empty());
}

#[test]
fn ids_are_never_reused() {
    let mut sim = make_sim(SparkleParams::default());
    let mut all = HashSet::new();
    for frame in 0..300 {
        for id in sim.spawn_batch(0.0, 0.0) {
            assert!(all.insert(id), "id {id} handed out twice");
        }
        if frame % 2 == 0 {
            sim.tick();
        }
    }
    sim.clear();
    let fresh = sim.spawn_batch(0.0, 0.0);
    for id in fresh {
        assert!(all.insert(id), "id {id} reused after clear");
    }
}

#[test]
fn fade_ratio_tracks_remaining_life() {
    let params = SparkleParams {
        life: 40..=40,
        ..SparkleParams::with_fixed_batch(1)
    };
    let mut sim = make_sim(params);
    let id = sim.spawn_batch(0.0, 0.0)[0];
    for _ in 0..10 {
        sim.tick();
    }
    let p = sim.get(id).expect("alive");
    assert!((p.fade_ratio() - 0.75).abs() < 1e-6);
}

#[test]
fn same_seed_gives_same_bursts() {
    let mut a = make_sim(SparkleParams::default());
    let mut b = make_sim(SparkleParams::default());
    for i in 0..20 {
        a.spawn_batch(i as f32, 3.0);
        b.spawn_batch(i as f32, 3.0);
        a.tick();
        b.tick();
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn simulator_rejects_params_that_cannot_spawn() {
    let empty_palette = SparkleParams {
        palette: &[],
        ..SparkleParams::default()
    };
    assert!(matches!(
        ParticleSimulator::new(empty_palette, 42),
        Err(ParamsError::EmptyPalette)
    ));

    #[allow(clippy::reversed_empty_ranges)]
    let inverted_life = SparkleParams {
        life: 49..=20,
        ..SparkleParams::default()
    };
    assert!(matches!(
        ParticleSimulator::new(inverted_life, 42),
        Err(ParamsError::Life { .. })
    ));
}
