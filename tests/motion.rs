use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use space_particles::color::Color;
use space_particles::config::SceneConfig;
use space_particles::engine::MotionEngine;
use space_particles::particle::{perspective_scale, Motion, Particle, ParticleKind};
use space_particles::SceneVariant;
use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-4;

fn random_dts(rng: &mut StdRng, n: usize) -> Vec<f64> {
    // Mostly frame sized steps with the occasional long stall
    (0..n)
        .map(|i| if i % 37 == 0 { rng.gen_range(0.0, 5.0) } else { rng.gen_range(0.0, 0.05) })
        .collect()
}

#[test]
fn satellites_hold_their_orbit() {
    for &variant in &[SceneVariant::Classic, SceneVariant::ColorCycle, SceneVariant::Depth] {
        let mut rng = StdRng::seed_from_u64(2024);
        let config = SceneConfig::default();
        let mut engine = MotionEngine::spawn(config, variant, &mut rng).unwrap();
        let center = config.center();
        for dt in random_dts(&mut rng, 500) {
            engine.update(dt);
            for p in engine.particles().iter().filter(|p| p.kind() == ParticleKind::Satellite) {
                let d = vecmath::vec2_len(vecmath::vec2_sub(p.pos, center));
                assert!((d - config.orbit_radius).abs() < TOLERANCE, "{:?}: distance {}", variant, d);
            }
        }
    }
}

#[test]
fn jets_stay_inside_the_scene() {
    for &variant in &[SceneVariant::Classic, SceneVariant::ColorCycle, SceneVariant::Depth] {
        let mut rng = StdRng::seed_from_u64(77);
        let config = SceneConfig::default();
        let mut engine = MotionEngine::spawn(config, variant, &mut rng).unwrap();
        for dt in random_dts(&mut rng, 500) {
            engine.update(dt);
            for p in engine.particles().iter().filter(|p| p.kind() == ParticleKind::Jet) {
                assert!(p.pos[0] >= 0.0 && p.pos[0] <= config.width, "x = {}", p.pos[0]);
                assert!(p.pos[1] >= 0.0 && p.pos[1] <= config.height, "y = {}", p.pos[1]);
                assert!(p.depth >= 0.0);
                assert!(p.scale > 0.0);
            }
        }
    }
}

#[test]
fn jet_just_past_left_edge_lands_on_right_edge() {
    let config = SceneConfig::default();
    let jet = Particle::new([0.0, 300.0], 0.0, 5.0, Color::WHITE, Motion::Linear { velocity: [-0.01, 0.0] });
    let mut engine = MotionEngine::with_particles(config, SceneVariant::Classic, vec![jet]);
    engine.update(0.1);
    assert_eq!(engine.particles()[0].pos[0], 800.0);
}

#[test]
fn jet_past_right_edge_wraps_to_zero() {
    let config = SceneConfig::default();
    let jet = Particle::new([799.0, 300.0], 0.0, 5.0, Color::WHITE, Motion::Linear { velocity: [10.0, 0.0] });
    let mut engine = MotionEngine::with_particles(config, SceneVariant::Classic, vec![jet]);
    engine.update(0.2);
    assert_eq!(engine.particles()[0].pos, [0.0, 300.0]);
}

#[test]
fn satellite_quarter_orbit() {
    let config = SceneConfig::default();
    let satellite = Particle::new([600.0, 300.0], 0.0, 5.0, Color::WHITE, Motion::Orbiting { angular_speed: PI });
    let mut engine = MotionEngine::with_particles(config, SceneVariant::Classic, vec![satellite]);
    engine.update(0.5);
    let pos = engine.particles()[0].pos;
    assert!((pos[0] - 400.0).abs() < TOLERANCE);
    assert!((pos[1] - 500.0).abs() < TOLERANCE);
}

#[test]
fn color_channels_cycle_with_their_own_period() {
    let config = SceneConfig::default();
    let start = Color::rgba(10, 20, 30, 255);
    let jet = Particle::new([100.0, 100.0], 0.0, 5.0, start, Motion::Linear { velocity: [0.0, 0.0] });
    let mut engine = MotionEngine::with_particles(config, SceneVariant::ColorCycle, vec![jet]);

    for _ in 0..85 {
        engine.update(1.0 / 60.0);
    }
    assert_ne!(engine.particles()[0].color.b, start.b);

    for _ in 85..128 {
        engine.update(1.0 / 60.0);
    }
    let color = engine.particles()[0].color;
    assert_eq!(color.g, start.g);
    assert_ne!(color.r, start.r);

    for _ in 128..256 {
        engine.update(1.0 / 60.0);
    }
    let color = engine.particles()[0].color;
    assert_eq!(color, start);
    assert_eq!(engine.particles()[0].base_color, start);
}

#[test]
fn classic_colors_never_change() {
    let mut engine = MotionEngine::spawn(SceneConfig::default(), SceneVariant::Classic, &mut StdRng::seed_from_u64(8)).unwrap();
    for _ in 0..300 {
        engine.update(1.0 / 60.0);
    }
    assert!(engine.sprites().all(|s| s.color == Color::WHITE && s.scale == 1.0));
}

#[test]
fn depth_scene_sprites_are_gray_and_positive() {
    let mut engine = MotionEngine::spawn(SceneConfig::default(), SceneVariant::Depth, &mut StdRng::seed_from_u64(19)).unwrap();
    for _ in 0..300 {
        engine.update(1.0 / 60.0);
    }
    for sprite in engine.sprites() {
        assert!(sprite.scale > 0.0);
        assert!((sprite.scale - perspective_scale(sprite.depth)).abs() < 1e-12);
        assert_eq!(sprite.color.r, sprite.color.g);
        assert_eq!(sprite.color.g, sprite.color.b);
        assert_eq!(sprite.color.a, 255);
    }
}
