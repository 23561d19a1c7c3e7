// Owns the particle collection and advances it once per frame

use crate::config::{ConfigError, SceneConfig, SceneVariant, VariantProfile};
use crate::factory;
use crate::particle::{Particle, Sprite};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct MotionEngine {
    config: SceneConfig,
    variant: SceneVariant,
    profile: VariantProfile,
    particles: Vec<Particle>,
}

impl MotionEngine {
    /// Validates `config` and populates the scene from `rng`.
    pub fn spawn<R: Rng + ?Sized>(
        config: SceneConfig,
        variant: SceneVariant,
        rng: &mut R,
    ) -> Result<MotionEngine, ConfigError> {
        let particles = factory::spawn_particles(&config, variant, rng)?;
        Ok(MotionEngine::with_particles(config, variant, particles))
    }

    /// Takes ownership of an already built collection, e.g. hand placed
    /// particles in a test scene.
    pub fn with_particles(config: SceneConfig, variant: SceneVariant, particles: Vec<Particle>) -> MotionEngine {
        MotionEngine {
            config,
            variant,
            profile: variant.profile(),
            particles,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn variant(&self) -> SceneVariant {
        self.variant
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advances every particle by `dt` seconds around the scene center.
    pub fn update(&mut self, dt: f64) {
        let center = self.config.center();
        self.update_around(dt, center);
    }

    pub fn update_around(&mut self, dt: f64, center: [f64; 2]) {
        for particle in &mut self.particles {
            particle.update(dt, center, &self.config, &self.profile);
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.particles.iter().map(Particle::sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::particle::{Motion, ParticleKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn update_preserves_order_and_kinds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut engine = MotionEngine::spawn(SceneConfig::default(), SceneVariant::Classic, &mut rng).unwrap();
        let kinds: Vec<ParticleKind> = engine.particles().iter().map(Particle::kind).collect();
        for _ in 0..120 {
            engine.update(1.0 / 60.0);
        }
        let after: Vec<ParticleKind> = engine.particles().iter().map(Particle::kind).collect();
        assert_eq!(kinds, after);
        assert_eq!(engine.sprites().count(), 50);
    }

    #[test]
    fn zero_dt_leaves_classic_scene_untouched() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut engine = MotionEngine::spawn(SceneConfig::default(), SceneVariant::Classic, &mut rng).unwrap();
        let before = engine.particles().to_vec();
        engine.update(0.0);
        for (a, b) in before.iter().zip(engine.particles()) {
            assert!((a.pos[0] - b.pos[0]).abs() < 1e-9);
            assert!((a.pos[1] - b.pos[1]).abs() < 1e-9);
        }
    }

    #[test]
    fn update_around_uses_given_center() {
        let config = SceneConfig::default();
        let p = Particle::new([100.0, 0.0], 0.0, 5.0, Color::WHITE, Motion::Orbiting { angular_speed: 1.0 });
        let mut engine = MotionEngine::with_particles(config, SceneVariant::Classic, vec![p]);
        engine.update_around(0.25, [0.0, 0.0]);
        let pos = engine.particles()[0].pos;
        let d = vecmath::vec2_len(pos);
        assert!((d - config.orbit_radius).abs() < 1e-9);
    }

    #[test]
    fn empty_scene_updates() {
        let config = SceneConfig {
            particle_count: 0,
            satellite_count: 0,
            ..SceneConfig::default()
        };
        let mut engine = MotionEngine::spawn(config, SceneVariant::Depth, &mut StdRng::seed_from_u64(1)).unwrap();
        engine.update(0.016);
        assert!(engine.particles().is_empty());
    }
}
