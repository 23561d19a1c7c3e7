// Builds the initial particle collection from an explicit random source

use crate::color::Color;
use crate::config::{ConfigError, SceneConfig, SceneVariant};
use crate::particle::{Motion, Particle};
use rand::Rng;

pub const MIN_RADIUS: f64 = 5.0;
pub const MAX_RADIUS: f64 = 10.0;

/// Creates `config.particle_count` particles in index order. The first
/// `config.satellite_count` orbit the scene center, the rest are jets.
///
/// Satellites are placed on the orbit at the angle of their random draw,
/// so every particle satisfies its motion invariant before the first frame.
pub fn spawn_particles<R: Rng + ?Sized>(
    config: &SceneConfig,
    variant: SceneVariant,
    rng: &mut R,
) -> Result<Vec<Particle>, ConfigError> {
    config.validate()?;
    let profile = variant.profile();
    let center = config.center();
    let [range_x, range_y] = profile.velocity_range;

    let mut particles = Vec::with_capacity(config.particle_count);
    for i in 0..config.particle_count {
        let pos_x = rng.gen_range(0.0, config.width);
        let pos_y = rng.gen_range(0.0, config.height);
        let depth = if profile.perspective {
            rng.gen_range(0.0, config.depth)
        } else {
            0.0
        };
        let radius = rng.gen_range(MIN_RADIUS, MAX_RADIUS);
        let vel_x = rng.gen_range(-range_x, range_x);
        let vel_y = rng.gen_range(-range_y, range_y);

        let motion = if i < config.satellite_count {
            Motion::Orbiting { angular_speed: vel_x }
        } else {
            Motion::Linear {
                velocity: [vel_x, vel_y],
            }
        };
        let mut p = Particle::new([pos_x, pos_y], depth, radius, Color::WHITE, motion);
        if let Motion::Orbiting { .. } = motion {
            let angle = p.angle_around(center);
            p.orbit(angle, center, config.orbit_radius, &profile);
        }
        if profile.perspective {
            p.apply_perspective();
        }
        particles.push(p);
    }

    log::debug!(
        "spawned {} particles ({} satellites) for {:?}",
        particles.len(),
        config.satellite_count,
        variant
    );
    Ok(particles)
}
