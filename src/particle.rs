// Particle state plus the closed-form motion rules that advance it each frame

use crate::color::Color;
use crate::config::{SceneConfig, VariantProfile};
use vecmath::Vector2;

// Satellite depth wobbles around this plane, see `Particle::orbit`
const WOBBLE_PLANE: f64 = 200.0;
const WOBBLE_AMPLITUDE: f64 = 50.0;
// scale = 1 / (NEAR + depth / DEPTH)
const PERSPECTIVE_DEPTH: f64 = 400.0;
const PERSPECTIVE_NEAR: f64 = 0.5;
const BRIGHTNESS: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Satellite,
    Jet,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Circles the scene center at the configured orbit radius.
    Orbiting { angular_speed: f64 },
    /// Constant velocity with wrap-around at the scene edges.
    Linear { velocity: Vector2<f64> },
}

/// What the renderer needs to draw one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub pos: Vector2<f64>,
    pub depth: f64,
    pub radius: f64,
    pub scale: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub depth: f64,
    pub radius: f64,
    pub base_color: Color,
    pub color: Color,
    pub scale: f64,
    motion: Motion,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, depth: f64, radius: f64, color: Color, motion: Motion) -> Particle {
        Particle {
            pos,
            depth,
            radius,
            base_color: color,
            color,
            scale: 1.0,
            motion,
        }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn kind(&self) -> ParticleKind {
        match self.motion {
            Motion::Orbiting { .. } => ParticleKind::Satellite,
            Motion::Linear { .. } => ParticleKind::Jet,
        }
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            pos: self.pos,
            depth: self.depth,
            radius: self.radius,
            scale: self.scale,
            color: self.color,
        }
    }

    /// Advances the particle by `dt` seconds around `center`, then applies
    /// the variant's cosmetics. Negative `dt` is treated as no time passing.
    pub fn update(&mut self, dt: f64, center: Vector2<f64>, config: &SceneConfig, profile: &VariantProfile) {
        let dt = dt.max(0.0);
        match self.motion {
            Motion::Orbiting { angular_speed } => {
                let angle = self.angle_around(center) + angular_speed * dt;
                self.orbit(angle, center, config.orbit_radius, profile);
            }
            Motion::Linear { velocity } => self.drift(velocity, dt, config, profile),
        }

        if let Some(step) = profile.color_step {
            self.color.cycle(step);
        }
        if profile.perspective {
            self.apply_perspective();
        }
    }

    pub(crate) fn angle_around(&self, center: Vector2<f64>) -> f64 {
        let offset = vecmath::vec2_sub(self.pos, center);
        offset[1].atan2(offset[0])
    }

    // Radius is recomputed from the angle every frame, so it never drifts
    pub(crate) fn orbit(&mut self, angle: f64, center: Vector2<f64>, radius: f64, profile: &VariantProfile) {
        let (sin, cos) = angle.sin_cos();
        self.pos = vecmath::vec2_add(center, vecmath::vec2_scale([cos, sin], radius));
        if profile.perspective {
            self.depth = WOBBLE_PLANE + WOBBLE_AMPLITUDE * (angle * 2.0).sin();
        }
    }

    fn drift(&mut self, velocity: Vector2<f64>, dt: f64, config: &SceneConfig, profile: &VariantProfile) {
        let step = vecmath::vec2_scale(velocity, dt * profile.speed_scale);
        self.pos = vecmath::vec2_add(self.pos, step);
        self.pos[0] = wrap(self.pos[0], config.width);
        self.pos[1] = wrap(self.pos[1], config.height);

        if profile.perspective {
            self.depth += velocity[0] * dt * profile.depth_drift_scale;
            // Only the near side wraps; far away particles just shrink
            if self.depth < 0.0 {
                self.depth = config.depth;
            }
        }
    }

    pub(crate) fn apply_perspective(&mut self) {
        self.scale = perspective_scale(self.depth);
        self.color.gray(BRIGHTNESS * self.scale);
    }
}

/// Size multiplier for a particle at `depth`. Strictly positive for any
/// non-negative depth, peaking at 2.0 on the near plane.
pub fn perspective_scale(depth: f64) -> f64 {
    1.0 / (PERSPECTIVE_NEAR + depth / PERSPECTIVE_DEPTH)
}

// Teleports to the opposite edge instead of clamping or bouncing
fn wrap(value: f64, bound: f64) -> f64 {
    if value < 0.0 {
        bound
    } else if value > bound {
        0.0
    } else {
        value
    }
}
