// Static scenery drawn behind the particles: a starfield generated once at
// startup and the outline of the satellite orbit

use crate::color::Color;
use crate::config::{SceneConfig, SceneVariant};
use rand::Rng;
use std::f64::consts::PI;
use vecmath::Vector2;

pub const ORBIT_COLOR: Color = Color::rgba(100, 100, 100, 255);
pub const ORBIT_SEGMENTS: usize = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    pub stars: Vec<Vector2<f64>>,
    pub color: Color,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, width: f64, height: f64, color: Color) -> Starfield {
        let stars = (0..count)
            .map(|_| [rng.gen_range(0.0, width), rng.gen_range(0.0, height)])
            .collect();
        Starfield { stars, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitOutline {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl OrbitOutline {
    pub fn new(center: Vector2<f64>, radius: f64) -> OrbitOutline {
        OrbitOutline {
            center,
            radius,
            color: ORBIT_COLOR,
        }
    }

    // Vertices of a closed polygon approximating the circle, first vertex
    // is not repeated at the end.
    pub fn points(&self, segments: usize) -> Vec<Vector2<f64>> {
        let segments = segments.max(3);
        (0..segments)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / segments as f64;
                [
                    self.center[0] + self.radius * angle.cos(),
                    self.center[1] + self.radius * angle.sin(),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Backdrop {
    pub starfield: Option<Starfield>,
    pub orbit: Option<OrbitOutline>,
}

impl Backdrop {
    pub fn for_variant<R: Rng + ?Sized>(config: &SceneConfig, variant: SceneVariant, rng: &mut R) -> Backdrop {
        let profile = variant.profile();
        let starfield = profile
            .star_color
            .map(|color| Starfield::generate(rng, config.star_count, config.width, config.height, color));
        let orbit = if profile.orbit_outline {
            Some(OrbitOutline::new(config.center(), config.orbit_radius))
        } else {
            None
        };
        Backdrop { starfield, orbit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn classic_has_no_backdrop() {
        let backdrop = Backdrop::for_variant(&SceneConfig::default(), SceneVariant::Classic, &mut StdRng::seed_from_u64(0));
        assert_eq!(backdrop, Backdrop::default());
    }

    #[test]
    fn depth_stars_are_opaque_gray_and_in_bounds() {
        let config = SceneConfig::default();
        let backdrop = Backdrop::for_variant(&config, SceneVariant::Depth, &mut StdRng::seed_from_u64(0));
        let starfield = backdrop.starfield.unwrap();
        assert_eq!(starfield.stars.len(), 100);
        assert_eq!(starfield.color, Color::rgba(150, 150, 150, 255));
        for star in &starfield.stars {
            assert!(star[0] >= 0.0 && star[0] < config.width);
            assert!(star[1] >= 0.0 && star[1] < config.height);
        }
        assert_eq!(backdrop.orbit.unwrap().center, [400.0, 300.0]);
    }

    #[test]
    fn orbit_points_lie_on_the_circle() {
        let outline = OrbitOutline::new([400.0, 300.0], 200.0);
        let points = outline.points(ORBIT_SEGMENTS);
        assert_eq!(points.len(), ORBIT_SEGMENTS);
        assert!((points[0][0] - 600.0).abs() < 1e-9);
        for p in &points {
            let d = vecmath::vec2_len(vecmath::vec2_sub(*p, outline.center));
            assert!((d - 200.0).abs() < 1e-9);
        }
        assert_eq!(outline.points(0).len(), 3);
    }
}
