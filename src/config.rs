// Scene configuration and the per-variant motion/cosmetic profile

use crate::color::Color;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors raised when a [`SceneConfig`] cannot produce a valid scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("scene {axis} must be a positive finite number, got {value}")]
    InvalidBound { axis: &'static str, value: f64 },

    #[error("orbit radius must be a positive finite number, got {0}")]
    InvalidOrbitRadius(f64),

    #[error("target frame rate must be at least 1, got {0}")]
    InvalidFrameRate(u32),

    #[error("satellite count {satellites} exceeds particle count {particles}")]
    TooManySatellites { satellites: usize, particles: usize },
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub width: f64,
    pub height: f64,
    /// Far bound of the pseudo-3D depth axis; jets falling behind the
    /// viewer reappear here.
    pub depth: f64,
    pub particle_count: usize,
    /// The first `satellite_count` particles orbit, the rest are jets.
    pub satellite_count: usize,
    pub orbit_radius: f64,
    pub target_fps: u32,
    pub star_count: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            depth: 400.0,
            particle_count: 50,
            satellite_count: 10,
            orbit_radius: 200.0,
            target_fps: 60,
            star_count: 100,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &(axis, value) in &[
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidBound { axis, value });
            }
        }
        if !(self.orbit_radius.is_finite() && self.orbit_radius > 0.0) {
            return Err(ConfigError::InvalidOrbitRadius(self.orbit_radius));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidFrameRate(self.target_fps));
        }
        if self.satellite_count > self.particle_count {
            return Err(ConfigError::TooManySatellites {
                satellites: self.satellite_count,
                particles: self.particle_count,
            });
        }
        Ok(())
    }

    pub fn center(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }
}

#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneVariant {
    /// White particles on black, nothing else.
    Classic,
    /// Channels drift every frame; starfield and orbit outline.
    ColorCycle,
    /// Perspective scaling and grayscale-by-depth; starfield and orbit outline.
    Depth,
}

/// Everything that differs between scene variants, resolved once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantProfile {
    /// Half-width of the uniform range jet velocity components are drawn
    /// from. The x component doubles as the satellite angular speed.
    pub velocity_range: [f64; 2],
    pub speed_scale: f64,
    /// How much of the x velocity bleeds into depth each second.
    pub depth_drift_scale: f64,
    pub color_step: Option<[u8; 3]>,
    pub perspective: bool,
    pub star_color: Option<Color>,
    pub orbit_outline: bool,
}

impl SceneVariant {
    pub fn profile(self) -> VariantProfile {
        match self {
            SceneVariant::Classic => VariantProfile {
                velocity_range: [1.0, 10.0],
                speed_scale: 1.0,
                depth_drift_scale: 0.0,
                color_step: None,
                perspective: false,
                star_color: None,
                orbit_outline: false,
            },
            SceneVariant::ColorCycle => VariantProfile {
                velocity_range: [1.0, 10.0],
                speed_scale: 1.0,
                depth_drift_scale: 0.0,
                color_step: Some([1, 2, 3]),
                perspective: false,
                star_color: Some(Color::from_u32(0xc8c8_c896)),
                orbit_outline: true,
            },
            SceneVariant::Depth => VariantProfile {
                velocity_range: [1.0, 1.0],
                speed_scale: 50.0,
                depth_drift_scale: 10.0,
                color_step: None,
                perspective: true,
                star_color: Some(Color::from_u32(0x9696_96ff)),
                orbit_outline: true,
            },
        }
    }
}
