mod utils;

pub mod backdrop;
pub mod color;
pub mod config;
pub mod engine;
pub mod factory;
pub mod frame_clock;
pub mod particle;
pub mod renderer;
pub mod webgl_helpers;

use backdrop::Backdrop;
use config::SceneConfig;
use engine::MotionEngine;
use frame_clock::FrameClock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::Renderer;
use wasm_bindgen::prelude::*;
use web_sys::console;

pub use config::{ConfigError, SceneVariant};
pub use webgl_helpers::RenderError;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::set_console_logger(log::LevelFilter::Info);
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

fn scene_rng(seed: Option<u32>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(u64::from(seed)),
        None => StdRng::from_entropy(),
    }
}

/// A running scene bound to one canvas. The page drives it from
/// `requestAnimationFrame` by handing over the frame timestamp.
#[wasm_bindgen]
pub struct Simulation {
    engine: MotionEngine,
    backdrop: Backdrop,
    renderer: Renderer,
    clock: FrameClock,
}

#[wasm_bindgen]
impl Simulation {
    /// Default scene sized to the canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &web_sys::HtmlCanvasElement, variant: SceneVariant) -> Result<Simulation, JsValue> {
        let config = SceneConfig {
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
            ..SceneConfig::default()
        };
        let mut rng = scene_rng(None);
        let engine = MotionEngine::spawn(config, variant, &mut rng)?;
        let backdrop = Backdrop::for_variant(&config, variant, &mut rng);
        let renderer = Renderer::new(canvas)?;
        log::info!(
            "{:?} scene {}x{} with {} particles",
            variant,
            config.width,
            config.height,
            config.particle_count
        );
        Ok(Simulation {
            engine,
            backdrop,
            renderer,
            clock: FrameClock::new(config.target_fps),
        })
    }

    /// Replaces every particle, and the starfield, with a fresh scene.
    /// The previous scene is kept if the counts are rejected.
    pub fn respawn(&mut self, particle_count: u32, satellite_count: u32, seed: Option<u32>) -> Result<(), JsValue> {
        let _timer = Timer::new("Simulation::respawn");
        let config = SceneConfig {
            particle_count: particle_count as usize,
            satellite_count: satellite_count as usize,
            ..*self.engine.config()
        };
        let variant = self.engine.variant();
        let mut rng = scene_rng(seed);
        self.engine = MotionEngine::spawn(config, variant, &mut rng)?;
        self.backdrop = Backdrop::for_variant(&config, variant, &mut rng);
        log::debug!("respawned with seed {:?}", seed);
        Ok(())
    }

    /// Advances and draws one frame if the frame clock allows it. Returns
    /// `false` once the simulation has been closed.
    pub fn frame(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        let dt = match self.clock.tick(now_ms) {
            Some(dt) => dt,
            None => return Ok(self.clock.is_running()),
        };
        {
            let _timer = Timer::new("Simulation::update");
            self.engine.update(dt);
        }
        let _timer = Timer::new("Simulation::render");
        self.renderer.clear_screen();
        self.renderer.render_backdrop(&self.backdrop)?;
        self.renderer.render_particles(self.engine.sprites())?;
        Ok(true)
    }

    pub fn close(&mut self) {
        if self.clock.is_running() {
            log::info!("simulation closed");
        }
        self.clock.close();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.engine.particles().len()
    }
}
