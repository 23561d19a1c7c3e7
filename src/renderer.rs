// Renderer struct that handles WebGl calls, and contains data for rendering,
// including the projection into normalized screen coordinates, vertex
// scratch arrays and shaders.

use crate::backdrop::{Backdrop, ORBIT_SEGMENTS};
use crate::color::Color;
use crate::particle::Sprite;
use crate::webgl_helpers::{self, RenderError};
use wasm_bindgen::JsCast;
use web_sys::{WebGlBuffer, WebGlProgram, WebGlRenderingContext};
extern crate nalgebra_glm as glm;
use glm::TMat4;

const SPRITE_VERTEX_SHADER: &str = r#"
    attribute vec2 a_Position;
    attribute float a_Size;
    attribute vec4 a_Color;

    uniform mat4 u_Proj;

    varying vec4 v_Color;

    void main() {
        gl_Position = u_Proj * vec4(a_Position, 0.0, 1.0);
        gl_PointSize = a_Size;
        v_Color = a_Color;
    }
"#;

const SPRITE_FRAGMENT_SHADER: &str = r#"
    precision mediump float;
    varying vec4 v_Color;

    void main() {
        // round point sprites
        vec2 d = gl_PointCoord - vec2(0.5);
        if (dot(d, d) > 0.25) {
            discard;
        }
        gl_FragColor = v_Color;
    }
"#;

const FLAT_VERTEX_SHADER: &str = r#"
    attribute vec2 a_Position;
    attribute vec4 a_Color;

    uniform mat4 u_Proj;

    varying vec4 v_Color;

    void main() {
        gl_Position = u_Proj * vec4(a_Position, 0.0, 1.0);
        gl_PointSize = 1.0;
        v_Color = a_Color;
    }
"#;

const FLAT_FRAGMENT_SHADER: &str = r#"
    precision mediump float;
    varying vec4 v_Color;

    void main() {
        gl_FragColor = v_Color;
    }
"#;

pub struct Renderer {
    pub context: WebGlRenderingContext,
    pub projection_mat: TMat4<f32>,
    pub position_buffer: WebGlBuffer,
    pub size_buffer: WebGlBuffer,
    pub color_buffer: WebGlBuffer,
    pub sprite_shader: WebGlProgram,
    pub flat_shader: WebGlProgram,
    position_array: Vec<f32>,
    size_array: Vec<f32>,
    color_array: Vec<u8>,
}

impl Renderer {
    // Grabs the WebGl context from the canvas and builds both shader programs
    pub fn new(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, RenderError> {
        let context = canvas
            .get_context("webgl")
            .map_err(|_| RenderError::ContextUnavailable)?
            .ok_or(RenderError::ContextUnavailable)?
            .dyn_into::<WebGlRenderingContext>()
            .map_err(|_| RenderError::ContextUnavailable)?;

        let projection_mat = glm::ortho(0.0, canvas.width() as f32, canvas.height() as f32, 0.0, 1.0, -1.0);

        let sprite_shader = webgl_helpers::build_program(&context, SPRITE_VERTEX_SHADER, SPRITE_FRAGMENT_SHADER)?;
        let flat_shader = webgl_helpers::build_program(&context, FLAT_VERTEX_SHADER, FLAT_FRAGMENT_SHADER)?;

        context.enable(WebGlRenderingContext::BLEND);
        context.blend_func(
            WebGlRenderingContext::SRC_ALPHA,
            WebGlRenderingContext::ONE_MINUS_SRC_ALPHA,
        );

        Ok(Renderer {
            position_buffer: webgl_helpers::create_buffer(&context)?,
            size_buffer: webgl_helpers::create_buffer(&context)?,
            color_buffer: webgl_helpers::create_buffer(&context)?,
            context,
            projection_mat,
            sprite_shader,
            flat_shader,
            position_array: Vec::new(),
            size_array: Vec::new(),
            color_array: Vec::new(),
        })
    }

    pub fn clear_screen(&self) {
        let Color { r, g, b, a } = Color::BLACK;
        self.context
            .clear_color(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0);
        self.context.clear(WebGlRenderingContext::COLOR_BUFFER_BIT);
    }

    pub fn render_backdrop(&mut self, backdrop: &Backdrop) -> Result<(), RenderError> {
        if let Some(starfield) = &backdrop.starfield {
            self.fill_flat(&starfield.stars, starfield.color);
            self.draw_flat(WebGlRenderingContext::POINTS)?;
        }
        if let Some(orbit) = &backdrop.orbit {
            self.fill_flat(&orbit.points(ORBIT_SEGMENTS), orbit.color);
            self.draw_flat(WebGlRenderingContext::LINE_LOOP)?;
        }
        Ok(())
    }

    pub fn render_particles<I>(&mut self, sprites: I) -> Result<(), RenderError>
    where
        I: IntoIterator<Item = Sprite>,
    {
        self.position_array.clear();
        self.size_array.clear();
        self.color_array.clear();
        for sprite in sprites {
            self.position_array.push(sprite.pos[0] as f32);
            self.position_array.push(sprite.pos[1] as f32);
            self.size_array.push((2.0 * sprite.radius * sprite.scale) as f32);
            self.color_array.extend_from_slice(&sprite.color.to_array());
        }
        if self.size_array.is_empty() {
            return Ok(());
        }

        let ctx = &self.context;
        ctx.use_program(Some(&self.sprite_shader));
        let position = webgl_helpers::attrib_location(ctx, &self.sprite_shader, "a_Position")?;
        let size = webgl_helpers::attrib_location(ctx, &self.sprite_shader, "a_Size")?;
        let color = webgl_helpers::attrib_location(ctx, &self.sprite_shader, "a_Color")?;
        webgl_helpers::bind_f32_attribute(ctx, &self.position_buffer, position, 2, &self.position_array);
        webgl_helpers::bind_f32_attribute(ctx, &self.size_buffer, size, 1, &self.size_array);
        webgl_helpers::bind_color_attribute(ctx, &self.color_buffer, color, &self.color_array);

        let u_proj = webgl_helpers::uniform_location(ctx, &self.sprite_shader, "u_Proj")?;
        ctx.uniform_matrix4fv_with_f32_array(Some(&u_proj), false, self.projection_mat.as_slice());

        ctx.draw_arrays(WebGlRenderingContext::POINTS, 0, self.size_array.len() as i32);
        for location in &[position, size, color] {
            ctx.disable_vertex_attrib_array(*location);
        }
        Ok(())
    }

    fn fill_flat(&mut self, points: &[[f64; 2]], color: Color) {
        self.position_array.clear();
        self.color_array.clear();
        for point in points {
            self.position_array.push(point[0] as f32);
            self.position_array.push(point[1] as f32);
            self.color_array.extend_from_slice(&color.to_array());
        }
    }

    fn draw_flat(&self, mode: u32) -> Result<(), RenderError> {
        let count = self.position_array.len() / 2;
        if count == 0 {
            return Ok(());
        }
        let ctx = &self.context;
        ctx.use_program(Some(&self.flat_shader));
        let position = webgl_helpers::attrib_location(ctx, &self.flat_shader, "a_Position")?;
        let color = webgl_helpers::attrib_location(ctx, &self.flat_shader, "a_Color")?;
        webgl_helpers::bind_f32_attribute(ctx, &self.position_buffer, position, 2, &self.position_array);
        webgl_helpers::bind_color_attribute(ctx, &self.color_buffer, color, &self.color_array);

        let u_proj = webgl_helpers::uniform_location(ctx, &self.flat_shader, "u_Proj")?;
        ctx.uniform_matrix4fv_with_f32_array(Some(&u_proj), false, self.projection_mat.as_slice());

        ctx.draw_arrays(mode, 0, count as i32);
        ctx.disable_vertex_attrib_array(position);
        ctx.disable_vertex_attrib_array(color);
        Ok(())
    }
}
