// Helper functions for dealing with shaders, buffers and attribute bindings

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{WebGlBuffer, WebGlProgram, WebGlRenderingContext, WebGlShader, WebGlUniformLocation};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("WebGL context unavailable on canvas")]
    ContextUnavailable,

    #[error("shader compilation failed: {0}")]
    Shader(String),

    #[error("program link failed: {0}")]
    Link(String),

    #[error("unable to create {0}")]
    Resource(&'static str),

    #[error("attribute '{0}' not found in program")]
    MissingAttribute(&'static str),

    #[error("uniform '{0}' not found in program")]
    MissingUniform(&'static str),
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

pub fn compile_shader(
    context: &WebGlRenderingContext,
    shader_type: u32,
    source: &str,
) -> Result<WebGlShader, RenderError> {
    let shader = context
        .create_shader(shader_type)
        .ok_or(RenderError::Resource("shader object"))?;
    context.shader_source(&shader, source);
    context.compile_shader(&shader);

    if context
        .get_shader_parameter(&shader, WebGlRenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(RenderError::Shader(
            context
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| String::from("unknown error")),
        ))
    }
}

/// Compiles both stages and links them into a program.
pub fn build_program(
    context: &WebGlRenderingContext,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<WebGlProgram, RenderError> {
    let vertex_shader = compile_shader(context, WebGlRenderingContext::VERTEX_SHADER, vertex_source)?;
    let fragment_shader = compile_shader(context, WebGlRenderingContext::FRAGMENT_SHADER, fragment_source)?;
    let program = context
        .create_program()
        .ok_or(RenderError::Resource("program object"))?;
    context.attach_shader(&program, &vertex_shader);
    context.attach_shader(&program, &fragment_shader);
    context.link_program(&program);

    if context
        .get_program_parameter(&program, WebGlRenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(RenderError::Link(
            context
                .get_program_info_log(&program)
                .unwrap_or_else(|| String::from("unknown error")),
        ))
    }
}

pub fn create_buffer(context: &WebGlRenderingContext) -> Result<WebGlBuffer, RenderError> {
    context.create_buffer().ok_or(RenderError::Resource("buffer"))
}

pub fn attrib_location(
    context: &WebGlRenderingContext,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<u32, RenderError> {
    let location = context.get_attrib_location(program, name);
    if location < 0 {
        Err(RenderError::MissingAttribute(name))
    } else {
        Ok(location as u32)
    }
}

pub fn uniform_location(
    context: &WebGlRenderingContext,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, RenderError> {
    context
        .get_uniform_location(program, name)
        .ok_or(RenderError::MissingUniform(name))
}

// Uploads `data` into `buffer` and points the attribute at it, tightly packed
pub fn bind_f32_attribute(
    context: &WebGlRenderingContext,
    buffer: &WebGlBuffer,
    location: u32,
    components: i32,
    data: &[f32],
) {
    context.bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(buffer));
    unsafe {
        let view = js_sys::Float32Array::view(data);
        context.buffer_data_with_array_buffer_view(
            WebGlRenderingContext::ARRAY_BUFFER,
            &view,
            WebGlRenderingContext::DYNAMIC_DRAW,
        );
    }
    context.vertex_attrib_pointer_with_i32(location, components, WebGlRenderingContext::FLOAT, false, 0, 0);
    context.enable_vertex_attrib_array(location);
}

// Same as above for normalized RGBA8 colors
pub fn bind_color_attribute(context: &WebGlRenderingContext, buffer: &WebGlBuffer, location: u32, data: &[u8]) {
    context.bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(buffer));
    unsafe {
        let view = js_sys::Uint8Array::view(data);
        context.buffer_data_with_array_buffer_view(
            WebGlRenderingContext::ARRAY_BUFFER,
            &view,
            WebGlRenderingContext::DYNAMIC_DRAW,
        );
    }
    context.vertex_attrib_pointer_with_i32(location, 4, WebGlRenderingContext::UNSIGNED_BYTE, true, 0, 0);
    context.enable_vertex_attrib_array(location);
}
