use glquad_common::core::{Color, ShaderStage, VertexLayout};
use glquad_common::gpu::{ClearMask, Filter, Gpu, Surface, TextureParams, Wrap};
use wasm_bindgen::prelude::*;
use web_sys::{
    HtmlCanvasElement, HtmlImageElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext,
    WebGlShader, WebGlTexture, WebGlUniformLocation,
};

/// Context names tried in order.
const CONTEXT_KINDS: [&str; 2] = ["webgl", "experimental-webgl"];

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn find(canvas_id: &str) -> Result<Self, String> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        let document = window
            .document()
            .ok_or("should have a document on window")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or(format!("canvas element '{}' not found", canvas_id))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| format!("element '{}' is not a canvas", canvas_id))?;
        Ok(Self { canvas })
    }
}

impl Surface for CanvasSurface {
    type Gpu = GlContext;

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn acquire(&self) -> Result<GlContext, String> {
        let context = CONTEXT_KINDS
            .iter()
            .find_map(|kind| match self.canvas.get_context(kind) {
                Ok(ctx) => ctx,
                Err(e) => {
                    log::warn!("getContext('{}') threw: {:?}", kind, e);
                    None
                }
            })
            .ok_or("WebGL not supported")?;

        let gl = context
            .dyn_into::<WebGlRenderingContext>()
            .map_err(|_| String::from("context is not a WebGlRenderingContext"))?;

        let (width, height) = self.size();
        Ok(GlContext { gl, width, height })
    }
}

pub struct GlContext {
    pub gl: WebGlRenderingContext,
    pub width: u32,
    pub height: u32,
}

pub(crate) fn shader_kind(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => WebGlRenderingContext::VERTEX_SHADER,
        ShaderStage::Fragment => WebGlRenderingContext::FRAGMENT_SHADER,
    }
}

pub(crate) fn clear_bits(mask: ClearMask) -> u32 {
    let mut bits = 0;
    if mask.color {
        bits |= WebGlRenderingContext::COLOR_BUFFER_BIT;
    }
    if mask.depth {
        bits |= WebGlRenderingContext::DEPTH_BUFFER_BIT;
    }
    bits
}

pub(crate) fn wrap_mode(wrap: Wrap) -> i32 {
    match wrap {
        Wrap::ClampToEdge => WebGlRenderingContext::CLAMP_TO_EDGE as i32,
        Wrap::Repeat => WebGlRenderingContext::REPEAT as i32,
    }
}

pub(crate) fn filter_mode(filter: Filter) -> i32 {
    match filter {
        Filter::Nearest => WebGlRenderingContext::NEAREST as i32,
        Filter::Linear => WebGlRenderingContext::LINEAR as i32,
    }
}

impl Gpu for GlContext {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Texture = WebGlTexture;
    type Uniform = WebGlUniformLocation;
    type Image = HtmlImageElement;

    fn set_viewport(&self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn clear(&self, color: Color, mask: ClearMask) {
        self.gl.clear_color(color.r, color.g, color.b, color.a);
        self.gl.clear(clear_bits(mask));
    }

    fn create_shader(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader, String> {
        let shader = self
            .gl
            .create_shader(shader_kind(stage))
            .ok_or_else(|| String::from("Unable to create shader object"))?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        if self
            .gl
            .get_shader_parameter(&shader, WebGlRenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(shader)
        } else {
            Err(self
                .gl
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| String::from("Unknown error creating shader")))
        }
    }

    fn create_program(
        &self,
        vert: &WebGlShader,
        frag: &WebGlShader,
    ) -> Result<WebGlProgram, String> {
        let program = self
            .gl
            .create_program()
            .ok_or_else(|| String::from("Unable to create shader program"))?;
        self.gl.attach_shader(&program, vert);
        self.gl.attach_shader(&program, frag);
        self.gl.link_program(&program);

        if self
            .gl
            .get_program_parameter(&program, WebGlRenderingContext::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(program)
        } else {
            Err(self
                .gl
                .get_program_info_log(&program)
                .unwrap_or_else(|| String::from("Unknown error creating program")))
        }
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        let loc = self.gl.get_attrib_location(program, name);
        (loc >= 0).then_some(loc as u32)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn enable_attrib(&self, index: u32) {
        self.gl.enable_vertex_attrib_array(index);
    }

    fn create_vertex_buffer(&self, data: &[f32]) -> Option<WebGlBuffer> {
        let buffer = self.gl.create_buffer()?;
        self.gl
            .bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(&buffer));
        let array = js_sys::Float32Array::from(data);
        self.gl.buffer_data_with_array_buffer_view(
            WebGlRenderingContext::ARRAY_BUFFER,
            &array,
            WebGlRenderingContext::STATIC_DRAW,
        );
        Some(buffer)
    }

    fn bind_attrib(&self, buffer: &WebGlBuffer, index: u32, layout: VertexLayout) {
        self.gl
            .bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(buffer));
        self.gl.vertex_attrib_pointer_with_i32(
            index,
            layout.size,
            WebGlRenderingContext::FLOAT,
            false,
            layout.stride,
            layout.offset,
        );
    }

    fn create_texture(
        &self,
        image: &HtmlImageElement,
        params: &TextureParams,
    ) -> Result<WebGlTexture, String> {
        let texture = self
            .gl
            .create_texture()
            .ok_or_else(|| String::from("failed to create texture"))?;
        self.gl
            .active_texture(WebGlRenderingContext::TEXTURE0 + params.unit);
        self.gl
            .bind_texture(WebGlRenderingContext::TEXTURE_2D, Some(&texture));

        self.gl.pixel_storei(
            WebGlRenderingContext::UNPACK_FLIP_Y_WEBGL,
            params.flip_y as i32,
        );

        let wrap = wrap_mode(params.wrap);
        let filter = filter_mode(params.filter);
        for (pname, value) in [
            (WebGlRenderingContext::TEXTURE_WRAP_S, wrap),
            (WebGlRenderingContext::TEXTURE_WRAP_T, wrap),
            (WebGlRenderingContext::TEXTURE_MIN_FILTER, filter),
            (WebGlRenderingContext::TEXTURE_MAG_FILTER, filter),
        ] {
            self.gl
                .tex_parameteri(WebGlRenderingContext::TEXTURE_2D, pname, value);
        }

        self.gl
            .tex_image_2d_with_u32_and_u32_and_image(
                WebGlRenderingContext::TEXTURE_2D,
                0,
                WebGlRenderingContext::RGBA as i32,
                WebGlRenderingContext::RGBA,
                WebGlRenderingContext::UNSIGNED_BYTE,
                image,
            )
            .map_err(|e| format!("texImage2D failed: {:?}", e))?;

        log::debug!(
            "uploaded {}x{} image to unit {}",
            image.natural_width(),
            image.natural_height(),
            params.unit
        );
        Ok(texture)
    }

    fn bind_texture(&self, texture: &WebGlTexture, unit: u32) {
        self.gl.active_texture(WebGlRenderingContext::TEXTURE0 + unit);
        self.gl
            .bind_texture(WebGlRenderingContext::TEXTURE_2D, Some(texture));
    }

    fn set_sampler(&self, uniform: &WebGlUniformLocation, unit: u32) {
        self.gl.uniform1i(Some(uniform), unit as i32);
    }

    fn draw_triangle_strip(&self, count: i32) {
        self.gl
            .draw_arrays(WebGlRenderingContext::TRIANGLE_STRIP, 0, count);
    }
}
