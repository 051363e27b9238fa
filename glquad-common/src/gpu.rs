//! The narrow slice of a GL context the setup sequence needs.
//!
//! The browser client implements these traits over `WebGlRenderingContext`;
//! tests implement them with a call recorder.

use crate::core::{Color, ShaderStage, VertexLayout};
use std::future::Future;

/// Texture unit the sampled image is bound to.
pub const TEXTURE_UNIT: u32 = 0;

/// Which buffers a clear touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearMask {
    pub color: bool,
    pub depth: bool,
}

impl ClearMask {
    pub const COLOR: ClearMask = ClearMask {
        color: true,
        depth: false,
    };
    pub const COLOR_DEPTH: ClearMask = ClearMask {
        color: true,
        depth: true,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrap {
    ClampToEdge,
    Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    Linear,
}

/// Sampler state and unpack flags applied when an image is uploaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureParams {
    pub flip_y: bool,
    pub wrap: Wrap,
    pub filter: Filter,
    pub unit: u32,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            flip_y: true,
            wrap: Wrap::ClampToEdge,
            filter: Filter::Linear,
            unit: TEXTURE_UNIT,
        }
    }
}

pub trait Gpu {
    type Shader;
    type Program;
    type Buffer;
    type Texture;
    type Uniform;
    type Image;

    fn set_viewport(&self, width: u32, height: u32);
    fn clear(&self, color: Color, mask: ClearMask);

    /// Compile one stage. `Err` carries the driver's info log.
    fn create_shader(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;
    /// Link two compiled stages. `Err` carries the driver's info log.
    fn create_program(
        &self,
        vert: &Self::Shader,
        frag: &Self::Shader,
    ) -> Result<Self::Program, String>;
    fn use_program(&self, program: &Self::Program);
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::Uniform>;
    fn enable_attrib(&self, index: u32);

    /// Upload `data` into a new `STATIC_DRAW` array buffer.
    fn create_vertex_buffer(&self, data: &[f32]) -> Option<Self::Buffer>;
    fn bind_attrib(&self, buffer: &Self::Buffer, index: u32, layout: VertexLayout);

    fn create_texture(
        &self,
        image: &Self::Image,
        params: &TextureParams,
    ) -> Result<Self::Texture, String>;
    fn bind_texture(&self, texture: &Self::Texture, unit: u32);
    fn set_sampler(&self, uniform: &Self::Uniform, unit: u32);

    fn draw_triangle_strip(&self, count: i32);
}

/// Something that can hand out a rendering context, typically a canvas.
pub trait Surface {
    type Gpu: Gpu;

    fn size(&self) -> (u32, u32);
    fn acquire(&self) -> Result<Self::Gpu, String>;
}

/// An image that may still be decoding when setup starts.
pub trait ImageSource {
    type Image;

    fn is_complete(&self) -> bool;
    /// Resolves once the image has finished loading.
    fn loaded(&self) -> impl Future<Output = Result<(), String>>;
    fn image(&self) -> &Self::Image;
}
