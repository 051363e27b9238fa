use crate::core::{
    QuadMesh, SetupError, ShaderSources, ShaderStage, POSITION_ATTRIBUTE, SAMPLER_UNIFORM,
};
use crate::gpu::{Gpu, TextureParams};

/// A linked program plus the locations the frame renderer needs.
pub struct Pipeline<G: Gpu> {
    pub program: G::Program,
    pub position: u32,
    pub sampler: Option<G::Uniform>,
}

impl<G: Gpu> Pipeline<G> {
    /// Compile both stages and link them. The first failure aborts the build.
    pub fn build(gpu: &G, sources: &ShaderSources) -> Result<Self, SetupError> {
        let vert = compile(gpu, ShaderStage::Vertex, sources)?;
        let frag = compile(gpu, ShaderStage::Fragment, sources)?;

        let program = gpu.create_program(&vert, &frag).map_err(|log| {
            let err = SetupError::Link { log };
            log::error!("{}", err);
            err
        })?;

        gpu.use_program(&program);
        let position = gpu
            .attrib_location(&program, POSITION_ATTRIBUTE)
            .ok_or(SetupError::Resource("position attribute"))?;
        gpu.enable_attrib(position);

        // Absent for shaders that never sample.
        let sampler = gpu.uniform_location(&program, SAMPLER_UNIFORM);

        log::debug!(
            "pipeline linked (position={}, sampler={})",
            position,
            sampler.is_some()
        );

        Ok(Self {
            program,
            position,
            sampler,
        })
    }
}

fn compile<G: Gpu>(
    gpu: &G,
    stage: ShaderStage,
    sources: &ShaderSources,
) -> Result<G::Shader, SetupError> {
    gpu.create_shader(stage, sources.source(stage))
        .map_err(|log| {
            let err = SetupError::Compile { stage, log };
            log::error!("{}", err);
            err
        })
}

/// The static quad once it lives on the GPU.
pub struct QuadBuffer<G: Gpu> {
    pub buffer: G::Buffer,
    pub mesh: QuadMesh,
}

impl<G: Gpu> QuadBuffer<G> {
    pub fn upload(gpu: &G) -> Result<Self, SetupError> {
        let mesh = QuadMesh;
        let buffer = gpu
            .create_vertex_buffer(mesh.vertices())
            .ok_or(SetupError::Resource("vertex buffer"))?;
        Ok(Self { buffer, mesh })
    }

    pub fn count(&self) -> i32 {
        self.mesh.item_count() as i32
    }
}

/// Upload a decoded image with the quad's sampler state.
pub fn upload_texture<G: Gpu>(gpu: &G, image: &G::Image) -> Result<G::Texture, SetupError> {
    let params = TextureParams::default();
    let texture = gpu.create_texture(image, &params).map_err(|e| {
        log::error!("texture upload failed: {}", e);
        SetupError::Resource("texture")
    })?;
    gpu.bind_texture(&texture, params.unit);
    Ok(texture)
}
