//! Call-recording stand-ins for the GPU seam.

use crate::core::{Color, ShaderStage, VertexLayout};
use crate::gpu::{ClearMask, Gpu, ImageSource, Surface, TextureParams};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Viewport(u32, u32),
    Clear(ClearMask),
    CreateShader(ShaderStage),
    CreateProgram,
    UseProgram,
    EnableAttrib(u32),
    CreateBuffer(Vec<f32>),
    BindAttrib(u32, VertexLayout),
    CreateTexture(TextureParams),
    BindTexture(u32),
    SetSampler(u32),
    Draw(i32),
}

#[derive(Clone, Default)]
pub struct RecordingGpu {
    log: Rc<RefCell<Vec<Call>>>,
    fail_stage: Option<ShaderStage>,
    fail_link: bool,
    next_id: Rc<Cell<u32>>,
    fragment_source: Rc<RefCell<String>>,
}

impl RecordingGpu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_compile(mut self, stage: ShaderStage) -> Self {
        self.fail_stage = Some(stage);
        self
    }

    pub fn fail_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }

    fn id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl Gpu for RecordingGpu {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type Texture = u32;
    type Uniform = String;
    type Image = ();

    fn set_viewport(&self, width: u32, height: u32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear(&self, _color: Color, mask: ClearMask) {
        self.record(Call::Clear(mask));
    }

    fn create_shader(&self, stage: ShaderStage, source: &str) -> Result<u32, String> {
        self.record(Call::CreateShader(stage));
        if stage == ShaderStage::Fragment {
            *self.fragment_source.borrow_mut() = source.to_string();
        }
        if self.fail_stage == Some(stage) || source.is_empty() {
            return Err(format!("ERROR: 0:1: '{}' : syntax error", stage));
        }
        Ok(self.id())
    }

    fn create_program(&self, _vert: &u32, _frag: &u32) -> Result<u32, String> {
        self.record(Call::CreateProgram);
        if self.fail_link {
            return Err("varying vTextureCoord not written".to_string());
        }
        Ok(self.id())
    }

    fn use_program(&self, _program: &u32) {
        self.record(Call::UseProgram);
    }

    fn attrib_location(&self, _program: &u32, _name: &str) -> Option<u32> {
        Some(0)
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<String> {
        // GL drops uniforms the fragment stage never reads.
        self.fragment_source
            .borrow()
            .contains(name)
            .then(|| name.to_string())
    }

    fn enable_attrib(&self, index: u32) {
        self.record(Call::EnableAttrib(index));
    }

    fn create_vertex_buffer(&self, data: &[f32]) -> Option<u32> {
        self.record(Call::CreateBuffer(data.to_vec()));
        Some(self.id())
    }

    fn bind_attrib(&self, _buffer: &u32, index: u32, layout: VertexLayout) {
        self.record(Call::BindAttrib(index, layout));
    }

    fn create_texture(&self, _image: &(), params: &TextureParams) -> Result<u32, String> {
        self.record(Call::CreateTexture(*params));
        Ok(self.id())
    }

    fn bind_texture(&self, _texture: &u32, unit: u32) {
        self.record(Call::BindTexture(unit));
    }

    fn set_sampler(&self, _uniform: &String, unit: u32) {
        self.record(Call::SetSampler(unit));
    }

    fn draw_triangle_strip(&self, count: i32) {
        self.record(Call::Draw(count));
    }
}

/// Canvas stand-in; hands out a [`RecordingGpu`] sharing one call log.
pub struct RecordingSurface {
    gpu: Option<RecordingGpu>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            gpu: Some(RecordingGpu::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self { gpu: None }
    }

    pub fn fail_compile(self, stage: ShaderStage) -> Self {
        Self {
            gpu: self.gpu.map(|gpu| gpu.fail_compile(stage)),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.gpu.as_ref().map(RecordingGpu::calls).unwrap_or_default()
    }
}

impl Surface for RecordingSurface {
    type Gpu = RecordingGpu;

    fn size(&self) -> (u32, u32) {
        (300, 150)
    }

    fn acquire(&self) -> Result<RecordingGpu, String> {
        self.gpu
            .clone()
            .ok_or_else(|| "WebGL not supported".to_string())
    }
}

/// Image whose load completion is driven by the test.
pub struct TestImage {
    complete: bool,
    pending: RefCell<Option<oneshot::Receiver<Result<(), String>>>>,
}

impl TestImage {
    pub fn complete() -> Self {
        Self {
            complete: true,
            pending: RefCell::new(None),
        }
    }

    pub fn pending() -> (Self, oneshot::Sender<Result<(), String>>) {
        let (tx, rx) = oneshot::channel();
        let image = Self {
            complete: false,
            pending: RefCell::new(Some(rx)),
        };
        (image, tx)
    }
}

impl ImageSource for TestImage {
    type Image = ();

    fn is_complete(&self) -> bool {
        self.complete
    }

    async fn loaded(&self) -> Result<(), String> {
        let rx = self.pending.borrow_mut().take();
        match rx {
            Some(rx) => rx.await.map_err(|_| "load cancelled".to_string())?,
            None => Ok(()),
        }
    }

    fn image(&self) -> &() {
        &()
    }
}
