//! Setup orchestration: context, pipeline, optional image wait, draw.

use crate::core::{Color, RenderConfig, SetupError, Variant};
use crate::gpu::{ClearMask, Gpu, ImageSource, Surface, TEXTURE_UNIT};
use crate::pipeline::{upload_texture, Pipeline, QuadBuffer};

/// Handle to a fully built pipeline. Returned by [`start`].
pub struct Session<G: Gpu> {
    gpu: G,
    pipeline: Pipeline<G>,
    quad: QuadBuffer<G>,
    texture: Option<G::Texture>,
    variant: Variant,
    clear_color: Color,
    frames: u32,
}

impl<G: Gpu> Session<G> {
    /// Clear and draw the quad once. Safe to call any number of times.
    pub fn draw(&mut self) {
        let gpu = &self.gpu;
        gpu.clear(self.clear_color, ClearMask::COLOR_DEPTH);
        gpu.bind_attrib(
            &self.quad.buffer,
            self.pipeline.position,
            self.quad.mesh.position_layout(),
        );
        if let (Some(sampler), Some(texture)) = (&self.pipeline.sampler, &self.texture) {
            gpu.bind_texture(texture, TEXTURE_UNIT);
            gpu.set_sampler(sampler, TEXTURE_UNIT);
        }
        gpu.draw_triangle_strip(self.quad.count());
        self.frames += 1;
    }

    /// Upload `image` to texture unit 0, replacing any previous texture.
    pub fn attach_texture(&mut self, image: &G::Image) -> Result<(), SetupError> {
        self.texture = Some(upload_texture(&self.gpu, image)?);
        Ok(())
    }

    pub fn frames_drawn(&self) -> u32 {
        self.frames
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn gpu(&self) -> &G {
        &self.gpu
    }
}

/// Run the whole setup sequence once.
///
/// `image` is only consulted for [`Variant::Grayscale`]. If it is already
/// complete the returned future finishes on its first poll; otherwise it
/// suspends exactly once, on [`ImageSource::loaded`].
pub async fn start<S, I>(
    surface: &S,
    config: &RenderConfig,
    image: Option<&I>,
) -> Result<Session<S::Gpu>, SetupError>
where
    S: Surface,
    I: ImageSource<Image = <S::Gpu as Gpu>::Image>,
{
    let gpu = surface.acquire().map_err(|e| {
        let err = SetupError::ContextUnavailable(e);
        log::error!("{}", err);
        err
    })?;

    let (width, height) = surface.size();
    gpu.set_viewport(width, height);
    gpu.clear(config.clear_color, ClearMask::COLOR);

    let pipeline = Pipeline::build(&gpu, &config.shader_sources())?;
    let quad = QuadBuffer::upload(&gpu)?;

    let mut session = Session {
        gpu,
        pipeline,
        quad,
        texture: None,
        variant: config.variant,
        clear_color: config.clear_color,
        frames: 0,
    };

    if !config.variant.uses_texture() {
        session.draw();
        log::info!("{} quad drawn", config.variant);
        return Ok(session);
    }

    let image = image.ok_or_else(|| {
        let err = SetupError::MissingImage(config.image_id.clone());
        log::error!("{}", err);
        err
    })?;

    if config.eager_draw {
        session.draw();
    }

    if !image.is_complete() {
        log::debug!("waiting for image '{}'", config.image_id);
        image.loaded().await.map_err(|e| {
            let err = SetupError::ImageLoad(e);
            log::error!("{}", err);
            err
        })?;
    }

    session.attach_texture(image.image())?;
    session.draw();
    log::info!(
        "{} quad drawn ({} frame(s))",
        config.variant,
        session.frames_drawn()
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShaderStage;
    use crate::testing::{Call, RecordingSurface, TestImage};
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll};

    fn draws(calls: &[Call]) -> usize {
        calls.iter().filter(|c| matches!(c, Call::Draw(_))).count()
    }

    fn position_of(calls: &[Call], wanted: &Call) -> usize {
        calls.iter().position(|c| c == wanted).unwrap()
    }

    #[test]
    fn test_no_context_halts_setup() {
        let surface = RecordingSurface::unavailable();
        let config = RenderConfig::default();
        let image = TestImage::complete();
        let err = block_on(start(&surface, &config, Some(&image)))
            .err()
            .unwrap();
        assert!(matches!(err, SetupError::ContextUnavailable(_)));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_compile_failure_halts_before_draw() {
        let surface = RecordingSurface::new().fail_compile(ShaderStage::Fragment);
        let config = RenderConfig::with_variant(Variant::Gradient);
        let err = block_on(start(&surface, &config, None::<&TestImage>))
            .err()
            .unwrap();
        assert_eq!(err.stage(), Some(ShaderStage::Fragment));
        let calls = surface.calls();
        assert_eq!(draws(&calls), 0);
        assert!(!calls.iter().any(|c| matches!(c, Call::CreateBuffer(_))));
    }

    #[test]
    fn test_gradient_draws_once() {
        let surface = RecordingSurface::new();
        let config = RenderConfig::with_variant(Variant::Gradient);
        let session = block_on(start(&surface, &config, None::<&TestImage>)).unwrap();
        assert_eq!(session.frames_drawn(), 1);
        assert!(!session.has_texture());

        let calls = surface.calls();
        assert_eq!(calls[0], Call::Viewport(300, 150));
        assert_eq!(calls[1], Call::Clear(ClearMask::COLOR));
        assert_eq!(draws(&calls), 1);
        assert_eq!(calls.last(), Some(&Call::Draw(4)));
        assert!(!calls.iter().any(|c| matches!(c, Call::SetSampler(_))));
    }

    #[test]
    fn test_grayscale_loaded_image_draws_once_after_upload() {
        let surface = RecordingSurface::new();
        let config = RenderConfig::default();
        let image = TestImage::complete();
        let session = start(&surface, &config, Some(&image))
            .now_or_never()
            .expect("setup should not suspend on a loaded image")
            .unwrap();
        assert_eq!(session.frames_drawn(), 1);
        assert!(session.has_texture());

        let calls = surface.calls();
        assert_eq!(draws(&calls), 1);
        let upload = position_of(&calls, &Call::CreateTexture(Default::default()));
        let draw = position_of(&calls, &Call::Draw(4));
        assert!(upload < draw);
        assert!(calls.contains(&Call::SetSampler(0)));
    }

    #[test]
    fn test_eager_draw_with_loaded_image_draws_twice() {
        let surface = RecordingSurface::new();
        let config = RenderConfig {
            eager_draw: true,
            ..Default::default()
        };
        let image = TestImage::complete();
        let session = start(&surface, &config, Some(&image))
            .now_or_never()
            .expect("setup should finish within the call")
            .unwrap();
        assert_eq!(session.frames_drawn(), 2);

        let calls = surface.calls();
        assert_eq!(draws(&calls), 2);
        let first_draw = position_of(&calls, &Call::Draw(4));
        let upload = position_of(&calls, &Call::CreateTexture(Default::default()));
        assert!(first_draw < upload);
        assert_eq!(calls.last(), Some(&Call::Draw(4)));
    }

    #[test]
    fn test_pending_image_resumes_once() {
        let surface = RecordingSurface::new();
        let config = RenderConfig::default();
        let (image, loaded) = TestImage::pending();

        let mut fut = pin!(start(&surface, &config, Some(&image)));
        let mut cx = Context::from_waker(futures::task::noop_waker_ref());
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        assert_eq!(draws(&surface.calls()), 0);
        assert!(!surface
            .calls()
            .iter()
            .any(|c| matches!(c, Call::CreateTexture(_))));

        loaded.send(Ok(())).unwrap();
        let session = match fut.as_mut().poll(&mut cx) {
            Poll::Ready(result) => result.unwrap(),
            Poll::Pending => panic!("setup should resume after the image loads"),
        };
        assert_eq!(session.frames_drawn(), 1);
        assert_eq!(draws(&surface.calls()), 1);
    }

    #[test]
    fn test_image_error_is_terminal() {
        let surface = RecordingSurface::new();
        let config = RenderConfig::default();
        let (image, loaded) = TestImage::pending();
        loaded.send(Err("404".to_string())).unwrap();
        let err = block_on(start(&surface, &config, Some(&image)))
            .err()
            .unwrap();
        assert_eq!(err, SetupError::ImageLoad("404".to_string()));
        assert_eq!(draws(&surface.calls()), 0);
    }

    #[test]
    fn test_missing_image() {
        let surface = RecordingSurface::new();
        let config = RenderConfig::default();
        let err = block_on(start(&surface, &config, None::<&TestImage>))
            .err()
            .unwrap();
        assert_eq!(err, SetupError::MissingImage("main-pc.jpg".to_string()));
    }

    #[test]
    fn test_redraw_is_repeatable() {
        let surface = RecordingSurface::new();
        let config = RenderConfig::default();
        let image = TestImage::complete();
        let mut session = block_on(start(&surface, &config, Some(&image))).unwrap();
        session.draw();
        session.draw();
        assert_eq!(session.frames_drawn(), 3);
        let calls = surface.calls();
        assert_eq!(draws(&calls), 3);
        let clears = calls
            .iter()
            .filter(|c| **c == Call::Clear(ClearMask::COLOR_DEPTH))
            .count();
        assert_eq!(clears, 3);
    }
}
