//! Browser entry point: draws the configured quad on a `<canvas>`.
//!
//! Call `start()` (optionally with a config object) once the page has loaded.

use glquad_common::{RenderConfig, Session, SetupError};
use wasm_bindgen::prelude::*;

mod renderer;
use renderer::{CanvasSurface, DomImage, GlContext};

const CONTEXT_ALERT: &str = "Unable to initialize WebGL. Your browser may not support it.";

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn init_logging(level: log::Level) {
    // A second `start()` on the same page keeps the first logger.
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

fn alert_context_failure() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(CONTEXT_ALERT);
    }
}

fn to_js(err: SetupError) -> JsValue {
    if matches!(err, SetupError::ContextUnavailable(_)) {
        alert_context_failure();
    }
    JsValue::from_str(&err.to_string())
}

/// A drawn quad. Holds every GPU resource for the page's lifetime.
#[wasm_bindgen]
pub struct QuadView {
    session: Session<GlContext>,
}

#[wasm_bindgen]
impl QuadView {
    /// Clear and draw again with the same resources.
    pub fn render(&mut self) {
        self.session.draw();
    }

    pub fn frames_drawn(&self) -> u32 {
        self.session.frames_drawn()
    }

    pub fn variant(&self) -> String {
        self.session.variant().to_string()
    }

    pub fn width(&self) -> u32 {
        self.session.gpu().width
    }

    pub fn height(&self) -> u32 {
        self.session.gpu().height
    }
}

/// Acquire the context, build the pipeline, wait for the image if needed and draw.
///
/// `config` may be `undefined` or a partial `RenderConfig` object.
#[wasm_bindgen]
pub async fn start(config: JsValue) -> Result<QuadView, JsValue> {
    let config: RenderConfig = if config.is_undefined() || config.is_null() {
        RenderConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    init_logging(config.log_level());
    log::info!(
        "glquad: {} on canvas '{}'",
        config.variant,
        config.canvas_id
    );

    let surface = CanvasSurface::find(&config.canvas_id)
        .map_err(|e| {
            let err = SetupError::ContextUnavailable(e);
            log::error!("{}", err);
            to_js(err)
        })?;

    let image = if config.variant.uses_texture() {
        DomImage::find(&config.image_id)
    } else {
        None
    };

    let session = glquad_common::start(&surface, &config, image.as_ref())
        .await
        .map_err(to_js)?;

    Ok(QuadView { session })
}
