use super::{colors, Color, ShaderSources, Variant};
use serde::{Deserialize, Serialize};

#[inline]
fn default_canvas_id() -> String {
    "glcanvas".to_string()
}

#[inline]
fn default_image_id() -> String {
    "main-pc.jpg".to_string()
}

#[inline]
fn default_clear_color() -> Color {
    colors::BLACK
}

#[inline]
fn default_log_level() -> String {
    "info".to_string()
}

/// Everything the setup sequence reads. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_canvas_id")]
    pub canvas_id: String,
    /// Element id of the source image; only read by [`Variant::Grayscale`].
    #[serde(default = "default_image_id")]
    pub image_id: String,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_clear_color")]
    pub clear_color: Color,
    /// Draw once before the texture is bound, then again after upload.
    #[serde(default)]
    pub eager_draw: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Replaces the variant's built-in shader pair.
    #[serde(default)]
    pub shaders: Option<ShaderSources>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_id: default_canvas_id(),
            image_id: default_image_id(),
            variant: Variant::default(),
            clear_color: default_clear_color(),
            eager_draw: false,
            log_level: default_log_level(),
            shaders: None,
        }
    }
}

impl RenderConfig {
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn shader_sources(&self) -> ShaderSources {
        self.shaders
            .clone()
            .unwrap_or_else(|| self.variant.sources())
    }

    /// Parsed `log_level`, falling back to `Info` on garbage.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
