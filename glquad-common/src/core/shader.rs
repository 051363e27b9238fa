//! GLSL ES 1.00 sources for both variants.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
pub const SAMPLER_UNIFORM: &str = "uSampler";

pub const VERTEX_SHADER: &str = r#"
attribute vec4 aVertexPosition;
varying vec2 vTextureCoord;

void main(void) {
    gl_Position = aVertexPosition;
    vTextureCoord = aVertexPosition.xy * 0.5 + 0.5;
}
"#;

pub const GRAYSCALE_FRAGMENT_SHADER: &str = r#"
precision mediump float;
varying vec2 vTextureCoord;
uniform sampler2D uSampler;

void main(void) {
    vec4 color = texture2D(uSampler, vTextureCoord);
    float gray = dot(color.rgb, vec3(0.299, 0.587, 0.114));
    gl_FragColor = vec4(vec3(gray), color.a);
}
"#;

pub const GRADIENT_FRAGMENT_SHADER: &str = r#"
precision mediump float;
varying vec2 vTextureCoord;

void main(void) {
    float x = vTextureCoord.x;
    gl_FragColor = vec4(x, 0.0, 1.0 - x, 1.0);
}
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Which per-pixel transform the quad is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Sample the bound image and convert it to luminance.
    #[default]
    Grayscale,
    /// Red-to-blue ramp along the horizontal texture coordinate.
    Gradient,
}

impl Variant {
    pub fn sources(self) -> ShaderSources {
        let fragment = match self {
            Variant::Grayscale => GRAYSCALE_FRAGMENT_SHADER,
            Variant::Gradient => GRADIENT_FRAGMENT_SHADER,
        };
        ShaderSources {
            vertex: VERTEX_SHADER.to_string(),
            fragment: fragment.to_string(),
        }
    }

    pub fn uses_texture(self) -> bool {
        matches!(self, Variant::Grayscale)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Grayscale => "grayscale",
            Variant::Gradient => "gradient",
        })
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grayscale" => Ok(Variant::Grayscale),
            "gradient" => Ok(Variant::Gradient),
            other => Err(format!("unknown variant '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}
