mod color;
pub use color::*;

mod config;
pub use config::RenderConfig;

mod error;
pub use error::SetupError;

mod mesh;
pub use mesh::*;

mod shader;
pub use shader::*;
