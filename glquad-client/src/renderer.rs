mod context;
pub use context::{CanvasSurface, GlContext};

mod texture;
pub use texture::DomImage;
