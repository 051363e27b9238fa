//! glquad - platform-independent core: mesh, shaders, color transforms and
//! the setup sequence, generic over the GPU seam in [`gpu`].

pub mod core;
pub mod gpu;
pub mod pipeline;
pub mod raster;
pub mod session;

#[cfg(test)]
mod testing;

pub use crate::core::{RenderConfig, SetupError, Variant};
pub use session::{start, Session};
