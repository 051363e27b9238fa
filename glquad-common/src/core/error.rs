use super::ShaderStage;
use thiserror::Error;

/// Every way the setup sequence can stop. All of them are terminal for the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("unable to initialize WebGL: {0}")]
    ContextUnavailable(String),

    #[error("an error occurred compiling the {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("unable to initialize the shader program: {log}")]
    Link { log: String },

    #[error("failed to create {0}")]
    Resource(&'static str),

    #[error("image element '{0}' not found")]
    MissingImage(String),

    #[error("image failed to load: {0}")]
    ImageLoad(String),
}

impl SetupError {
    /// Stage that failed to compile, if this is a compile error.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            SetupError::Compile { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
