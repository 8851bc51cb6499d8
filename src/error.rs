use std::path::PathBuf;

use lgl_core::{ConfigError, LayoutError, SamplingError};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to initialize OpenGL context: {0}")]
    Context(String),
    #[error("{stage} shader compilation failed:\n{log}")]
    ShaderCompile { stage: &'static str, log: String },
    #[error("shader program linking failed:\n{0}")]
    ProgramLink(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    InvalidTextureOptions(#[from] SamplingError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("asset '{0}' not found")]
    MissingAsset(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("OpenGL error: {0}")]
    Gl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::ShaderCompile {
            stage: "vertex",
            log: "0:1: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "vertex shader compilation failed:\n0:1: syntax error"
        );

        let err: Error = SamplingError::MipmapsDisabled(lgl_core::Filter::LinearMipmapLinear).into();
        assert!(err.to_string().contains("needs mipmaps"));

        let err: Error = LayoutError::IndexOutOfRange {
            index: 7,
            vertex_count: 3,
        }
        .into();
        assert!(matches!(err, Error::Layout(_)));
        assert_eq!(err.to_string(), "index 7 is out of range for 3 vertices");

        let err = Error::MissingAsset("textures/nope.png".to_string());
        assert_eq!(err.to_string(), "asset 'textures/nope.png' not found");
    }
}
