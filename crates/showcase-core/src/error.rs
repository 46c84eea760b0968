use thiserror::Error;

/// Failure while fetching or decoding a scene asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("HTTP {status} while fetching {url}")]
    Http { url: String, status: u16 },
    #[error("network error while fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("could not decode image {url}: {message}")]
    Image { url: String, message: String },
    #[error("cubemap face {face} is {width}x{height}, expected a square {expected}x{expected}")]
    FaceSize {
        face: &'static str,
        width: u32,
        height: u32,
        expected: u32,
    },
    #[error("expected 6 cubemap faces, got {0}")]
    FaceCount(usize),
    #[error("invalid glTF: {0}")]
    Gltf(String),
    #[error("glTF buffer {0} is not embedded in the GLB binary chunk")]
    ExternalBuffer(usize),
    #[error("glTF mesh has no POSITION attribute")]
    MissingPositions,
    #[error("model contains no triangle meshes")]
    EmptyModel,
}

impl From<gltf::Error> for AssetError {
    fn from(e: gltf::Error) -> Self {
        AssetError::Gltf(e.to_string())
    }
}

/// Invalid value in a URL query override.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}
