use crate::constants::CUBEMAP_FACE_EXT;
use crate::error::AssetError;

/// Face file names in upload order (layer 0..5).
pub const CUBE_FACES: [&str; 6] = ["left", "right", "up", "down", "front", "back"];

pub fn cubemap_face_urls(dir: &str) -> [String; 6] {
    let base = dir.trim_end_matches('/');
    CUBE_FACES.map(|face| format!("{base}/{face}.{CUBEMAP_FACE_EXT}"))
}

/// One decoded RGBA8 face.
#[derive(Clone, Debug)]
pub struct RgbaFace {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Six square faces of equal size, ready for a 6-layer texture upload.
#[derive(Clone, Debug)]
pub struct CubemapImage {
    pub face_size: u32,
    pub faces: Vec<Vec<u8>>,
}

pub fn decode_face(url: &str, bytes: &[u8]) -> Result<RgbaFace, AssetError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| AssetError::Image {
            url: url.to_string(),
            message: e.to_string(),
        })?
        .to_rgba8();
    Ok(RgbaFace {
        width: img.width(),
        height: img.height(),
        pixels: img.into_raw(),
    })
}

impl CubemapImage {
    /// Validate and assemble faces given in [`CUBE_FACES`] order.
    pub fn from_faces(faces: Vec<RgbaFace>) -> Result<Self, AssetError> {
        if faces.len() != CUBE_FACES.len() {
            return Err(AssetError::FaceCount(faces.len()));
        }
        let expected = faces[0].width;
        for (face, name) in faces.iter().zip(CUBE_FACES) {
            if face.width != face.height || face.width != expected || expected == 0 {
                return Err(AssetError::FaceSize {
                    face: name,
                    width: face.width,
                    height: face.height,
                    expected,
                });
            }
        }
        Ok(Self {
            face_size: expected,
            faces: faces.into_iter().map(|f| f.pixels).collect(),
        })
    }

    /// 1x1 neutral grey cubemap shown until a real set is uploaded.
    pub fn placeholder() -> Self {
        Self {
            face_size: 1,
            faces: vec![vec![40, 44, 52, 255]; CUBE_FACES.len()],
        }
    }
}
