// Host-side tests for asset bookkeeping and the pure decoding steps.

use image::{ImageFormat, Rgba, RgbaImage};
use showcase_core::{
    cubemap_face_urls, decode_face, parse_glb, AssetError, AssetSource, BootState, CancelToken,
    CubemapImage, LoadOutcome, LoadProgress, RgbaFace,
};
use std::io::Cursor;

fn face(size: u32) -> RgbaFace {
    RgbaFace {
        width: size,
        height: size,
        pixels: vec![0; (size * size * 4) as usize],
    }
}

fn http_404() -> AssetError {
    AssetError::Http {
        url: "./assets/map1/left.jpg".to_string(),
        status: 404,
    }
}

/// Pack a glTF JSON document and binary buffer into a GLB container.
fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let mut bin = bin.to_vec();
    while bin.len() % 4 != 0 {
        bin.push(0);
    }
    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

/// One triangle at (0,0,0), (1,0,0), (0,1,0).
fn triangle_glb() -> Vec<u8> {
    let mut bin = Vec::new();
    for v in [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0] {
        bin.extend_from_slice(&v.to_le_bytes());
    }
    let json = r#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 36}],
        "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 36}],
        "accessors": [{
            "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
            "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
        }],
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
        "nodes": [{"mesh": 0}],
        "scenes": [{"nodes": [0]}],
        "scene": 0
    }"#;
    glb(json, &bin)
}

#[test]
fn progress_counts_files_and_percent() {
    let mut p = LoadProgress::new(7);
    assert_eq!(p.percent(), 0);
    for _ in 0..3 {
        p.advance();
    }
    assert_eq!(p.percent(), 42);
    for _ in 0..10 {
        p.advance();
    }
    assert_eq!(p.loaded, 7);
    assert!(p.is_complete());
    assert_eq!(LoadProgress::new(0).percent(), 100);
}

#[test]
fn boot_becomes_ready_after_last_file() {
    let mut boot = BootState::start(12);
    assert!(!boot.may_render());
    assert_eq!(boot.message(), "Loading… 0%");
    for _ in 0..6 {
        boot.file_loaded();
    }
    assert_eq!(boot.message(), "Loading… 50%");
    for _ in 0..6 {
        boot.file_loaded();
    }
    assert_eq!(boot, BootState::Ready);
    assert!(boot.may_render());
    assert!(BootState::start(0).may_render());
}

#[test]
fn boot_failure_is_terminal() {
    let mut boot = BootState::start(6);
    boot.file_loaded();
    boot.fail(&http_404());
    assert!(!boot.may_render());
    assert_eq!(
        boot.message(),
        "Failed to load assets: HTTP 404 while fetching ./assets/map1/left.jpg"
    );
    for _ in 0..6 {
        boot.file_loaded();
    }
    boot.fail(&AssetError::EmptyModel);
    assert!(matches!(boot, BootState::Failed(ref m) if m.contains("404")));
}

#[test]
fn cancelled_token_wins_over_result() {
    let token = CancelToken::default();
    assert!(LoadOutcome::from_result(Ok(1), &token).is_loaded());
    assert!(matches!(
        LoadOutcome::<u8>::from_result(Err(http_404()), &token),
        LoadOutcome::Failed(AssetError::Http { status: 404, .. })
    ));

    let shared = token.clone();
    shared.cancel();
    assert!(token.is_cancelled());
    assert!(matches!(
        LoadOutcome::from_result(Ok(1), &token),
        LoadOutcome::Cancelled
    ));
}

#[test]
fn outcome_map_keeps_failures() {
    let token = CancelToken::default();
    let loaded = LoadOutcome::from_result(Ok(2), &token).map(|v| v * 10);
    assert!(matches!(loaded, LoadOutcome::Loaded(20)));
    let failed = LoadOutcome::<u8>::Failed(AssetError::EmptyModel).map(|v| v as u32);
    assert!(matches!(failed, LoadOutcome::Failed(AssetError::EmptyModel)));
}

#[test]
fn sources_report_file_counts() {
    let cube = AssetSource::Cubemap {
        dir: "./assets/map1".to_string(),
    };
    let model = AssetSource::Model {
        url: "./assets/rack.glb".to_string(),
    };
    assert_eq!(cube.file_count(), 6);
    assert_eq!(model.file_count(), 1);
    assert_eq!(cube.label(), "./assets/map1");
}

#[test]
fn face_urls_follow_upload_order() {
    let urls = cubemap_face_urls("./assets/map2/");
    assert_eq!(
        urls,
        [
            "./assets/map2/left.jpg",
            "./assets/map2/right.jpg",
            "./assets/map2/up.jpg",
            "./assets/map2/down.jpg",
            "./assets/map2/front.jpg",
            "./assets/map2/back.jpg",
        ]
        .map(String::from)
    );
}

#[test]
fn cubemap_requires_six_equal_square_faces() {
    let ok = CubemapImage::from_faces((0..6).map(|_| face(4)).collect()).expect("valid");
    assert_eq!(ok.face_size, 4);
    assert_eq!(ok.faces.len(), 6);
    assert_eq!(ok.faces[0].len(), 64);

    let five = CubemapImage::from_faces((0..5).map(|_| face(4)).collect());
    assert!(matches!(five, Err(AssetError::FaceCount(5))));

    let mut mixed: Vec<RgbaFace> = (0..6).map(|_| face(4)).collect();
    mixed[3] = face(8);
    assert!(matches!(
        CubemapImage::from_faces(mixed),
        Err(AssetError::FaceSize { face: "down", .. })
    ));

    let mut oblong: Vec<RgbaFace> = (0..6).map(|_| face(4)).collect();
    oblong[0].height = 2;
    assert!(matches!(
        CubemapImage::from_faces(oblong),
        Err(AssetError::FaceSize { face: "left", .. })
    ));
}

#[test]
fn placeholder_is_a_valid_cube() {
    let p = CubemapImage::placeholder();
    assert_eq!(p.face_size, 1);
    assert_eq!(p.faces.len(), 6);
    assert!(p.faces.iter().all(|f| f.len() == 4));
}

#[test]
fn decode_face_reads_png_as_rgba() {
    let img = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode");

    let face = decode_face("left.png", &bytes).expect("decode");
    assert_eq!((face.width, face.height), (2, 2));
    assert_eq!(face.pixels.len(), 16);
    assert_eq!(&face.pixels[..4], &[255, 0, 0, 255]);
}

#[test]
fn decode_face_reports_garbage() {
    let err = decode_face("up.jpg", b"not an image").unwrap_err();
    assert!(matches!(err, AssetError::Image { ref url, .. } if url == "up.jpg"));
}

#[test]
fn glb_triangle_parses_with_bounds() {
    let model = parse_glb(&triangle_glb(), 0.0).expect("parse");
    assert_eq!(model.meshes.len(), 1);
    assert_eq!(model.triangle_count(), 1);
    let mesh = &model.meshes[0];
    assert_eq!(mesh.normals.len(), 3);
    assert!((mesh.normals[0][2] - 1.0).abs() < 1e-5);
    assert_eq!(mesh.base_color, [1.0, 1.0, 1.0, 1.0]);
    let b = model.bounds().expect("bounds");
    assert!((b.max.x - 1.0).abs() < 1e-6 && (b.max.y - 1.0).abs() < 1e-6);
}

#[test]
fn glb_yaw_is_baked_in() {
    let model = parse_glb(&triangle_glb(), -std::f32::consts::FRAC_PI_2).expect("parse");
    let b = model.bounds().expect("bounds");
    // +X turns to +Z under a -90 degree yaw
    assert!((b.max.z - 1.0).abs() < 1e-5);
    assert!(b.max.x.abs() < 1e-5);
}

#[test]
fn glb_errors() {
    assert!(matches!(
        parse_glb(b"definitely not gltf", 0.0),
        Err(AssetError::Gltf(_))
    ));
    assert!(matches!(
        parse_glb(br#"{"asset":{"version":"2.0"}}"#, 0.0),
        Err(AssetError::EmptyModel)
    ));
    let external = r#"{"asset":{"version":"2.0"},"buffers":[{"byteLength":4,"uri":"data.bin"}]}"#;
    assert!(matches!(
        parse_glb(external.as_bytes(), 0.0),
        Err(AssetError::ExternalBuffer(0))
    ));
}
