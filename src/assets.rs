//! Browser side of asset loading: `fetch` plus the decoders from
//! `showcase_core`. Each load is a single attempt checked against a
//! [`CancelToken`] between files.

use showcase_core::constants::MODEL_YAW;
use showcase_core::{
    cubemap_face_urls, decode_face, parse_glb, AssetError, AssetSource, CancelToken,
    CubemapImage, LoadOutcome, ModelData,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub enum LoadedAsset {
    Model(ModelData),
    Cubemap(CubemapImage),
}

fn network_err(url: &str, e: wasm_bindgen::JsValue) -> AssetError {
    AssetError::Network {
        url: url.to_string(),
        message: format!("{:?}", e),
    }
}

pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    let win = web_sys::window().ok_or_else(|| AssetError::Network {
        url: url.to_string(),
        message: "no window".to_string(),
    })?;
    let resp_val = JsFuture::from(win.fetch_with_str(url))
        .await
        .map_err(|e| network_err(url, e))?;
    let resp: web_sys::Response = resp_val.dyn_into().map_err(|e| network_err(url, e))?;

    if !resp.ok() {
        return Err(AssetError::Http {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let buf_promise = resp.array_buffer().map_err(|e| network_err(url, e))?;
    let buf_val = JsFuture::from(buf_promise)
        .await
        .map_err(|e| network_err(url, e))?;
    let u8 = js_sys::Uint8Array::new(&buf_val);
    let mut out = vec![0u8; u8.length() as usize];
    u8.copy_to(&mut out);
    Ok(out)
}

/// Fetch and decode the six faces of a cubemap set, calling `on_file`
/// after each face.
pub async fn load_cubemap(
    dir: &str,
    token: &CancelToken,
    on_file: &mut dyn FnMut(),
) -> LoadOutcome<CubemapImage> {
    let mut faces = Vec::with_capacity(6);
    for url in cubemap_face_urls(dir) {
        if token.is_cancelled() {
            return LoadOutcome::Cancelled;
        }
        let face = match fetch_bytes(&url).await {
            Ok(bytes) => decode_face(&url, &bytes),
            Err(e) => Err(e),
        };
        match face {
            Ok(f) => faces.push(f),
            Err(e) => return LoadOutcome::from_result(Err(e), token),
        }
        on_file();
    }
    LoadOutcome::from_result(CubemapImage::from_faces(faces), token)
}

pub async fn load_model(
    url: &str,
    token: &CancelToken,
    on_file: &mut dyn FnMut(),
) -> LoadOutcome<ModelData> {
    if token.is_cancelled() {
        return LoadOutcome::Cancelled;
    }
    let result = match fetch_bytes(url).await {
        Ok(bytes) => parse_glb(&bytes, MODEL_YAW),
        Err(e) => Err(e),
    };
    if result.is_ok() {
        on_file();
    }
    LoadOutcome::from_result(result, token)
}

/// Load any [`AssetSource`].
pub async fn load(
    source: &AssetSource,
    token: &CancelToken,
    on_file: &mut dyn FnMut(),
) -> LoadOutcome<LoadedAsset> {
    let outcome = match source {
        AssetSource::Model { url } => load_model(url, token, on_file)
            .await
            .map(LoadedAsset::Model),
        AssetSource::Cubemap { dir } => load_cubemap(dir, token, on_file)
            .await
            .map(LoadedAsset::Cubemap),
    };
    match &outcome {
        LoadOutcome::Loaded(_) => log::info!("[assets] loaded {}", source.label()),
        LoadOutcome::Failed(e) => log::error!("[assets] {}", e),
        LoadOutcome::Cancelled => log::info!("[assets] cancelled {}", source.label()),
    }
    outcome
}
