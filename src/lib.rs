#![cfg(target_arch = "wasm32")]
use crate::assets::LoadedAsset;
use crate::constants::*;
use instant::Instant;
use showcase_core::constants::DEFAULT_MODAL_SELECTOR;
use showcase_core::{
    AssetSource, BootState, CancelToken, EnvVariant, LoadOutcome, SceneConfig, SceneMode,
    SceneSession, SlotStatus, TextureLoading,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod modal;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_cancel_on_pagehide(token: &CancelToken) {
    let token = token.clone();
    let closure = Closure::wrap(Box::new(move || token.cancel()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Where a loaded asset goes once it arrives.
#[derive(Clone, Copy)]
enum Slot {
    Env(EnvVariant),
    Model,
}

/// Assets that must be in before the first frame.
fn eager_assets(config: &SceneConfig) -> Vec<(AssetSource, Slot)> {
    let mut list = vec![(
        AssetSource::Cubemap {
            dir: config.map_a_dir.clone(),
        },
        Slot::Env(EnvVariant::A),
    )];
    match config.mode {
        SceneMode::Tour if config.texture_loading == TextureLoading::Preload => list.push((
            AssetSource::Cubemap {
                dir: config.map_b_dir.clone(),
            },
            Slot::Env(EnvVariant::B),
        )),
        SceneMode::Tour => {}
        SceneMode::Showcase => list.push((
            AssetSource::Model {
                url: config.model_url.clone(),
            },
            Slot::Model,
        )),
    }
    list
}

fn modal_selectors(config: &SceneConfig) -> Vec<String> {
    let mut out = vec![DEFAULT_MODAL_SELECTOR.to_string()];
    for h in &config.hotspots {
        if !out.contains(&h.modal_selector) {
            out.push(h.modal_selector.clone());
        }
    }
    out
}

fn place_asset(
    asset: LoadedAsset,
    slot: Slot,
    gpu: &mut render::GpuState,
    session: &mut SceneSession,
) {
    match (asset, slot) {
        (LoadedAsset::Cubemap(img), Slot::Env(v)) => {
            gpu.upload_environment(v, &img);
            session.set_environment_status(v, SlotStatus::Ready);
        }
        (LoadedAsset::Model(model), _) => {
            gpu.set_model(&model);
            match model.bounds() {
                Some(b) => session.frame_model(b),
                None => log::warn!("[assets] model has no vertices to frame"),
            }
        }
        (LoadedAsset::Cubemap(_), Slot::Model) => {
            log::warn!("[assets] cubemap delivered to the model slot; ignored");
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let (config, errors) = SceneConfig::from_query(&dom::location_query());
    for e in &errors {
        log::warn!("[config] {}; keeping default", e);
    }
    log::info!(
        "[config] mode={:?} transition={:?} textures={:?}",
        config.mode,
        config.transition,
        config.texture_loading
    );
    let session = Rc::new(RefCell::new(SceneSession::new(config.clone())));

    let eager = eager_assets(&config);
    let total = eager.iter().map(|(s, _)| s.file_count()).sum();
    let boot = Rc::new(RefCell::new(BootState::start(total)));
    overlay::show(&document);
    overlay::update(&document, &boot.borrow());

    let mut gpu = match render::GpuState::new(&canvas).await {
        Ok(g) => g,
        Err(e) => {
            overlay::show_error(&document, "WebGPU is not available in this browser");
            return Err(e);
        }
    };
    gpu.add_pickables(&session.borrow().raycaster);

    let token = CancelToken::default();
    wire_cancel_on_pagehide(&token);

    for (source, slot) in &eager {
        let boot_progress = boot.clone();
        let doc = document.clone();
        let mut on_file = move || {
            boot_progress.borrow_mut().file_loaded();
            overlay::update(&doc, &boot_progress.borrow());
        };
        match assets::load(source, &token, &mut on_file).await {
            LoadOutcome::Loaded(asset) => {
                place_asset(asset, *slot, &mut gpu, &mut session.borrow_mut());
            }
            LoadOutcome::Failed(e) => {
                if let Slot::Env(v) = slot {
                    session
                        .borrow_mut()
                        .set_environment_status(*v, SlotStatus::Failed(e.to_string()));
                }
                boot.borrow_mut().fail(&e);
                overlay::update(&document, &boot.borrow());
                return Ok(());
            }
            LoadOutcome::Cancelled => return Ok(()),
        }
    }
    if !boot.borrow().may_render() {
        log::warn!("[assets] boot finished without reaching ready: {:?}", boot.borrow());
        return Ok(());
    }
    overlay::hide(&document);

    let selectors = modal_selectors(&config);
    events::wire_global_keydown(canvas.clone(), selectors.clone());
    {
        let doc = document.clone();
        dom::add_click_listener(&document, MODAL_CLOSE_SELECTOR, move || {
            modal::close_all(&doc, &selectors);
        });
    }
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        session: session.clone(),
    });

    let gpu = Rc::new(RefCell::new(gpu));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: session.clone(),
        gpu: gpu.clone(),
        canvas: canvas.clone(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    if config.mode == SceneMode::Tour && config.texture_loading == TextureLoading::Lazy {
        spawn_local(load_lazy_environment(
            session,
            gpu,
            config.map_b_dir.clone(),
            token,
        ));
    }
    Ok(())
}

/// Background load of the second cubemap set; until it lands the renderer
/// shows the placeholder for that slot.
async fn load_lazy_environment(
    session: Rc<RefCell<SceneSession>>,
    gpu: Rc<RefCell<render::GpuState>>,
    dir: String,
    token: CancelToken,
) {
    let source = AssetSource::Cubemap { dir };
    match assets::load(&source, &token, &mut || {}).await {
        LoadOutcome::Loaded(asset) => place_asset(
            asset,
            Slot::Env(EnvVariant::B),
            &mut gpu.borrow_mut(),
            &mut session.borrow_mut(),
        ),
        LoadOutcome::Failed(e) => {
            log::warn!("[assets] map2 unavailable, keeping placeholder: {}", e);
            session
                .borrow_mut()
                .set_environment_status(EnvVariant::B, SlotStatus::Failed(e.to_string()));
        }
        LoadOutcome::Cancelled => {}
    }
}
