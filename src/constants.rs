// Web front-end tuning constants: DOM ids, mesh tessellation and shading.

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const MODAL_CLOSE_SELECTOR: &str = ".ui-modal-close";
pub const MODAL_OPEN_DISPLAY: &str = "flex";
pub const MODAL_CLOSED_DISPLAY: &str = "none";

// Tessellation
pub const SPHERE_WIDTH_SEGMENTS: u32 = 64;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 64;
pub const RING_SEGMENTS: u32 = 32;

// Shading
pub const SPHERE_METALNESS: f32 = 0.8;
pub const SPHERE_ROUGHNESS: f32 = 0.2;
pub const SPHERE_ENV_INTENSITY: f32 = 1.5;
pub const MODEL_METALNESS: f32 = 0.1;
pub const MODEL_ROUGHNESS: f32 = 0.7;
pub const AMBIENT: f32 = 0.35; // fraction of base colour visible in shadow
pub const LIGHT_DIR: [f32; 3] = [0.4, 0.8, 0.45]; // unnormalized key light direction

// Shading modes understood by mesh.wgsl
pub const SHADE_LIT: f32 = 0.0;
pub const SHADE_REFLECTIVE: f32 = 1.0;
pub const SHADE_UNLIT: f32 = 2.0;

// Frame pacing
pub const MAX_FRAME_DT_MS: u64 = 250; // longest frame delta fed to the scene clocks

// Clear color behind the skybox (visible only before the first upload)
pub const CLEAR_RGB: [f64; 3] = [0.03, 0.04, 0.08];
