use glam::Vec3;

// Shared scene and interaction tuning constants.

// Camera
pub const CAMERA_FOV_DEG: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.0, -0.001); // camera sits at the origin and looks around
pub const SHOWCASE_CAMERA_DISTANCE: f32 = 4.0; // orbit radius before a model is framed
pub const MODEL_FRAMING_FACTOR: f32 = 2.5; // orbit radius in units of the model's bounding radius

// Wheel field-of-view zoom
pub const FOV_MIN_DEG: f32 = 20.0;
pub const FOV_MAX_DEG: f32 = 75.0;
pub const FOV_ZOOM_SPEED: f32 = 1.1; // divide (in) or multiply (out) per wheel notch

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending rotation applied per frame
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_PITCH_LIMIT: f32 = 1.5533; // ~89 degrees
pub const CLICK_DRAG_TOLERANCE_PX: f32 = 4.0; // drags longer than this are not clicks

// Teleport layout per environment (ring, decoy sphere)
pub const RING_POSITION_A: Vec3 = Vec3::new(0.0, -1.5, -5.2);
pub const SPHERE_POSITION_A: Vec3 = Vec3::new(5.0, -1.5, -15.2);
pub const RING_POSITION_B: Vec3 = Vec3::new(0.0, -1.5, 5.2);
pub const SPHERE_POSITION_B: Vec3 = Vec3::new(5.0, -1.5, 0.0);
pub const RING_RADIUS: f32 = 0.3;
pub const SPHERE_RADIUS: f32 = 1.0;
pub const HOTSPOT_SIZE: f32 = 0.25;

// Colors (linear rgb)
pub const RING_COLOR: [f32; 3] = [1.0, 0.6, 0.0]; // 0xff9900
pub const SPHERE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const HOTSPOT_COLOR: [f32; 3] = [0.95, 0.95, 1.0];

// Fade transition
pub const FADE_STEP: f32 = 0.05;
pub const FADE_INTERVAL_MS: u64 = 20;

// Zoom transition
pub const ZOOM_STEP: f32 = 0.05;
pub const ZOOM_THRESHOLD: f32 = 3.0;
pub const ZOOM_INTERVAL_MS: u64 = 5;

// Idle breathing
pub const BREATHING_MIN: f32 = 0.9;
pub const BREATHING_MAX: f32 = 1.1;
pub const BREATHING_PERIOD_SEC: f32 = 2.0;

// Assets
pub const DEFAULT_MODEL_URL: &str = "./assets/rack.glb";
pub const DEFAULT_MAP_A_DIR: &str = "./assets/map1";
pub const DEFAULT_MAP_B_DIR: &str = "./assets/map2";
pub const CUBEMAP_FACE_EXT: &str = "jpg";
pub const MODEL_YAW: f32 = -std::f32::consts::FRAC_PI_2; // fixed model orientation about +Y

// DOM
pub const DEFAULT_MODAL_SELECTOR: &str = ".ui-modal";
