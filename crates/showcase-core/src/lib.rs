//! Platform-independent core of the 3D showcase.
//!
//! The web front-end owns the DOM, the GPU and the animation-frame loop;
//! everything that decides *what* happens (picking, transitions, camera
//! motion, asset decoding) lives here so it can be tested on the host.

pub mod assets;
pub mod breathing;
pub mod camera;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod pick;
pub mod pointer;
pub mod session;
pub mod transition;

pub use assets::*;
pub use breathing::*;
pub use camera::*;
pub use config::*;
pub use environment::*;
pub use error::*;
pub use geometry::*;
pub use pick::*;
pub use pointer::*;
pub use session::*;
pub use transition::*;

// Shaders bundled as string constants
pub static SKYBOX_WGSL: &str = include_str!("../shaders/skybox.wgsl");
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
