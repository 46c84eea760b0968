pub mod keyboard;
pub mod keymap;
pub mod pointer;

pub use keyboard::*;
pub use pointer::*;
