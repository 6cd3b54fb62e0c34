pub mod camera;
pub mod color;
pub mod constants;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod input;
pub mod params;
pub mod pick;
pub mod scene;
pub mod tick;
pub mod viewport;

pub use camera::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use input::*;
pub use params::*;
pub use pick::*;
pub use scene::*;
pub use tick::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
