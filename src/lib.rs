pub mod background;
pub mod constants;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod render;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
