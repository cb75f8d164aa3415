pub mod config;
pub mod constants;
pub mod error;
pub mod looper;
pub mod mapper;
pub mod sensor;
pub mod session;
pub mod spring;
pub mod state;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use config::*;
pub use constants::*;
pub use error::*;
pub use looper::*;
pub use mapper::*;
pub use sensor::*;
pub use session::*;
pub use spring::*;
pub use state::*;
