pub mod keyboard;
pub mod lifecycle;

pub use keyboard::*;
pub use lifecycle::*;
