// Shared tuning constants used by both web and native frontends.

// Tilt mapping
pub const SENSITIVITY: f32 = 20.0; // pixels of target travel per unit of angular rate
pub const SAMPLE_INTERVAL_MS: u64 = 16; // ~60 samples per second
pub const SENSOR_TIMEOUT_MS: u64 = 1500; // silence before the sensor is declared unavailable

// Spring easing (mass-spring-damper)
pub const SPRING_DAMPING: f32 = 10.0;
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DISPLACEMENT: f32 = 0.01;
pub const SPRING_REST_SPEED: f32 = 2.0;

// Sprite layout
pub const SPRITE_EXTENT: f32 = 50.0; // width used for horizontal bounds
pub const SPRITE_DRAW_SIZE: f32 = 60.0; // rendered square
pub const SPRITE_BOTTOM_MARGIN: f32 = 100.0; // distance from the bottom edge in single-axis mode
pub const VERTICAL_MARGIN: f32 = 100.0; // minY for the vertical axis in two-axis mode

// Background
pub const SCROLL_STEP: f32 = 1.0; // pixels per display frame
pub const SKY_RGB: [f32; 3] = [0.247, 0.761, 1.0]; // #3FC2FF, shown behind the tiles

// Fallback input
pub const KEY_TILT_RATE: f32 = 1.0; // synthetic angular rate per arrow key press
