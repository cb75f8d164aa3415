// Page wiring and browser-side tuning constants.

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "overlay-ok";
pub const SCORE_ID: &str = "score";
pub const INSTRUCTIONS_ID: &str = "instructions";
pub const SENSOR_STATUS_ID: &str = "sensor-status";
pub const HINT_SELECTOR: &str = ".hint";

// Image assets, relative to the page
pub const SKY_ASSET: &str = "assets/sky.png";
pub const PLANE_ASSET: &str = "assets/plane.png";

// Fill behind the sky tiles while the image loads
pub const SKY_FILL_CSS: &str = "#3FC2FF";
// Fallback plane colour when the sprite image is missing
pub const PLANE_FILL_CSS: &str = "#f4f4f4";

// Browsers report rotation rate in degrees per second
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
