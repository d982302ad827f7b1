pub mod controller;
pub mod layout;
pub mod slot;

pub use controller::{MenuState, RadialMenu, TogglePolicy};
pub use layout::layout_ring;
pub use slot::Slot;

pub const DEFAULT_RADIUS: f64 = 120.0; // slot orbital radius
pub const DEFAULT_START_ANGLE: f64 = 0.0;
pub const DEFAULT_END_ANGLE: f64 = 360.0;
pub const DEFAULT_STEP: f64 = 0.025; // t advance per frame, so a furl takes ~40 frames
