use crate::geom::Size;

pub mod driver;
pub mod edge;

pub use driver::{EdgeIndicator, IndicatorFrame};
pub use edge::{SizeProfile, project_bearing_to_edge};

pub const VISIBILITY_MARGIN: f64 = 100.0; // viewport inflation while the target is on screen
pub const TALL_NARROW_SIZE: Size = Size {
    width: 6.0,
    height: 50.0,
}; // marker when the bearing exits left/right
pub const SHORT_WIDE_SIZE: Size = Size {
    width: 50.0,
    height: 6.0,
}; // marker when the bearing exits top/bottom
