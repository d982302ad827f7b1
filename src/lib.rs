//! Screen-space overlay behaviors: an off-screen direction indicator that
//! pins a marker to the viewport edge nearest a tracked target, and a radial
//! menu that furls and unfurls a ring of slots around a pivot.
//!
//! Both components are frame-stepped. The host loop feeds
//! [`EdgeIndicator::update`] and [`RadialMenu::tick`] once per rendered frame
//! and applies the resulting positions to whatever it draws. Nothing here
//! renders, reads input, or touches a scene graph.

pub mod config;
pub mod geom;
pub mod indicator;
pub mod menu;

pub use config::{ConfigError, IndicatorConfig, MenuConfig, OverlayConfig};
pub use geom::{Point, Size};
pub use indicator::{EdgeIndicator, IndicatorFrame, SizeProfile, project_bearing_to_edge};
pub use menu::{MenuState, RadialMenu, Slot, TogglePolicy};
