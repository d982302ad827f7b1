use crate::config::IndicatorConfig;
use crate::geom::{Point, Size};
use crate::indicator::edge::project_bearing_to_edge;

/// Everything the host loop samples for one indicator update.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorFrame {
    pub observer: Point,
    pub target: Point,
    /// `None` when no visibility source is attached; the update is skipped.
    pub target_visible: Option<bool>,
    pub viewport: Size,
}

/// Pins a marker to the viewport edge nearest the bearing from an observer to
/// a tracked target. Pure function of its frame inputs; the only state kept is
/// the last computed placement, for the host to read back.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndicator {
    config: IndicatorConfig,
    anchor: Point,
    size: Size,
}

impl EdgeIndicator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            anchor: Point::default(),
            size: Size::default(),
        }
    }

    /// Advances one frame. Returns `false` without touching the placement
    /// when the frame carries no visibility source.
    pub fn update(&mut self, frame: &IndicatorFrame) -> bool {
        let Some(visible) = frame.target_visible else {
            return false;
        };

        let bearing = frame.target - frame.observer;
        let extra = if visible {
            self.config.visibility_margin
        } else {
            0.0
        };

        let (anchor, profile) = project_bearing_to_edge(
            bearing.bearing_degrees(),
            frame.viewport.width + extra,
            frame.viewport.height + extra,
        );

        self.anchor = anchor;
        self.size = self.config.size_for(profile);
        true
    }

    /// Marker position on the (possibly inflated) viewport boundary.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Marker size for the edge last hit.
    pub fn size(&self) -> Size {
        self.size
    }
}
