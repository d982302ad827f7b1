use crate::geom::Point;

/// One positionable ring member. Slots are addressed by index, not identity;
/// the host maps indices onto whatever it actually renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Offset from the menu pivot, rewritten on every layout pass.
    pub offset: Point,
    /// Disabled slots are skipped by layout and excluded from the active
    /// count used for radius resolution.
    pub enabled: bool,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            offset: Point::default(),
            enabled: true,
        }
    }
}
