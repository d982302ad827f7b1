use crate::geom::Point;
use crate::menu::slot::Slot;

/// Fans the enabled slots across the `[start, end]` span at the given radius.
///
/// Angles are degrees measured clockwise from straight up (the sin/cos order
/// puts 0 at +Y). The span is divided by the enabled count, so a full 360
/// span leaves no seam between the last and first slot. With nothing enabled
/// this is a no-op.
pub fn layout_ring(slots: &mut [Slot], radius: f64, start_deg: f64, end_deg: f64) {
    let active = slots.iter().filter(|s| s.enabled).count();
    if active == 0 {
        return;
    }

    let delta = (end_deg - start_deg) / active as f64;
    let mut angle = start_deg;

    for slot in slots.iter_mut().filter(|s| s.enabled) {
        let rad = angle.to_radians();
        slot.offset = Point::new(radius * rad.sin(), radius * rad.cos());
        angle += delta;
    }
}
