use crate::geom::Point;
use std::f64::consts::PI;
use strum::Display;

/// Which of the two marker presets applies, keyed by the rectangle edge the
/// bearing ray exits through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SizeProfile {
    /// Exit through the left or right edge.
    TallNarrow,
    /// Exit through the top or bottom edge.
    ShortWide,
}

/// Projects a bearing onto the boundary of a `width` x `height` rectangle
/// centered at the origin, returning the exit point and the marker preset for
/// the edge it exits through.
///
/// Adapted from
/// <https://stackoverflow.com/questions/4061576/finding-points-on-a-rectangle-at-a-given-angle>.
pub fn project_bearing_to_edge(
    angle_degrees: f64,
    width: f64,
    height: f64,
) -> (Point, SizeProfile) {
    // Keep the angle inside the (-90, 270] branch window; the edge windows
    // below assume it.
    let degrees = if angle_degrees < -90.0 {
        angle_degrees + 360.0
    } else {
        angle_degrees
    };

    let angle = degrees.to_radians();
    let diag = height.atan2(width);
    let tangent = angle.tan();

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    if angle > -diag && angle <= diag {
        // right edge
        (
            Point::new(half_w, half_w * tangent),
            SizeProfile::TallNarrow,
        )
    } else if angle > diag && angle <= PI - diag {
        // top edge; tan is undefined at exactly 90, the limit is x = 0
        let x = if degrees == 90.0 { 0.0 } else { half_h / tangent };
        (Point::new(x, half_h), SizeProfile::ShortWide)
    } else if angle > PI - diag && angle <= PI + diag {
        // left edge
        (
            Point::new(-half_w, -half_w * tangent),
            SizeProfile::TallNarrow,
        )
    } else {
        // bottom edge, wrapping through -90/270 where tan is again undefined
        let x = if degrees == -90.0 || degrees == 270.0 {
            0.0
        } else {
            -half_h / tangent
        };
        (Point::new(x, -half_h), SizeProfile::ShortWide)
    }
}
