//! Pointer input events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in surface coordinates.
///
/// Positions outside the surface are accepted as-is; the surface clips
/// whatever lands outside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// The pointer left the surface.
    Leave,
}

/// Convert client coordinates to surface coordinates given the surface origin.
pub fn to_surface(client: Point, surface_origin: Point) -> Point {
    Point::new(client.x - surface_origin.x, client.y - surface_origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_surface_allows_negative() {
        let p = to_surface(Point::new(5.0, 50.0), Point::new(10.0, 20.0));
        assert_eq!(p, Point::new(-5.0, 30.0));
    }
}
