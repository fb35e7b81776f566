//! Vector helpers shared by aiming, steering and collision

use glam::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector pointing from `from` to `to`.
///
/// Returns `None` when the points coincide, so callers skip the move or shot
/// instead of dividing by zero.
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    let dist = distance(from, to);
    if dist > 0.0 {
        Some((to - from) / dist)
    } else {
        None
    }
}

/// Axis-aligned box test between two centers.
///
/// Overlap requires the distance on each axis to be strictly below
/// `half_extent`.
#[inline]
pub fn boxes_overlap(a: Vec2, b: Vec2, half_extent: f32) -> bool {
    let delta = (a - b).abs();
    delta.x < half_extent && delta.y < half_extent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_to_is_unit_length() {
        let dir = direction_to(Vec2::new(400.0, 300.0), Vec2::new(403.0, 304.0)).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
        assert!((dir.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_direction_to_same_point_is_none() {
        let p = Vec2::new(12.0, 34.0);
        assert!(direction_to(p, p).is_none());
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_boxes_overlap_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        assert!(boxes_overlap(a, Vec2::new(9.9, -9.9), 10.0));
        assert!(!boxes_overlap(a, Vec2::new(10.0, 0.0), 10.0));
        assert!(!boxes_overlap(a, Vec2::new(0.0, -10.0), 10.0));
    }

    #[test]
    fn test_boxes_overlap_needs_both_axes() {
        assert!(!boxes_overlap(Vec2::ZERO, Vec2::new(5.0, 50.0), 10.0));
        assert!(!boxes_overlap(Vec2::ZERO, Vec2::new(50.0, 5.0), 10.0));
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_direction_is_normalized(
                fx in -1000.0f32..1000.0, fy in -1000.0f32..1000.0,
                tx in -1000.0f32..1000.0, ty in -1000.0f32..1000.0,
            ) {
                let from = Vec2::new(fx, fy);
                let to = Vec2::new(tx, ty);
                if let Some(dir) = direction_to(from, to) {
                    prop_assert!((dir.length() - 1.0).abs() < 1e-4);
                } else {
                    prop_assert_eq!(distance(from, to), 0.0);
                }
            }
        }
    }
}
