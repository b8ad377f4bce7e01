//! Camera focus stepping between planets.

use glam::Vec3;

/// Camera position for the whole-system overview, scene units.
pub const OVERVIEW_POSITION: Vec3 = Vec3::new(200.0, 100.0, 150.0);

/// Distance multiplier from the focused body, in body radii.
const FRAME_BACKOFF: f32 = 6.0;

/// Height above the orbital plane when framing, in body radii.
const FRAME_LIFT: f32 = 2.0;

/// Tracks which planet the camera is framing, if any.
///
/// Stepping wraps around in both directions; clearing returns to the
/// overview.
#[derive(Clone, Copy, Debug)]
pub struct CameraFocus {
    focused: Option<usize>,
    count: usize,
}

impl CameraFocus {
    pub fn new(count: usize) -> Self {
        Self {
            focused: None,
            count,
        }
    }

    /// The focused body index, or `None` for the overview.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Step to the next planet, wrapping past the last. From the overview,
    /// focuses the first planet.
    pub fn next(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        self.focused = Some(match self.focused {
            None => 0,
            Some(index) => (index + 1) % self.count,
        });
        self.focused
    }

    /// Step to the previous planet, wrapping past the first. From the
    /// overview, focuses the last planet.
    pub fn prev(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        self.focused = Some(match self.focused {
            None => self.count - 1,
            Some(index) => (index + self.count - 1) % self.count,
        });
        self.focused
    }

    /// Return to the overview.
    pub fn clear(&mut self) {
        self.focused = None;
    }
}

/// Camera position that frames a body of the given size.
///
/// Backs off outward from the sun past the body and lifts above the orbital
/// plane, scaled by the body's rendering radius. Bodies at the origin fall
/// back to an arbitrary outward direction.
pub fn framing_position(body_position: Vec3, body_size: f32) -> Vec3 {
    let outward = if body_position.length() > 1e-3 {
        body_position.normalize()
    } else {
        Vec3::X
    };
    body_position + outward * body_size * FRAME_BACKOFF + Vec3::Z * body_size * FRAME_LIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_around() {
        let mut focus = CameraFocus::new(3);
        assert_eq!(focus.next(), Some(0));
        assert_eq!(focus.next(), Some(1));
        assert_eq!(focus.next(), Some(2));
        assert_eq!(focus.next(), Some(0));
    }

    #[test]
    fn test_prev_wraps_from_overview_to_last() {
        let mut focus = CameraFocus::new(3);
        assert_eq!(focus.prev(), Some(2));
        assert_eq!(focus.prev(), Some(1));
        assert_eq!(focus.prev(), Some(0));
        assert_eq!(focus.prev(), Some(2));
    }

    #[test]
    fn test_clear_returns_to_overview() {
        let mut focus = CameraFocus::new(3);
        focus.next();
        focus.clear();
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn test_empty_system_never_focuses() {
        let mut focus = CameraFocus::new(0);
        assert_eq!(focus.next(), None);
        assert_eq!(focus.prev(), None);
    }

    #[test]
    fn test_framing_backs_off_scaled_by_size() {
        let body = Vec3::new(300.0, 0.0, 0.0);
        let near = framing_position(body, 2.0);
        let far = framing_position(body, 20.0);
        assert!((near - body).length() < (far - body).length());
        // Backed off away from the sun, not into it.
        assert!(near.x > body.x);
        // Lifted above the orbital plane.
        assert!(near.z > 0.0);
    }

    #[test]
    fn test_framing_handles_origin_body() {
        let pos = framing_position(Vec3::ZERO, 5.0);
        assert!(pos.is_finite());
        assert!(pos.length() > 0.0);
    }
}
