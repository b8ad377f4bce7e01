//! Cross-platform surface dimension tracking.
//!
//! Normalizes Wayland zero-size windows and DPI scale changes into one
//! consistent physical-pixel API with 1×1 clamping.

/// Minimum surface dimension (prevents zero-size panics).
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Physical pixel dimensions of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

/// Event produced when the surface dimensions or scale factor change.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceResizeEvent {
    /// New physical pixel dimensions.
    pub physical: PhysicalSize,
    /// Current scale factor.
    pub scale_factor: f64,
}

/// Tracks the surface's physical dimensions across resize and DPI events.
///
/// Always reports physical pixels for GPU surface configuration; zero-size
/// surfaces (common on Wayland before the compositor assigns a size) are
/// clamped to 1×1.
pub struct SurfaceWrapper {
    physical_width: u32,
    physical_height: u32,
    scale_factor: f64,
    /// Whether a valid (non-zero) size has been seen at least once.
    configured: bool,
}

impl SurfaceWrapper {
    /// Create from initial physical dimensions and scale factor. Zero
    /// dimensions are clamped and the wrapper is marked unconfigured.
    pub fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        let has_valid_size = physical_width > 0 && physical_height > 0;
        Self {
            physical_width: physical_width.max(MIN_SURFACE_DIMENSION),
            physical_height: physical_height.max(MIN_SURFACE_DIMENSION),
            scale_factor,
            configured: has_valid_size,
        }
    }

    /// Handle a window resize. Returns an event only if the clamped
    /// dimensions actually changed.
    pub fn handle_resize(
        &mut self,
        physical_width: u32,
        physical_height: u32,
    ) -> Option<SurfaceResizeEvent> {
        let width = physical_width.max(MIN_SURFACE_DIMENSION);
        let height = physical_height.max(MIN_SURFACE_DIMENSION);

        if width == self.physical_width && height == self.physical_height {
            return None;
        }

        self.physical_width = width;
        self.physical_height = height;
        self.configured = true;

        Some(SurfaceResizeEvent {
            physical: PhysicalSize { width, height },
            scale_factor: self.scale_factor,
        })
    }

    /// Handle a scale factor change. Emits a resize event because the
    /// physical dimensions change even when the logical size does not.
    pub fn handle_scale_factor_changed(
        &mut self,
        new_scale_factor: f64,
        new_physical_width: u32,
        new_physical_height: u32,
    ) -> Option<SurfaceResizeEvent> {
        self.scale_factor = new_scale_factor;
        self.handle_resize(new_physical_width, new_physical_height)
    }

    pub fn physical_size(&self) -> PhysicalSize {
        PhysicalSize {
            width: self.physical_width,
            height: self.physical_height,
        }
    }

    pub fn physical_width(&self) -> u32 {
        self.physical_width
    }

    pub fn physical_height(&self) -> u32 {
        self.physical_height
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Whether a valid size has been seen at least once.
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_surface_clamped_and_unconfigured() {
        let mut wrapper = SurfaceWrapper::new(0, 0, 1.0);
        assert!(!wrapper.is_configured());
        assert_eq!(wrapper.physical_size(), PhysicalSize { width: 1, height: 1 });

        // First real resize from the compositor.
        let event = wrapper.handle_resize(1920, 1080).expect("resize event");
        assert_eq!(event.physical.width, 1920);
        assert_eq!(event.physical.height, 1080);
        assert!(wrapper.is_configured());
    }

    #[test]
    fn test_no_event_on_same_dimensions() {
        let mut wrapper = SurfaceWrapper::new(1920, 1080, 1.0);
        assert!(wrapper.handle_resize(1920, 1080).is_none());
    }

    #[test]
    fn test_scale_factor_change_updates_physical_size() {
        let mut wrapper = SurfaceWrapper::new(1920, 1080, 1.0);
        let event = wrapper
            .handle_scale_factor_changed(2.0, 3840, 2160)
            .expect("resize event");
        assert_eq!(event.physical.width, 3840);
        assert_eq!(event.scale_factor, 2.0);
        assert_eq!(wrapper.scale_factor(), 2.0);
    }

    #[test]
    fn test_zero_resize_clamped_to_one() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        let event = wrapper.handle_resize(0, 0).expect("resize event");
        assert_eq!(event.physical, PhysicalSize { width: 1, height: 1 });
    }

    #[test]
    fn test_successive_resizes_track_latest() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        wrapper.handle_resize(1024, 768);
        wrapper.handle_resize(1920, 1080);
        assert_eq!(
            wrapper.physical_size(),
            PhysicalSize {
                width: 1920,
                height: 1080
            }
        );
    }
}
