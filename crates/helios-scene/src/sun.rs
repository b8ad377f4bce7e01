//! The sun: an emissive sphere instance fixed at the origin.

use helios_render::SphereInstance;

/// Sun rendering radius, scene units.
pub const SUN_RADIUS: f64 = 25.0;

/// Sun surface color, linear RGB. Rendered emissive, so this is the final
/// on-screen color.
pub const SUN_COLOR: [f32; 3] = [1.0, 0.85, 0.45];

/// The sun's sphere instance. Emissive: it is the light source and takes no
/// shading itself.
pub fn sun_instance() -> SphereInstance {
    SphereInstance {
        center: [0.0; 3],
        scale: SUN_RADIUS as f32,
        color: SUN_COLOR,
        emissive: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_sits_at_origin_fully_emissive() {
        let sun = sun_instance();
        assert_eq!(sun.center, [0.0; 3]);
        assert_eq!(sun.scale, 25.0);
        assert_eq!(sun.emissive, 1.0);
    }
}
