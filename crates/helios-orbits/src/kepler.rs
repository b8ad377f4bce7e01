//! Kepler's equation and the orbital-plane position formula.

use glam::DVec3;

/// Newton–Raphson convergence tolerance for the eccentric anomaly.
const TOLERANCE: f64 = 1e-6;

/// Solve Kepler's equation `E - e*sin(E) = M` for the eccentric anomaly.
///
/// Newton–Raphson seeded with `E = M`. For eccentricities below 1 this
/// converges in single-digit iterations; there is deliberately no iteration
/// cap, so e >= 1 is out of contract. The loop condition compares the last
/// step size, and a NaN step compares false, so a NaN mean anomaly (a zero
/// period upstream) falls through as NaN instead of spinning.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anom = mean_anomaly;
    let mut delta = f64::INFINITY;

    while delta.abs() > TOLERANCE {
        let f = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
        let f_prime = 1.0 - eccentricity * e_anom.cos();
        delta = f / f_prime;
        e_anom -= delta;
    }

    e_anom
}

/// Convert an eccentric anomaly to the true anomaly.
pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    2.0 * ((1.0 + eccentricity).sqrt() * (eccentric_anomaly / 2.0).sin())
        .atan2((1.0 - eccentricity).sqrt() * (eccentric_anomaly / 2.0).cos())
}

/// Scene-space position of a body on its ellipse.
///
/// Evaluates the orbit equation `r = a(1 - e²) / (1 + e·cos ν)` and rotates
/// the in-plane radius vector by argument of perigee, inclination, and
/// ascending node. The resulting axes are consumed directly as scene
/// coordinates; the component order here fixes the rendered orientation.
pub fn orbital_position(
    semi_major_axis: f64,
    eccentricity: f64,
    true_anomaly: f64,
    arg_perigee: f64,
    raan: f64,
    inclination: f64,
) -> DVec3 {
    let semi_latus_rectum = semi_major_axis * (1.0 - eccentricity * eccentricity);
    let r = semi_latus_rectum / (1.0 + eccentricity * true_anomaly.cos());

    // Argument of latitude: angle from the ascending node to the body.
    let u = arg_perigee + true_anomaly;

    let x = r * (u.cos() * raan.cos() - inclination.cos() * u.sin() * raan.sin());
    let y = r * (u.cos() * raan.sin() + inclination.cos() * u.sin() * raan.cos());
    let z = r * (u.sin() * inclination.sin());

    DVec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_solver_satisfies_keplers_equation() {
        // Sweep the whole contract range: e in [0, 0.95], M in [0, 2*pi).
        for e_step in 0..=19 {
            let e = e_step as f64 * 0.05;
            for m_step in 0..32 {
                let m = m_step as f64 / 32.0 * TAU;
                let e_anom = solve_kepler(m, e);
                let residual = (e_anom - e * e_anom.sin() - m).abs();
                assert!(
                    residual < 1e-6,
                    "residual {residual} for e={e}, M={m}"
                );
            }
        }
    }

    #[test]
    fn test_circular_orbit_eccentric_equals_mean() {
        for m_step in 0..16 {
            let m = m_step as f64 / 16.0 * TAU;
            let e_anom = solve_kepler(m, 0.0);
            assert!((e_anom - m).abs() < 1e-12, "E={e_anom} != M={m}");
        }
    }

    #[test]
    fn test_nan_mean_anomaly_terminates() {
        // A zero period upstream turns the mean anomaly into NaN; the solver
        // must return NaN rather than loop forever.
        assert!(solve_kepler(f64::NAN, 0.5).is_nan());
    }

    #[test]
    fn test_true_anomaly_identity_for_circular() {
        for e_step in 0..8 {
            let e_anom = e_step as f64 / 8.0 * TAU - PI;
            let nu = eccentric_to_true_anomaly(e_anom, 0.0);
            assert!((nu - e_anom).abs() < 1e-12);
        }
    }

    #[test]
    fn test_true_anomaly_at_apogee_is_pi() {
        // At E = pi the body sits at apogee for any eccentricity.
        for &e in &[0.0, 0.1, 0.5, 0.9] {
            let nu = eccentric_to_true_anomaly(PI, e);
            assert!((nu - PI).abs() < 1e-12, "nu={nu} for e={e}");
        }
    }

    #[test]
    fn test_radius_at_perigee_and_apogee() {
        let (a, e) = (200.0, 0.3);
        let perigee = orbital_position(a, e, 0.0, 0.0, 0.0, 0.0);
        assert!((perigee.length() - a * (1.0 - e)).abs() < 1e-9);

        let apogee = orbital_position(a, e, PI, 0.0, 0.0, 0.0);
        assert!((apogee.length() - a * (1.0 + e)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_inclination_stays_in_plane() {
        for step in 0..16 {
            let nu = step as f64 / 16.0 * TAU;
            let pos = orbital_position(150.0, 0.2, nu, 1.0, 0.5, 0.0);
            assert!(pos.z.abs() < 1e-12, "z={} at nu={nu}", pos.z);
        }
    }

    #[test]
    fn test_polar_orbit_axis_convention() {
        // i = 90 degrees, node and perigee at zero: a quarter orbit past
        // perigee must point straight out of the reference plane (+z).
        let pos = orbital_position(100.0, 0.0, FRAC_PI_2, 0.0, 0.0, FRAC_PI_2);
        assert!(pos.x.abs() < 1e-9);
        assert!(pos.y.abs() < 1e-9);
        assert!((pos.z - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_node_rotation_moves_perigee_direction() {
        // Rotating the ascending node by 90 degrees swings the perigee
        // direction from +x to +y.
        let pos = orbital_position(100.0, 0.0, 0.0, 0.0, FRAC_PI_2, 0.3);
        assert!(pos.x.abs() < 1e-9);
        assert!((pos.y - 100.0).abs() < 1e-9);
    }
}
