//! The static planetary element table.
//!
//! Semi-major axes are pre-scaled for the scene: astronomical units times a
//! per-planet display factor that compresses the outer system into view.
//! Periods are in years; angles in degrees until the element set converts
//! them.

use helios_orbits::OrbitalElementSet;

/// One row of the planetary element table, fixed at build time.
#[derive(Clone, Copy, Debug)]
pub struct BodyRecord {
    pub name: &'static str,
    /// Scene-scaled semi-major axis.
    pub semi_major_axis: f64,
    pub inclination_deg: f64,
    pub arg_perigee_deg: f64,
    pub eccentricity: f64,
    pub raan_deg: f64,
    /// Initial anomaly seed, degrees. Stored directly as the starting true
    /// anomaly.
    pub anomaly_deg: f64,
    pub period_years: f64,
    /// Rendering radius in scene units.
    pub size: f64,
    /// Display color, linear RGB.
    pub color: [f32; 3],
    /// Whether the planet carries a flat ring mesh.
    pub has_ring: bool,
}

impl BodyRecord {
    /// Build the live element set for this body.
    pub fn element_set(&self) -> OrbitalElementSet {
        OrbitalElementSet::new(
            self.name,
            self.semi_major_axis,
            self.inclination_deg,
            self.arg_perigee_deg,
            self.eccentricity,
            self.raan_deg,
            self.anomaly_deg,
            self.period_years,
            self.size,
        )
    }
}

/// The eight planets, Mercury through Neptune.
pub const PLANETS: [BodyRecord; 8] = [
    BodyRecord {
        name: "Mercury",
        semi_major_axis: 0.38709893 * 190.0,
        inclination_deg: 7.00487,
        arg_perigee_deg: 77.46,
        eccentricity: 0.20563069,
        raan_deg: 48.33167,
        anomaly_deg: 252.25,
        period_years: 0.240846,
        size: 2.40350877193,
        color: [0.55, 0.50, 0.45],
        has_ring: false,
    },
    BodyRecord {
        name: "Venus",
        semi_major_axis: 0.72333199 * 170.0,
        inclination_deg: 3.39471,
        arg_perigee_deg: 131.77,
        eccentricity: 0.00677323,
        raan_deg: 76.68069,
        anomaly_deg: 181.98,
        period_years: 0.615,
        size: 5.47634776115,
        color: [0.90, 0.78, 0.55],
        has_ring: false,
    },
    BodyRecord {
        name: "Earth",
        semi_major_axis: 1.00000011 * 200.0,
        inclination_deg: 0.00005,
        arg_perigee_deg: 100.47,
        eccentricity: 0.01671022,
        raan_deg: -11.26064,
        anomaly_deg: 100.47,
        period_years: 0.2,
        size: 5.65970646524,
        color: [0.22, 0.42, 0.80],
        has_ring: false,
    },
    BodyRecord {
        name: "Mars",
        semi_major_axis: 1.5236623 * 200.0,
        inclination_deg: 1.85061,
        arg_perigee_deg: 336.04084084,
        eccentricity: 0.09341233,
        raan_deg: 49.57854,
        anomaly_deg: 355.43,
        period_years: 1.880847,
        size: 4.94703736681,
        color: [0.80, 0.38, 0.22],
        has_ring: false,
    },
    BodyRecord {
        name: "Jupiter",
        semi_major_axis: 5.2044 * 160.0,
        inclination_deg: 1.303,
        arg_perigee_deg: 34.7,
        eccentricity: 0.0484,
        raan_deg: 100.5,
        anomaly_deg: 49.5,
        period_years: 11.862,
        size: 25.9468,
        color: [0.80, 0.66, 0.50],
        has_ring: false,
    },
    BodyRecord {
        name: "Saturn",
        semi_major_axis: 9.5826 * 140.0,
        inclination_deg: 2.489,
        arg_perigee_deg: 339.5,
        eccentricity: 0.0565,
        raan_deg: 113.7,
        anomaly_deg: 316.9,
        period_years: 29.457,
        size: 20.4286967195,
        color: [0.85, 0.76, 0.56],
        has_ring: true,
    },
    BodyRecord {
        name: "Uranus",
        semi_major_axis: 19.2184 * 110.0,
        inclination_deg: 0.769,
        arg_perigee_deg: 96.6,
        eccentricity: 0.0457,
        raan_deg: 74.0,
        anomaly_deg: 142.8,
        period_years: 84.02,
        size: 14.5687451532,
        color: [0.55, 0.80, 0.85],
        has_ring: false,
    },
    BodyRecord {
        name: "Neptune",
        semi_major_axis: 30.0583 * 90.0,
        inclination_deg: 1.769,
        arg_perigee_deg: 253.2,
        eccentricity: 0.0086,
        raan_deg: 131.8,
        anomaly_deg: 256.2,
        period_years: 164.8,
        size: 14.1436654508,
        color: [0.30, 0.42, 0.88],
        has_ring: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_planets() {
        assert_eq!(PLANETS.len(), 8);
        assert_eq!(PLANETS[0].name, "Mercury");
        assert_eq!(PLANETS[7].name, "Neptune");
    }

    #[test]
    fn test_catalog_values_are_physical() {
        for record in &PLANETS {
            assert!(record.semi_major_axis > 0.0, "{}", record.name);
            assert!(record.period_years > 0.0, "{}", record.name);
            assert!(record.size > 0.0, "{}", record.name);
            assert!(
                (0.0..1.0).contains(&record.eccentricity),
                "{} eccentricity {}",
                record.name,
                record.eccentricity
            );
        }
    }

    #[test]
    fn test_catalog_eccentricities_match_data_set_bound() {
        // The catalog never exceeds Mercury's 0.2056.
        for record in &PLANETS {
            assert!(record.eccentricity < 0.21, "{}", record.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in PLANETS.iter().enumerate() {
            for b in &PLANETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_only_saturn_has_a_ring() {
        let ringed: Vec<_> = PLANETS.iter().filter(|r| r.has_ring).collect();
        assert_eq!(ringed.len(), 1);
        assert_eq!(ringed[0].name, "Saturn");
    }

    #[test]
    fn test_element_set_carries_record_values() {
        let earth = PLANETS[2].element_set();
        assert_eq!(earth.name, "Earth");
        assert_eq!(earth.period, 0.2);
        assert!((earth.semi_major_axis - 200.000022).abs() < 1e-9);
    }
}
