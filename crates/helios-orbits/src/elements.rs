//! Classical orbital elements plus a running simulation clock.

/// The six classical orbital elements for one orbiting body, together with
/// its period, rendering size, and accumulated simulation clock.
///
/// Angles are stored in radians; the constructor takes degrees and converts
/// exactly once. No validation happens here: eccentricities outside [0, 1)
/// or a zero period are precondition violations that surface downstream as
/// NaN positions, not as errors.
#[derive(Clone, Debug)]
pub struct OrbitalElementSet {
    /// Display label for the body.
    pub name: String,
    /// Semi-major axis in scene units. Must be positive.
    pub semi_major_axis: f64,
    /// Inclination relative to the reference plane, radians.
    pub inclination: f64,
    /// Argument of perigee, radians.
    pub arg_perigee: f64,
    /// Eccentricity in [0, 1). 0 = circular.
    pub eccentricity: f64,
    /// Right ascension of the ascending node, radians.
    pub raan: f64,
    /// Orbital period in years. Must be positive.
    pub period: f64,
    /// Current true anomaly, radians. Mutated on every propagation step.
    pub true_anomaly: f64,
    /// Accumulated simulated time since creation. Monotonically
    /// non-decreasing.
    pub time: f64,
    /// Rendering radius in scene units. Not used by the orbital math.
    pub size: f64,
}

impl OrbitalElementSet {
    /// Build an element set from one row of catalog data.
    ///
    /// Angular inputs are degrees and converted to radians here, once. The
    /// anomaly seed is stored directly as the initial true anomaly; it is
    /// not run through the Kepler solver first.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        semi_major_axis: f64,
        inclination_deg: f64,
        arg_perigee_deg: f64,
        eccentricity: f64,
        raan_deg: f64,
        anomaly_deg: f64,
        period_years: f64,
        size: f64,
    ) -> Self {
        Self {
            name: name.into(),
            semi_major_axis,
            inclination: inclination_deg.to_radians(),
            arg_perigee: arg_perigee_deg.to_radians(),
            eccentricity,
            raan: raan_deg.to_radians(),
            period: period_years,
            true_anomaly: anomaly_deg.to_radians(),
            time: 0.0,
            size,
        }
    }
}
