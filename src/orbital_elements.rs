//! # Osculating orbital elements and the orbit geometry engine
//!
//! This module defines [`OrbitalElements`], the twelve-coefficient element set
//! used by the JPL approximate planetary ephemerides (six osculating Keplerian
//! elements at J2000 plus their linear per-century drift rates), and the two
//! geometry operations built on it:
//!
//! - [`OrbitalElements::position_at`] – heliocentric position of the body at
//!   an arbitrary epoch,
//! - [`OrbitalElements::orbit_path`] – a closed 37-point polyline sampling the
//!   full ellipse at the epoch's instantaneous elements.
//!
//! ## Units
//!
//! - Lengths: **AU**
//! - Angles: **degrees** (the tables quote degrees; the trigonometric helpers
//!   in [`crate::kepler`] convert at the call site)
//! - Time: **Julian Date**, drift rates per **Julian century**
//!
//! ## Frames
//!
//! Both operations return coordinates in the J2000 **ecliptic frame** (x
//! toward the vernal equinox, z normal to the ecliptic, right-handed). The
//! y-up display remap lives in [`crate::ref_frame`] and is applied only on
//! explicit request, e.g. through [`OrbitPath::to_display_frame`].
//!
//! ## Validity
//!
//! The engine supports elliptical orbits only: behavior for `e ≥ 1` is
//! undefined. All computation is pure and deterministic; identical inputs
//! yield bit-identical outputs.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, JulianDate};
use crate::kepler::{clamp_half_turn, cosd, sind, solve_eccentric_anomaly};
use crate::ref_frame::{perifocal_to_ecliptic, to_display};
use crate::time::centuries_since_j2000;

/// Number of points in an [`OrbitPath`]: eccentric anomaly sampled from 0° to
/// 360° inclusive in [`SAMPLE_STEP_DEG`] increments, duplicating the start
/// point so the polyline closes.
pub const ORBIT_SAMPLES: usize = 37;

/// Eccentric-anomaly step between consecutive [`OrbitPath`] samples.
pub const SAMPLE_STEP_DEG: Degree = 10.0;

/// Osculating Keplerian elements with linear per-century drift.
///
/// The six base elements describe the orbit exactly at the J2000 epoch
/// (JD 2451545.0); each is allowed to vary linearly with time through the
/// matching `*_rate` coefficient, in units per Julian century. This is the
/// layout of the JPL `approx_pos` planetary fit consumed by
/// [`crate::planets`].
///
/// Units
/// -----
/// * `semi_major_axis`: AU, rate in AU/century.
/// * `eccentricity`: unitless, rate per century.
/// * `inclination`, `mean_longitude`, `perihelion_longitude`,
///   `ascending_node_longitude`: degrees, rates in degrees/century.
///
/// The struct is plain immutable data: the engine never mutates it, and the
/// per-body table keeps one `static` instance per planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub mean_longitude: Degree,
    pub perihelion_longitude: Degree,
    pub ascending_node_longitude: Degree,
    pub semi_major_axis_rate: f64,
    pub eccentricity_rate: f64,
    pub inclination_rate: f64,
    pub mean_longitude_rate: f64,
    pub perihelion_longitude_rate: f64,
    pub ascending_node_longitude_rate: f64,
}

impl OrbitalElements {
    /// Build elements from the raw 12-value table row, in the published
    /// column order `[a, e, I, L, LP, LAN]` followed by the six rates.
    pub const fn from_array(coefficients: [f64; 12]) -> Self {
        Self {
            semi_major_axis: coefficients[0],
            eccentricity: coefficients[1],
            inclination: coefficients[2],
            mean_longitude: coefficients[3],
            perihelion_longitude: coefficients[4],
            ascending_node_longitude: coefficients[5],
            semi_major_axis_rate: coefficients[6],
            eccentricity_rate: coefficients[7],
            inclination_rate: coefficients[8],
            mean_longitude_rate: coefficients[9],
            perihelion_longitude_rate: coefficients[10],
            ascending_node_longitude_rate: coefficients[11],
        }
    }

    /// Propagate the base elements to `epoch` through the linear drift terms.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: target epoch as a Julian Date.
    ///
    /// Return
    /// ------
    /// * The instantaneous [`PropagatedElements`] at `epoch`.
    pub fn propagate(&self, epoch: JulianDate) -> PropagatedElements {
        let t = centuries_since_j2000(epoch);
        PropagatedElements {
            semi_major_axis: self.semi_major_axis + self.semi_major_axis_rate * t,
            eccentricity: self.eccentricity + self.eccentricity_rate * t,
            inclination: self.inclination + self.inclination_rate * t,
            mean_longitude: self.mean_longitude + self.mean_longitude_rate * t,
            perihelion_longitude: self.perihelion_longitude
                + self.perihelion_longitude_rate * t,
            ascending_node_longitude: self.ascending_node_longitude
                + self.ascending_node_longitude_rate * t,
        }
    }

    /// Heliocentric position of the body at `epoch`, in the J2000 ecliptic frame.
    ///
    /// Propagates the elements, reduces the mean anomaly into
    /// `(−180°, 180°]`, solves Kepler's equation for the eccentric anomaly,
    /// and rotates the orbital-plane coordinates into the ecliptic frame.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: target epoch as a Julian Date.
    ///
    /// Return
    /// ------
    /// * Position in AU. Convert with [`crate::ref_frame::to_display`] for a
    ///   y-up rendering convention.
    pub fn position_at(&self, epoch: JulianDate) -> Vector3<f64> {
        let elements = self.propagate(epoch);
        let mean_anomaly = clamp_half_turn(elements.mean_anomaly());
        let solution = solve_eccentric_anomaly(mean_anomaly, elements.eccentricity);

        elements.rotation_to_ecliptic() * elements.perifocal_position(solution.eccentric_anomaly)
    }

    /// Closed polyline approximating the full orbit at `epoch`, in the J2000
    /// ecliptic frame.
    ///
    /// The eccentric anomaly is the independent variable here, sampled from
    /// 0° to 360° inclusive in 10° steps (37 points, start duplicated at the
    /// end), so the anomaly solver is bypassed. The ellipse is a frozen
    /// snapshot of the elements propagated to `epoch`, not an average over
    /// time.
    pub fn orbit_path(&self, epoch: JulianDate) -> OrbitPath {
        let elements = self.propagate(epoch);
        let rotation = elements.rotation_to_ecliptic();

        let mut points = [Vector3::zeros(); ORBIT_SAMPLES];
        for (index, point) in points.iter_mut().enumerate() {
            let ecc_anomaly = index as f64 * SAMPLE_STEP_DEG;
            *point = rotation * elements.perifocal_position(ecc_anomaly);
        }

        OrbitPath { points }
    }
}

/// Instantaneous orbital elements at a specific epoch.
///
/// Transient output of [`OrbitalElements::propagate`]: all six values are
/// epoch-specific and only live for the duration of one position or path
/// computation. Angles are degrees, the semi-major axis is in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagatedElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub mean_longitude: Degree,
    pub perihelion_longitude: Degree,
    pub ascending_node_longitude: Degree,
}

impl PropagatedElements {
    /// Argument of perihelion `ω = LP − LAN`, in degrees.
    pub fn periapsis_argument(&self) -> Degree {
        self.perihelion_longitude - self.ascending_node_longitude
    }

    /// Mean anomaly `M = L − LP`, in degrees, unreduced. Callers feed it
    /// through [`clamp_half_turn`] before solving Kepler's equation.
    pub fn mean_anomaly(&self) -> Degree {
        self.mean_longitude - self.perihelion_longitude
    }

    /// Orbital-plane coordinates for an eccentric anomaly, x toward
    /// perihelion: `(a·(cos E − e), a·√(1−e²)·sin E, 0)`.
    fn perifocal_position(&self, ecc_anomaly: Degree) -> Vector3<f64> {
        let a = self.semi_major_axis;
        let e = self.eccentricity;
        Vector3::new(
            a * (cosd(ecc_anomaly) - e),
            a * (1.0 - e * e).sqrt() * sind(ecc_anomaly),
            0.0,
        )
    }

    fn rotation_to_ecliptic(&self) -> Matrix3<f64> {
        perifocal_to_ecliptic(
            self.periapsis_argument(),
            self.inclination,
            self.ascending_node_longitude,
        )
    }
}

/// Closed orbit polyline: [`ORBIT_SAMPLES`] ecliptic-frame points, in
/// sampling order, with the first point duplicated as the last.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    pub points: [Vector3<f64>; ORBIT_SAMPLES],
}

impl OrbitPath {
    /// Iterate over the sampled points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Vector3<f64>> {
        self.points.iter()
    }

    /// The same polyline remapped into the y-up display frame. See
    /// [`crate::ref_frame::ecliptic_to_display`].
    pub fn to_display_frame(&self) -> OrbitPath {
        let mut points = self.points;
        for point in points.iter_mut() {
            *point = to_display(point);
        }
        OrbitPath { points }
    }
}

#[cfg(test)]
mod orbital_elements_test {
    use super::*;
    use crate::constants::J2000_JD;
    use approx::assert_relative_eq;

    // Earth row of the JPL approximate-ephemeris fit.
    const EARTH: OrbitalElements = OrbitalElements::from_array([
        1.00000261,
        0.01671123,
        -0.00001531,
        100.4645717,
        102.9376819,
        0.0,
        0.00000562,
        -0.00004392,
        -0.01294668,
        35999.37245,
        0.32327364,
        0.0,
    ]);

    #[test]
    fn test_propagate_at_j2000_is_base() {
        let elements = EARTH.propagate(J2000_JD);
        assert_eq!(elements.semi_major_axis, EARTH.semi_major_axis);
        assert_eq!(elements.eccentricity, EARTH.eccentricity);
        assert_eq!(elements.mean_longitude, EARTH.mean_longitude);
    }

    #[test]
    fn test_propagate_applies_linear_drift() {
        // One Julian century after J2000 each element moves by exactly its rate.
        let elements = EARTH.propagate(J2000_JD + 36525.0);
        assert_relative_eq!(
            elements.eccentricity,
            EARTH.eccentricity + EARTH.eccentricity_rate,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            elements.mean_longitude,
            EARTH.mean_longitude + EARTH.mean_longitude_rate,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_derived_angles() {
        let elements = EARTH.propagate(J2000_JD);
        assert_relative_eq!(elements.periapsis_argument(), 102.9376819, epsilon = 1e-12);
        assert_relative_eq!(elements.mean_anomaly(), -2.4731102, epsilon = 1e-7);
    }

    #[test]
    fn test_earth_position_at_j2000() {
        let position = EARTH.position_at(J2000_JD);
        assert_relative_eq!(position.x, -0.17717124982000054, epsilon = 1e-9);
        assert_relative_eq!(position.y, 0.9672144848349807, epsilon = 1e-9);
        assert_relative_eq!(position.z, -2.5844929415430227e-7, epsilon = 1e-9);

        // Earth sits close to perihelion at the J2000 epoch.
        assert_relative_eq!(position.norm(), 0.9833, epsilon = 1e-3);
    }

    #[test]
    fn test_position_is_deterministic() {
        let first = EARTH.position_at(2_460_000.5);
        let second = EARTH.position_at(2_460_000.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_orbit_path_is_closed() {
        let path = EARTH.orbit_path(2_460_000.5);
        assert_eq!(path.points[0], path.points[ORBIT_SAMPLES - 1]);
    }

    #[test]
    fn test_orbit_path_radius_bounds() {
        let elements = EARTH.propagate(2_460_000.5);
        let perihelion = elements.semi_major_axis * (1.0 - elements.eccentricity);
        let aphelion = elements.semi_major_axis * (1.0 + elements.eccentricity);

        for point in EARTH.orbit_path(2_460_000.5).iter() {
            let radius = point.norm();
            assert!(radius >= perihelion - 1e-12 && radius <= aphelion + 1e-12);
        }
    }

    #[test]
    fn test_circular_orbit_path_is_unit_circle() {
        let circular = OrbitalElements::from_array([
            1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ]);
        let path = circular.orbit_path(J2000_JD);
        for point in path.iter() {
            assert_relative_eq!(point.norm(), 1.0, epsilon = 1e-14);
            assert_eq!(point.z, 0.0);
        }
    }

    #[test]
    fn test_orbit_path_display_frame() {
        let path = EARTH.orbit_path(J2000_JD);
        let display = path.to_display_frame();
        for (ecliptic, remapped) in path.iter().zip(display.iter()) {
            assert_eq!(remapped.x, ecliptic.x);
            assert_eq!(remapped.y, ecliptic.z);
            assert_eq!(remapped.z, -ecliptic.y);
        }
    }
}
