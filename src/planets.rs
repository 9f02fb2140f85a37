//! # Static element table for the major solar-system bodies
//!
//! Osculating elements for the planets, given for epoch 2000 January 1.5
//! (JD 2451545.0). The values are a least-squares fit of the 250-year span of
//! the DE 200 planetary ephemeris to a Keplerian orbit, with each element
//! allowed to vary linearly with time. The fit holds the terrestrial planets
//! to within 25 arcseconds or better, but only reaches 10-arcminute accuracy
//! for Saturn. Elements are referenced to the mean ecliptic and equinox of
//! J2000.
//!
//! Source: <https://ssd.jpl.nasa.gov/planets/approx_pos.html>
//!
//! The table is immutable and statically initialized; lookups borrow
//! `'static` data and never allocate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::Kilometer;
use crate::orbital_elements::OrbitalElements;
use crate::orrery_errors::OrreryError;

static SUN: OrbitalElements = OrbitalElements::from_array([
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
]);

static MERCURY: OrbitalElements = OrbitalElements::from_array([
    0.38709927,
    0.20563593,
    7.00497902,
    252.2503235,
    77.45779628,
    48.33076593,
    0.00000037,
    0.00001906,
    -0.00594749,
    149472.6741,
    0.16047689,
    -0.12534081,
]);

static VENUS: OrbitalElements = OrbitalElements::from_array([
    0.72333566,
    0.00677672,
    3.39467605,
    181.9790995,
    131.6024672,
    76.67984255,
    0.0000039,
    -0.00004107,
    -0.0007889,
    58517.81539,
    0.00268329,
    -0.27769418,
]);

static EARTH: OrbitalElements = OrbitalElements::from_array([
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

static MARS: OrbitalElements = OrbitalElements::from_array([
    1.52371034,
    0.0933941,
    1.84969142,
    -4.55343205,
    -23.94362959,
    49.55953891,
    0.00001847,
    0.00007882,
    -0.00813131,
    19140.30268,
    0.44441088,
    -0.29257343,
]);

static JUPITER: OrbitalElements = OrbitalElements::from_array([
    5.202887,
    0.04838624,
    1.30439695,
    34.39644051,
    14.72847983,
    100.4739091,
    -0.00011607,
    -0.00013253,
    -0.00183714,
    3034.746128,
    0.21252668,
    0.20469106,
]);

static SATURN: OrbitalElements = OrbitalElements::from_array([
    9.53667594,
    0.05386179,
    2.48599187,
    49.95424423,
    92.59887831,
    113.6624245,
    -0.0012506,
    -0.00050991,
    0.00193609,
    1222.493622,
    -0.41897216,
    -0.28867794,
]);

static URANUS: OrbitalElements = OrbitalElements::from_array([
    19.18916464,
    0.04725744,
    0.77263783,
    313.2381045,
    170.9542763,
    74.01692503,
    -0.00196176,
    -0.00004397,
    -0.00242939,
    428.4820279,
    0.40805281,
    0.04240589,
]);

static NEPTUNE: OrbitalElements = OrbitalElements::from_array([
    30.06992276,
    0.00859048,
    1.77004347,
    -55.12002969,
    44.96476227,
    131.7842257,
    0.00026291,
    0.00005105,
    0.00035372,
    218.4594533,
    -0.32241464,
    -0.00508664,
]);

/// Identifier of a solar-system body carried by the static element table.
///
/// The Sun is included with an all-zero element row so a scene can place it
/// at the origin through the same code path as the planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// All bodies in the table, in heliocentric-distance order.
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Osculating elements of the body from the JPL fit.
    pub fn elements(&self) -> &'static OrbitalElements {
        match self {
            Body::Sun => &SUN,
            Body::Mercury => &MERCURY,
            Body::Venus => &VENUS,
            Body::Earth => &EARTH,
            Body::Mars => &MARS,
            Body::Jupiter => &JUPITER,
            Body::Saturn => &SATURN,
            Body::Uranus => &URANUS,
            Body::Neptune => &NEPTUNE,
        }
    }

    /// Equatorial diameter of the body, in kilometers.
    pub fn diameter_km(&self) -> Kilometer {
        match self {
            Body::Sun => 1_400_000.0,
            Body::Mercury => 4_879.0,
            Body::Venus => 12_104.0,
            Body::Earth => 12_756.0,
            Body::Mars => 3_934.0,
            Body::Jupiter => 142_984.0,
            Body::Saturn => 120_536.0,
            Body::Uranus => 51_118.0,
            Body::Neptune => 49_529.0,
        }
    }

    /// Lowercase table key of the body.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Earth => "earth",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Body {
    type Err = OrreryError;

    /// Parse a body from its table key, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sun" => Ok(Body::Sun),
            "mercury" => Ok(Body::Mercury),
            "venus" => Ok(Body::Venus),
            "earth" => Ok(Body::Earth),
            "mars" => Ok(Body::Mars),
            "jupiter" => Ok(Body::Jupiter),
            "saturn" => Ok(Body::Saturn),
            "uranus" => Ok(Body::Uranus),
            "neptune" => Ok(Body::Neptune),
            _ => Err(OrreryError::UnknownBody(s.to_string())),
        }
    }
}

#[cfg(test)]
mod planets_test {
    use super::*;

    #[test]
    fn test_table_row_ordering() {
        let mercury = Body::Mercury.elements();
        assert_eq!(mercury.semi_major_axis, 0.38709927);
        assert_eq!(mercury.eccentricity, 0.20563593);
        assert_eq!(mercury.inclination, 7.00497902);
        assert_eq!(mercury.mean_longitude, 252.2503235);
        assert_eq!(mercury.perihelion_longitude, 77.45779628);
        assert_eq!(mercury.ascending_node_longitude, 48.33076593);
        assert_eq!(mercury.mean_longitude_rate, 149472.6741);
    }

    #[test]
    fn test_all_eccentricities_are_elliptical() {
        for body in Body::ALL {
            let e = body.elements().eccentricity;
            assert!((0.0..1.0).contains(&e), "{body} has e = {e}");
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for body in Body::ALL {
            assert_eq!(body.name().parse::<Body>().unwrap(), body);
        }
        assert_eq!("EARTH".parse::<Body>().unwrap(), Body::Earth);
        assert_eq!("Jupiter".parse::<Body>().unwrap(), Body::Jupiter);
    }

    #[test]
    fn test_from_str_unknown_body() {
        assert_eq!(
            "pluto".parse::<Body>(),
            Err(OrreryError::UnknownBody("pluto".to_string()))
        );
    }

    #[test]
    fn test_sun_sits_at_origin() {
        let position = Body::Sun.elements().position_at(2_460_000.5);
        assert_eq!(position.norm(), 0.0);
    }
}
