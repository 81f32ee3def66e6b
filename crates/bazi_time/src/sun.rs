//! Low-precision solar coordinates.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25 ("lower accuracy"
//! method, ~0.01 deg) and the mean obliquity of Chapter 22. Accurate enough
//! to place a solar term to within about a quarter of an hour, which is all
//! the lunar calendar and the equation of time need.

use crate::julian::jd_to_centuries;

/// Mean tropical year in days, used to turn longitude residuals into time.
const TROPICAL_YEAR_DAYS: f64 = 365.242_189;

const MAX_ITERATIONS: usize = 20;

/// Longitude residual below which a crossing is considered found (deg).
const CONVERGENCE_DEG: f64 = 1.0e-7;

/// Intermediate solar quantities at an instant (all angles in degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// Geometric mean longitude L0, normalized to [0, 360).
    pub mean_longitude_deg: f64,
    /// Mean anomaly M, normalized to [0, 360).
    pub mean_anomaly_deg: f64,
    /// Eccentricity of Earth's orbit.
    pub eccentricity: f64,
    /// Apparent longitude λ (nutation + aberration), normalized to [0, 360).
    pub apparent_longitude_deg: f64,
    /// Apparent obliquity of the ecliptic ε.
    pub obliquity_deg: f64,
}

fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize to (-180, 180].
fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Solar coordinates at a Julian Ephemeris Day (TT).
pub fn solar_coordinates(jd_tt: f64) -> SolarCoordinates {
    let t = jd_to_centuries(jd_tt);
    let t2 = t * t;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();
    let true_longitude = l0 + c;

    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = true_longitude - 0.005_69 - 0.004_78 * omega.sin();

    // Mean obliquity (Meeus 22.2), arcseconds part folded into degrees.
    let eps0 = 23.0
        + (26.0 + (21.448 - 46.8150 * t - 0.000_59 * t2 + 0.001_813 * t2 * t) / 60.0) / 60.0;
    let eps = eps0 + 0.002_56 * omega.cos();

    SolarCoordinates {
        mean_longitude_deg: normalize_360(l0),
        mean_anomaly_deg: normalize_360(m),
        eccentricity: e,
        apparent_longitude_deg: normalize_360(apparent),
        obliquity_deg: eps,
    }
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees [0, 360).
pub fn apparent_solar_longitude_deg(jd_tt: f64) -> f64 {
    solar_coordinates(jd_tt).apparent_longitude_deg
}

/// Instant (JD TT) closest to `jd_tt_guess` at which the Sun's apparent
/// longitude equals `target_deg`.
///
/// Newton-style refinement using the mean solar rate; the guess must lie
/// within half a year of the wanted crossing.
pub fn solar_longitude_crossing_near(jd_tt_guess: f64, target_deg: f64) -> f64 {
    let rate = TROPICAL_YEAR_DAYS / 360.0;
    let mut jd = jd_tt_guess;
    for _ in 0..MAX_ITERATIONS {
        let residual = normalize_pm180(target_deg - apparent_solar_longitude_deg(jd));
        jd += residual * rate;
        if residual.abs() < CONVERGENCE_DEG {
            break;
        }
    }
    jd
}
