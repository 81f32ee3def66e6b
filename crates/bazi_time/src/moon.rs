//! New moon instants.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 49: mean phase
//! polynomial plus the 25 periodic corrections for the new moon and the 14
//! planetary arguments. Error is well under a minute for 1900–2100.

use std::f64::consts::PI;

use crate::delta_t::delta_t_days;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// JDE of the mean new moon with k = 0 (2000 Jan 6).
const EPOCH_JDE: f64 = 2_451_550.097_66;

fn rad(deg: f64) -> f64 {
    (deg % 360.0) * PI / 180.0
}

/// Periodic terms for the new moon: `[coefficient, E power, nM', nM, nF, nΩ]`.
#[rustfmt::skip]
static NEW_MOON_TERMS: [[f64; 6]; 25] = [
    // coeff      E^   M'    M     F     Ω
    [-0.407_20,  0.0, 1.0,  0.0,  0.0,  0.0],
    [ 0.172_41,  1.0, 0.0,  1.0,  0.0,  0.0],
    [ 0.016_08,  0.0, 2.0,  0.0,  0.0,  0.0],
    [ 0.010_39,  0.0, 0.0,  0.0,  2.0,  0.0],
    [ 0.007_39,  1.0, 1.0, -1.0,  0.0,  0.0],
    [-0.005_14,  1.0, 1.0,  1.0,  0.0,  0.0],
    [ 0.002_08,  2.0, 0.0,  2.0,  0.0,  0.0],
    [-0.001_11,  0.0, 1.0,  0.0, -2.0,  0.0],
    [-0.000_57,  0.0, 1.0,  0.0,  2.0,  0.0],
    [ 0.000_56,  1.0, 2.0,  1.0,  0.0,  0.0],
    [-0.000_42,  0.0, 3.0,  0.0,  0.0,  0.0],
    [ 0.000_42,  1.0, 0.0,  1.0,  2.0,  0.0],
    [ 0.000_38,  1.0, 0.0,  1.0, -2.0,  0.0],
    [-0.000_24,  1.0, 2.0, -1.0,  0.0,  0.0],
    [-0.000_17,  0.0, 0.0,  0.0,  0.0,  1.0],
    [-0.000_07,  0.0, 1.0,  2.0,  0.0,  0.0],
    [ 0.000_04,  0.0, 2.0,  0.0, -2.0,  0.0],
    [ 0.000_04,  0.0, 0.0,  3.0,  0.0,  0.0],
    [ 0.000_03,  0.0, 1.0,  1.0, -2.0,  0.0],
    [ 0.000_03,  0.0, 2.0,  0.0,  2.0,  0.0],
    [-0.000_03,  0.0, 1.0,  1.0,  2.0,  0.0],
    [ 0.000_03,  0.0, 1.0, -1.0,  2.0,  0.0],
    [-0.000_02,  0.0, 1.0, -1.0, -2.0,  0.0],
    [-0.000_02,  0.0, 3.0,  1.0,  0.0,  0.0],
    [ 0.000_02,  0.0, 4.0,  0.0,  0.0,  0.0],
];

/// Planetary arguments A1..A14: `[constant, k rate, coefficient]`.
/// A1 additionally carries `-0.009173 T²`.
#[rustfmt::skip]
static PLANETARY_TERMS: [[f64; 3]; 14] = [
    [299.77,  0.107_408, 0.000_325],
    [251.88,  0.016_321, 0.000_165],
    [251.83, 26.651_886, 0.000_164],
    [349.42, 36.412_478, 0.000_126],
    [ 84.66, 18.206_239, 0.000_110],
    [141.74, 53.303_771, 0.000_062],
    [207.14,  2.453_732, 0.000_060],
    [154.84,  7.306_860, 0.000_056],
    [ 34.52, 27.261_239, 0.000_047],
    [207.19,  0.121_824, 0.000_042],
    [291.34,  1.844_379, 0.000_040],
    [161.72, 24.198_154, 0.000_037],
    [239.56, 25.513_099, 0.000_035],
    [331.55,  3.592_518, 0.000_023],
];

/// True new moon for lunation number `k` (k = 0 is 2000 Jan 6), in JDE (TT).
pub fn new_moon_jd_tt(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = EPOCH_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = rad(2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3);
    let mp = rad(
        201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
            - 0.000_000_058 * t4,
    );
    let f = rad(
        160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
            + 0.000_000_011 * t4,
    );
    let omega = rad(124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3);

    let periodic: f64 = NEW_MOON_TERMS
        .iter()
        .map(|&[coeff, e_pow, n_mp, n_m, n_f, n_om]| {
            coeff * e.powi(e_pow as i32) * (n_mp * mp + n_m * m + n_f * f + n_om * omega).sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, &[a0, rate, coeff])| {
            let extra = if i == 0 { -0.009_173 * t2 } else { 0.0 };
            coeff * rad(a0 + rate * k + extra).sin()
        })
        .sum();

    mean + periodic + planetary
}

/// True new moon for lunation number `k`, in JD UT.
pub fn new_moon_jd_ut(k: i64) -> f64 {
    let tt = new_moon_jd_tt(k);
    tt - delta_t_days(tt)
}

/// The last new moon at or before `jd_ut`, as `(k, jd_ut)`.
pub fn new_moon_on_or_before(jd_ut: f64) -> (i64, f64) {
    let mut k = ((jd_ut - EPOCH_JDE) / SYNODIC_MONTH_DAYS).floor() as i64;
    let mut nm = new_moon_jd_ut(k);
    while nm > jd_ut {
        k -= 1;
        nm = new_moon_jd_ut(k);
    }
    loop {
        let next = new_moon_jd_ut(k + 1);
        if next > jd_ut {
            return (k, nm);
        }
        k += 1;
        nm = next;
    }
}
