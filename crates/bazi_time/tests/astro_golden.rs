//! Reference instants for the Sun and Moon and true solar time at known
//! places. Times are UTC from published almanacs, rounded to the minute.

use bazi_time::{
    calendar_to_jd, delta_t_days, new_moon_on_or_before, solar_longitude_crossing_near,
    to_true_solar_time,
};
use chrono::NaiveDate;

fn jd_utc(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> f64 {
    calendar_to_jd(y, m, d as f64 + (hour as f64 + minute as f64 / 60.0) / 24.0)
}

#[rustfmt::skip]
const SEASONS: &[(f64, (i32, u32, u32, u32, u32))] = &[
    (  0.0, (2024,  3, 20,  3,  6)),
    ( 90.0, (2024,  6, 20, 20, 51)),
    (180.0, (2024,  9, 22, 12, 44)),
    (270.0, (2024, 12, 21,  9, 21)),
    ( 90.0, (2020,  6, 20, 21, 44)),
    (270.0, (2000, 12, 21, 13, 37)),
    (270.0, (1990, 12, 22,  3,  7)),
];

#[test]
fn equinoxes_and_solstices() {
    for &(target, (y, m, d, h, mi)) in SEASONS {
        let expected = jd_utc(y, m, d, h, mi);
        let tt = solar_longitude_crossing_near(expected - 5.0, target);
        let ut = tt - delta_t_days(tt);
        assert!(
            (ut - expected).abs() < 0.02,
            "{target} deg in {y}: got {ut}, expected {expected}"
        );
    }
}

#[rustfmt::skip]
const NEW_MOONS: &[(i32, u32, u32, u32, u32)] = &[
    (2000,  1,  6, 18, 14),
    (2017,  8, 21, 18, 30),
    (2023,  1, 21, 20, 53),
    (2024,  1, 11, 11, 57),
    (2024,  2,  9, 22, 59),
];

#[test]
fn new_moons() {
    for &(y, m, d, h, mi) in NEW_MOONS {
        let expected = jd_utc(y, m, d, h, mi);
        let (_, jd) = new_moon_on_or_before(expected + 1.0);
        assert!(
            (jd - expected).abs() < 0.01,
            "{y}-{m:02}-{d:02}: got {jd}, expected {expected}"
        );
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn beijing_in_february_runs_half_an_hour_behind() {
    // -14.4 min of longitude plus about -14.2 min equation of time.
    let st = to_true_solar_time(date(2024, 2, 10), 12, 0, 116.4, 480).unwrap();
    assert!((st.offset_minutes + 28.6).abs() < 0.5, "{st:?}");
    assert_eq!(st.hour, 11);
    assert!((30..=32).contains(&st.minute), "{st:?}");
    assert_eq!(st.day_shift, 0);
}

#[test]
fn new_york_in_november_runs_ahead() {
    // +4 min of longitude plus about +16.4 min equation of time.
    let st = to_true_solar_time(date(2024, 11, 3), 12, 0, -74.0, -300).unwrap();
    assert!((st.offset_minutes - 20.4).abs() < 0.5, "{st:?}");
    assert_eq!(st.hour, 12);
}

#[test]
fn far_west_of_zone_meridian() {
    // Kashgar keeps Beijing time: more than two and a half hours early.
    let st = to_true_solar_time(date(2024, 6, 15), 12, 0, 75.99, 480).unwrap();
    assert!(st.offset_minutes < -170.0 && st.offset_minutes > -180.0, "{st:?}");
    assert_eq!(st.hour, 9);
}
