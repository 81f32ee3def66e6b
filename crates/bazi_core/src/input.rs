//! Birth data accepted by the engine.

use bazi_calendar::check_year;
use bazi_time::validate_utc_offset;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{BaziError, ValidationError};
use crate::options::ChartOptions;

/// Gender of the subject; carried through to the chart untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(ValidationError::new(
                "gender",
                format!("expected male or female, got {other:?}"),
            )),
        }
    }
}

/// Civil birth date and clock time with the birthplace longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub birth_date: NaiveDate,
    /// Civil clock hour, 0..=23.
    pub birth_hour: u32,
    /// Civil clock minute, 0..=59.
    pub birth_minute: u32,
    /// Degrees east, -180..=180.
    pub longitude: f64,
    pub gender: Gender,
}

impl BirthInput {
    /// Check clock fields and longitude. Date range is checked by the
    /// lunar conversion.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.birth_hour > 23 {
            return Err(ValidationError::new(
                "birth_hour",
                format!("{} not in 0..=23", self.birth_hour),
            ));
        }
        if self.birth_minute > 59 {
            return Err(ValidationError::new(
                "birth_minute",
                format!("{} not in 0..=59", self.birth_minute),
            ));
        }
        if !self.longitude.is_finite() {
            return Err(ValidationError::new("longitude", "missing or not a number"));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::new(
                "longitude",
                format!("{} not in -180..=180", self.longitude),
            ));
        }
        Ok(())
    }
}

/// Every check a birth must pass before it is charted under `options`:
/// clock fields, longitude, the supported year range and the zone offset.
///
/// Local and remote charting both run this first.
pub fn validate_birth(input: &BirthInput, options: &ChartOptions) -> Result<(), BaziError> {
    input.validate()?;
    check_year(input.birth_date.year())?;
    validate_utc_offset(options.utc_offset_minutes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> BirthInput {
        BirthInput {
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            birth_hour: 8,
            birth_minute: 30,
            longitude: 116.4,
            gender: Gender::Female,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn names_bad_field() {
        let mut i = input();
        i.birth_hour = 24;
        assert_eq!(i.validate().unwrap_err().field, "birth_hour");

        let mut i = input();
        i.birth_minute = 60;
        assert_eq!(i.validate().unwrap_err().field, "birth_minute");

        let mut i = input();
        i.longitude = f64::NAN;
        assert_eq!(i.validate().unwrap_err().field, "longitude");

        let mut i = input();
        i.longitude = -180.01;
        assert_eq!(i.validate().unwrap_err().field, "longitude");
    }

    #[test]
    fn full_check_covers_year_and_offset() {
        let options = ChartOptions::default();
        assert!(validate_birth(&input(), &options).is_ok());

        let early = BirthInput {
            birth_date: NaiveDate::from_ymd_opt(1850, 1, 1).unwrap(),
            ..input()
        };
        assert_eq!(validate_birth(&early, &options).unwrap_err().field(), Some("birth_date"));

        let far_zone = ChartOptions {
            utc_offset_minutes: 100_000,
            ..options
        };
        assert_eq!(
            validate_birth(&input(), &far_zone).unwrap_err().field(),
            Some("utc_offset_minutes")
        );

        let mut late_hour = input();
        late_hour.birth_hour = 24;
        assert_eq!(validate_birth(&late_hour, &options).unwrap_err().field(), Some("birth_hour"));
    }

    #[test]
    fn gender_parses() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("x".parse::<Gender>().unwrap_err().field, "gender");
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(input()).unwrap();
        assert_eq!(json["birth_date"], "1990-05-15");
        assert_eq!(json["gender"], "female");
    }
}
