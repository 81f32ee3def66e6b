//! Wire shapes exchanged with the remote chart service.

use bazi_core::{BaziChart, BirthInput, Gender};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Birth data as the remote service expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Always `"solar"`: the engine only accepts civil dates.
    pub calendar_type: String,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_hour: u32,
    pub birth_minute: u32,
    pub gender: Gender,
    pub longitude: f64,
}

impl From<&BirthInput> for UserData {
    fn from(input: &BirthInput) -> Self {
        Self {
            calendar_type: "solar".to_owned(),
            birth_year: input.birth_date.year(),
            birth_month: input.birth_date.month(),
            birth_day: input.birth_date.day(),
            birth_hour: input.birth_hour,
            birth_minute: input.birth_minute,
            gender: input.gender,
            longitude: input.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "userData")]
    pub user_data: UserData,
}

impl From<&BirthInput> for ChartRequest {
    fn from(input: &BirthInput) -> Self {
        Self {
            user_data: input.into(),
        }
    }
}

/// Expected success body: `{"chart": <BaziChart>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    pub chart: BaziChart,
}
