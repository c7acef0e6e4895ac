//! Timecards and the monthly payroll built from them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::Amount;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
}

/// One worked shift.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Timecard {
    pub employee_id: String,
    pub date: NaiveDate,
    /// `HH:MM`.
    #[serde(with = "hh_mm")]
    #[ts(type = "string")]
    pub shift_start: NaiveTime,
    /// `HH:MM`. Earlier than `shift_start` means the shift ran past midnight.
    #[serde(with = "hh_mm")]
    #[ts(type = "string")]
    pub shift_end: NaiveTime,
    #[serde(default)]
    pub event: String,
    pub hourly_rate: Amount,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    #[default]
    Pending,
    Approved,
    Processed,
}

/// One employee's pay for a month.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    pub employee_id: String,
    pub employee_name: String,
    /// `YYYY-MM`.
    pub period: String,
    pub total_hours: f64,
    pub gross_salary: Amount,
    pub taxes_deductions: Amount,
    pub net_salary: Amount,
    pub status: PayrollStatus,
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timecard_from_form_json() {
        let card: Timecard = serde_json::from_str(
            r#"{"employeeId": "E1", "date": "2024-03-15", "shiftStart": "17:30", "shiftEnd": "23:00", "event": "EVENT 1", "hourlyRate": 18.5}"#,
        )
        .expect("parse");
        assert_eq!(card.shift_start, NaiveTime::from_hms_opt(17, 30, 0).expect("valid time"));
        assert_eq!(card.hourly_rate, 18.5);

        let json = serde_json::to_value(&card).expect("serialize");
        assert_eq!(json["shiftEnd"], "23:00");
    }

    #[test]
    fn test_timecard_rejects_bad_time() {
        let result = serde_json::from_str::<Timecard>(
            r#"{"employeeId": "E1", "date": "2024-03-15", "shiftStart": "5pm", "shiftEnd": "23:00", "hourlyRate": 18}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_payroll_status_lowercase() {
        let json = serde_json::to_string(&PayrollStatus::Approved).expect("serialize");
        assert_eq!(json, "\"approved\"");
        assert_eq!(PayrollStatus::default(), PayrollStatus::Pending);
    }
}
