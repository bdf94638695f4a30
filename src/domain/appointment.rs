use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A booking record as returned by the appointment service. Read-only on
/// this side; the UI never mutates or persists records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    #[serde(default)]
    pub email: Option<String>,
    pub service: Vec<String>,
    pub date: String,
    pub time: String,
}

impl Appointment {
    /// Missing or empty email renders as the placeholder.
    pub fn display_email(&self) -> &str {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => email,
            _ => "N/A",
        }
    }

    pub fn display_services(&self) -> String {
        self.service.join(", ")
    }

    pub fn display_date(&self) -> String {
        locale_date(&self.date)
    }

    /// HH:MM, truncated from the longer wire form.
    pub fn display_time(&self) -> &str {
        short_time(&self.time)
    }
}

/// Short locale date (M/D/YYYY, no zero padding), used both for display
/// and for date-filter equality. Input that does not parse as a date
/// falls back to the raw string.
pub fn locale_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn short_time(raw: &str) -> &str {
    raw.get(..5).unwrap_or(raw)
}
