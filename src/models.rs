use crate::errors::ControllerError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The (year, month) pair a calendar page displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarPosition {
    pub year: i32,
    pub month: u32,
}

impl CalendarPosition {
    pub fn new(year: i32, month: u32) -> Result<Self, ControllerError> {
        if !(1..=12).contains(&month) {
            return Err(ControllerError::InvalidPosition(format!(
                "month {month} is outside 1..=12"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parses a page heading such as `2024年1月`.
    pub fn from_heading(heading: &str) -> Result<Self, ControllerError> {
        let invalid = || ControllerError::InvalidPosition(format!("unrecognised heading '{heading}'"));
        let (year, rest) = heading.trim().split_once('年').ok_or_else(invalid)?;
        let (month, _) = rest.split_once('月').ok_or_else(invalid)?;
        let year = year.trim().parse::<i32>().map_err(|_| invalid())?;
        let month = month.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl fmt::Display for CalendarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}月", self.year, self.month)
    }
}

/// One day's dataset. Only constructible for real calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootfallQuery {
    year: i32,
    month: u32,
    day: u32,
}

impl FootfallQuery {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ControllerError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(ControllerError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for FootfallQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub hour: Option<u32>,
    pub count: f64,
    pub weather: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootfallSummary {
    pub date: Option<String>,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FootfallResult {
    Success(FootfallSummary),
    Error(String),
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    footfall: Option<SamplesBody>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SamplesBody {
    Series(Vec<f64>),
    Hourly(BTreeMap<String, HourlyEntry>),
}

#[derive(Debug, Deserialize)]
struct HourlyEntry {
    #[serde(default)]
    count: Option<f64>,
    #[serde(default)]
    weather: Option<String>,
}

impl FootfallResult {
    /// Decodes a summary body. A non-empty `error` field takes precedence
    /// over any samples.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ControllerError> {
        let body: SummaryBody =
            serde_json::from_slice(bytes).map_err(|source| ControllerError::Decode {
                context: "footfall summary".to_string(),
                source,
            })?;

        if let Some(message) = body.error.filter(|message| !message.is_empty()) {
            return Ok(Self::Error(message));
        }

        let samples = match body.footfall.ok_or(ControllerError::MissingField("footfall"))? {
            SamplesBody::Series(values) => values
                .into_iter()
                .map(|count| Sample {
                    hour: None,
                    count,
                    weather: None,
                })
                .collect(),
            SamplesBody::Hourly(entries) => {
                let mut samples: Vec<Sample> = entries
                    .into_iter()
                    .map(|(hour, entry)| Sample {
                        hour: hour.trim().parse().ok(),
                        count: entry.count.unwrap_or_default(),
                        weather: entry.weather,
                    })
                    .collect();
                // String keys sort "10" before "2".
                samples.sort_by_key(|sample| sample.hour.unwrap_or(u32::MAX));
                samples
            }
        };

        Ok(Self::Success(FootfallSummary {
            date: body.date,
            samples,
        }))
    }
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn mime_type(&self) -> &'static str {
        let extension = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "mp4" => "video/mp4",
            "avi" => "video/x-msvideo",
            "mov" => "video/quicktime",
            "mkv" => "video/x-matroska",
            _ => "application/octet-stream",
        }
    }
}

/// Successful upload response. Only `download_url` drives the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadReceipt {
    pub download_url: String,
    pub message: Option<String>,
    pub file_path: Option<String>,
    pub footfall: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct UploadBody {
    #[serde(default)]
    download_url: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    file_path: Option<String>,
    #[serde(default)]
    footfall: Option<serde_json::Value>,
}

impl UploadReceipt {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ControllerError> {
        let body: UploadBody =
            serde_json::from_slice(bytes).map_err(|source| ControllerError::Decode {
                context: "upload response".to_string(),
                source,
            })?;
        let download_url = body
            .download_url
            .filter(|url| !url.is_empty())
            .ok_or(ControllerError::MissingField("download_url"))?;
        Ok(Self {
            download_url,
            message: body.message,
            file_path: body.file_path,
            footfall: body.footfall,
        })
    }
}

pub type UploadOutcome = Result<UploadReceipt, ControllerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_parses_year_and_month() {
        let position = CalendarPosition::from_heading("2024年1月").unwrap();
        assert_eq!(position, CalendarPosition { year: 2024, month: 1 });
        assert_eq!(position.to_string(), "2024年1月");
    }

    #[test]
    fn heading_rejects_garbage_and_bad_months() {
        assert!(CalendarPosition::from_heading("January 2024").is_err());
        assert!(CalendarPosition::from_heading("2024年13月").is_err());
    }

    #[test]
    fn query_rejects_impossible_dates() {
        assert!(FootfallQuery::new(2024, 2, 29).is_ok());
        assert!(matches!(
            FootfallQuery::new(2023, 2, 29),
            Err(ControllerError::InvalidDate { .. })
        ));
    }

    #[test]
    fn summary_series_decodes() {
        let result = FootfallResult::from_slice(br#"{"footfall":[10,20,5]}"#).unwrap();
        let FootfallResult::Success(summary) = result else {
            panic!("expected success");
        };
        assert_eq!(summary.samples.len(), 3);
        assert_eq!(summary.samples[1].count, 20.0);
    }

    #[test]
    fn summary_hourly_map_orders_by_hour() {
        let body = br#"{"date":"2025-06-19","footfall":{
            "10":{"count":7,"weather":"Rain"},
            "2":{"count":3,"weather":"Clear"},
            "9":{"count":null}
        }}"#;
        let FootfallResult::Success(summary) = FootfallResult::from_slice(body).unwrap() else {
            panic!("expected success");
        };
        let hours: Vec<_> = summary.samples.iter().map(|s| s.hour).collect();
        assert_eq!(hours, vec![Some(2), Some(9), Some(10)]);
        assert_eq!(summary.samples[1].count, 0.0);
        assert_eq!(summary.date.as_deref(), Some("2025-06-19"));
    }

    #[test]
    fn summary_error_wins() {
        let result = FootfallResult::from_slice(br#"{"error":"no data","footfall":[1]}"#).unwrap();
        assert_eq!(result, FootfallResult::Error("no data".into()));
    }

    #[test]
    fn summary_without_fields_is_rejected() {
        assert!(matches!(
            FootfallResult::from_slice(br#"{"error":""}"#),
            Err(ControllerError::MissingField("footfall"))
        ));
        assert!(matches!(
            FootfallResult::from_slice(b"<html>"),
            Err(ControllerError::Decode { .. })
        ));
    }

    #[test]
    fn upload_receipt_requires_download_url() {
        let receipt = UploadReceipt::from_slice(
            br#"{"message":"ok","file_path":"a.mp4","footfall":12,"download_url":"/x.mp4"}"#,
        )
        .unwrap();
        assert_eq!(receipt.download_url, "/x.mp4");
        assert_eq!(receipt.footfall, Some(serde_json::json!(12)));

        assert!(matches!(
            UploadReceipt::from_slice(br#"{"message":"ok","download_url":""}"#),
            Err(ControllerError::MissingField("download_url"))
        ));
    }

    #[test]
    fn mime_type_follows_extension() {
        let file = |name: &str| SelectedFile {
            name: name.into(),
            bytes: Vec::new(),
        };
        assert_eq!(file("clip.MP4").mime_type(), "video/mp4");
        assert_eq!(file("clip.mkv").mime_type(), "video/x-matroska");
        assert_eq!(file("clip").mime_type(), "application/octet-stream");
    }
}
