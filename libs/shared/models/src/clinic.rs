use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Minutes.
    pub duration: i32,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Service {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.duration < 0 {
            return Err(AppError::ValidationError(format!(
                "Service {} has negative duration {}",
                self.id, self.duration
            )));
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(AppError::ValidationError(format!(
                "Service {} has invalid price {}",
                self.id, self.price
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub years_of_experience: i32,
    #[serde(default)]
    pub service_ids: Vec<String>,
    pub rating: Option<f64>,
    pub total_reviews: Option<u32>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub accepting_new_patients: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Provider {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(AppError::ValidationError(format!(
                    "Provider {} has rating {} outside 0-5",
                    self.id, rating
                )));
            }
        }
        if self.years_of_experience < 0 {
            return Err(AppError::ValidationError(format!(
                "Provider {} has negative years of experience",
                self.id
            )));
        }
        Ok(())
    }

    pub fn offers(&self, service_id: &str) -> bool {
        self.service_ids.iter().any(|id| id == service_id)
    }
}

/// Weekly availability for one provider on one day (0 = Sunday).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSchedule {
    pub id: String,
    pub provider_id: String,
    pub day_of_week: u8,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default, with = "hhmm_opt")]
    pub break_start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm_opt")]
    pub break_end_time: Option<NaiveTime>,
    pub is_available: bool,
}

impl ProviderSchedule {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.day_of_week > 6 {
            return Err(AppError::ValidationError(format!(
                "dayOfWeek must be 0-6, got {}",
                self.day_of_week
            )));
        }
        if self.start_time >= self.end_time {
            return Err(AppError::ValidationError(
                "startTime must be before endTime".to_string(),
            ));
        }
        match (self.break_start_time, self.break_end_time) {
            (None, None) => Ok(()),
            (Some(start), Some(end)) => {
                if start < end && start >= self.start_time && end <= self.end_time {
                    Ok(())
                } else {
                    Err(AppError::ValidationError(
                        "Break window must lie inside the working window".to_string(),
                    ))
                }
            }
            _ => Err(AppError::ValidationError(
                "Break window needs both breakStartTime and breakEndTime".to_string(),
            )),
        }
    }

    /// Whether `time` falls inside working hours and outside the break.
    pub fn is_working_at(&self, time: NaiveTime) -> bool {
        if !self.is_available || time < self.start_time || time >= self.end_time {
            return false;
        }
        match (self.break_start_time, self.break_end_time) {
            (Some(start), Some(end)) => time < start || time >= end,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub user_name: String,
    pub user_phone: Option<String>,
    pub service_id: String,
    pub service_name: String,
    pub provider_id: String,
    pub provider_name: String,
    pub appointment_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    New,
    InProgress,
    Resolved,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::InProgress => "in-progress",
            InquiryStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Times are stored as "HH:mm" strings.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::hhmm::FORMAT;

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => NaiveTime::parse_from_str(&raw, FORMAT)
                .map(Some)
                .map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schedule(break_start: Option<&str>, break_end: Option<&str>) -> ProviderSchedule {
        serde_json::from_value(json!({
            "id": "sched-1",
            "providerId": "prov-1",
            "dayOfWeek": 1,
            "startTime": "09:00",
            "endTime": "17:00",
            "breakStartTime": break_start,
            "breakEndTime": break_end,
            "isAvailable": true
        }))
        .unwrap()
    }

    #[test]
    fn schedule_parses_hhmm_and_honours_break() {
        let s = schedule(Some("12:00"), Some("13:00"));
        assert!(s.validate().is_ok());
        assert!(s.is_working_at(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert!(!s.is_working_at(NaiveTime::from_hms_opt(12, 30, 0).unwrap()));
        assert!(s.is_working_at(NaiveTime::from_hms_opt(13, 0, 0).unwrap()));
        assert!(!s.is_working_at(NaiveTime::from_hms_opt(17, 0, 0).unwrap()));
    }

    #[test]
    fn schedule_rejects_half_break_and_bad_day() {
        assert!(schedule(Some("12:00"), None).validate().is_err());

        let mut s = schedule(None, None);
        s.day_of_week = 7;
        assert!(s.validate().is_err());
    }

    #[test]
    fn provider_rating_bounds() {
        let mut provider: Provider = serde_json::from_value(json!({
            "id": "p1",
            "name": "Dr. Ana Lopez",
            "rating": 4.5
        }))
        .unwrap();
        assert!(provider.validate().is_ok());

        provider.rating = Some(5.5);
        assert!(provider.validate().is_err());

        provider.rating = None;
        assert!(provider.validate().is_ok());
    }

    #[test]
    fn service_rejects_negative_price() {
        let service: Service = serde_json::from_value(json!({
            "id": "s1",
            "name": "Cleaning",
            "duration": 30,
            "price": -1.0
        }))
        .unwrap();
        assert!(service.validate().is_err());
    }

    #[test]
    fn inquiry_status_uses_kebab_case() {
        assert_eq!(serde_json::to_value(InquiryStatus::InProgress).unwrap(), json!("in-progress"));
        assert_eq!(AppointmentStatus::Cancelled.to_string(), "cancelled");
    }
}
