//! Mentoring availability and session booking

use crate::api::models::{
    Ack, DayOfWeek, Instructor, InstructorAvailability, MentoringSession, SessionStatus,
};
use crate::client::ApiClient;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvailabilityData {
    pub day_of_week: DayOfWeek,
    /// "HH:MM", backend-local
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionData {
    pub instructor_id: String,
    pub scheduled_at: DateTime<Utc>,
    /// Duration in minutes
    pub duration: u32,
    pub topic: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_notes: Option<String>,
}

#[derive(Clone)]
pub struct MentoringService {
    client: Arc<ApiClient>,
}

impl MentoringService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Instructors open for mentoring, public
    pub async fn instructors(&self) -> Result<Vec<Instructor>> {
        self.client.get("/mentoring/instructors").await
    }

    /// A given instructor's weekly availability, public
    pub async fn availability_for(&self, instructor_id: &str) -> Result<Vec<InstructorAvailability>> {
        self.client
            .get(&format!("/mentoring/instructors/{}/availability", instructor_id))
            .await
    }

    /// The caller's own availability (instructor)
    pub async fn my_availability(&self) -> Result<Vec<InstructorAvailability>> {
        self.client.get("/mentoring/availability").await
    }

    pub async fn set_availability(
        &self,
        data: &CreateAvailabilityData,
    ) -> Result<InstructorAvailability> {
        self.client.post("/mentoring/availability", data).await
    }

    pub async fn update_availability(
        &self,
        availability_id: &str,
        data: &UpdateAvailabilityData,
    ) -> Result<InstructorAvailability> {
        self.client
            .put(&format!("/mentoring/availability/{}", availability_id), data)
            .await
    }

    pub async fn delete_availability(&self, availability_id: &str) -> Result<Ack> {
        self.client
            .delete(&format!("/mentoring/availability/{}", availability_id))
            .await
    }

    /// Book a session with an instructor (student)
    pub async fn book(&self, data: &BookSessionData) -> Result<MentoringSession> {
        self.client.post("/mentoring/sessions", data).await
    }

    /// Sessions the caller participates in, either side
    pub async fn sessions(&self) -> Result<Vec<MentoringSession>> {
        self.client.get("/mentoring/sessions").await
    }

    pub async fn session(&self, session_id: &str) -> Result<MentoringSession> {
        self.client
            .get(&format!("/mentoring/sessions/{}", session_id))
            .await
    }

    pub async fn update_session(
        &self,
        session_id: &str,
        data: &UpdateSessionData,
    ) -> Result<MentoringSession> {
        self.client
            .put(&format!("/mentoring/sessions/{}", session_id), data)
            .await
    }

    pub async fn cancel(&self, session_id: &str) -> Result<Ack> {
        self.client
            .delete(&format!("/mentoring/sessions/{}", session_id))
            .await
    }
}
