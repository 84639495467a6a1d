//! Course catalog, enrollment and review operations

use crate::api::models::{
    AccessLink, Ack, Course, CourseLevel, CourseList, CourseStatus, EnrollResult, Review, Section,
};
use crate::client::ApiClient;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Catalog filters, all optional
#[derive(Debug, Clone, Default)]
pub struct CourseFilters {
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub instructor_id: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl CourseFilters {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(level) = self.level {
            // serialize through serde to get the wire spelling
            if let Ok(value) = serde_json::to_value(level) {
                if let Some(s) = value.as_str() {
                    query.push(("level", s.to_string()));
                }
            }
        }
        if let Some(min) = self.min_price {
            query.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            query.push(("maxPrice", max.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(instructor_id) = &self.instructor_id {
            query.push(("instructorId", instructor_id.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseData {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub level: CourseLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_you_will_learn: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_video_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_you_will_learn: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseReviewData {
    pub rating: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateAccessLinkData {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_uses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct CourseService {
    client: Arc<ApiClient>,
}

impl CourseService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List the catalog, optionally filtered and paginated
    pub async fn list(&self, filters: &CourseFilters) -> Result<CourseList> {
        self.client.get_query("/courses", &filters.to_query()).await
    }

    pub async fn get(&self, course_id: &str) -> Result<Course> {
        self.client.get(&format!("/courses/{}", course_id)).await
    }

    /// Section/lesson tree for a course
    pub async fn lessons(&self, course_id: &str) -> Result<Vec<Section>> {
        self.client
            .get(&format!("/courses/{}/lessons", course_id))
            .await
    }

    pub async fn create(&self, data: &CreateCourseData) -> Result<Course> {
        self.client.post("/courses", data).await
    }

    pub async fn update(&self, course_id: &str, data: &UpdateCourseData) -> Result<Course> {
        self.client
            .put(&format!("/courses/{}", course_id), data)
            .await
    }

    pub async fn delete(&self, course_id: &str) -> Result<Ack> {
        self.client.delete(&format!("/courses/{}", course_id)).await
    }

    pub async fn enroll(&self, course_id: &str) -> Result<EnrollResult> {
        self.client
            .post_empty(&format!("/courses/{}/enroll", course_id))
            .await
    }

    pub async fn reviews(&self, course_id: &str) -> Result<Vec<Review>> {
        self.client
            .get(&format!("/courses/{}/reviews", course_id))
            .await
    }

    /// Add or replace the caller's review of a course
    pub async fn add_review(&self, course_id: &str, data: &CourseReviewData) -> Result<Ack> {
        self.client
            .post(&format!("/courses/{}/review", course_id), data)
            .await
    }

    /// Courses the caller is enrolled in
    pub async fn enrolled(&self) -> Result<Vec<Course>> {
        self.client.get("/users/enrolled-courses").await
    }

    /// Issue an invite link for a course (instructor: own courses, admin: any)
    pub async fn generate_access_link(
        &self,
        course_id: &str,
        max_uses: Option<u32>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<AccessLink> {
        self.client
            .post(
                &format!("/courses/{}/access-links", course_id),
                &GenerateAccessLinkData {
                    max_uses,
                    expires_at,
                },
            )
            .await
    }

    pub async fn access_links(&self, course_id: &str) -> Result<Vec<AccessLink>> {
        self.client
            .get(&format!("/courses/{}/access-links", course_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_to_query() {
        let filters = CourseFilters {
            category: Some("robotics".to_string()),
            level: Some(CourseLevel::AllLevels),
            min_price: Some(10.0),
            page: Some(2),
            ..Default::default()
        };
        let query = filters.to_query();
        assert!(query.contains(&("category", "robotics".to_string())));
        assert!(query.contains(&("level", "ALL_LEVELS".to_string())));
        assert!(query.contains(&("minPrice", "10".to_string())));
        assert!(query.contains(&("page", "2".to_string())));
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn test_empty_filters_yield_no_query() {
        assert!(CourseFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_update_data_skips_absent_fields() {
        let data = UpdateCourseData {
            status: Some(CourseStatus::Published),
            ..Default::default()
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"status":"PUBLISHED"}"#);
    }
}
