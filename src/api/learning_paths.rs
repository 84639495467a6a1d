//! Curated course sequences (admin-managed)

use crate::api::models::{Ack, CourseLevel, LearningPath};
use crate::client::ApiClient;
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLearningPathData {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<CourseLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLearningPathData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<CourseLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOrder {
    pub course_id: String,
    pub order_index: i32,
}

#[derive(Clone)]
pub struct LearningPathService {
    client: Arc<ApiClient>,
}

impl LearningPathService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<LearningPath>> {
        self.client.get("/learning-paths").await
    }

    pub async fn get(&self, path_id: &str) -> Result<LearningPath> {
        self.client.get(&format!("/learning-paths/{}", path_id)).await
    }

    pub async fn create(&self, data: &CreateLearningPathData) -> Result<LearningPath> {
        self.client.post("/learning-paths", data).await
    }

    pub async fn update(&self, path_id: &str, data: &UpdateLearningPathData) -> Result<LearningPath> {
        self.client
            .put(&format!("/learning-paths/{}", path_id), data)
            .await
    }

    pub async fn delete(&self, path_id: &str) -> Result<Ack> {
        self.client
            .delete(&format!("/learning-paths/{}", path_id))
            .await
    }

    pub async fn add_course(
        &self,
        path_id: &str,
        course_id: &str,
        order_index: Option<i32>,
    ) -> Result<Ack> {
        let mut body = serde_json::json!({ "courseId": course_id });
        if let Some(order_index) = order_index {
            body["orderIndex"] = order_index.into();
        }
        self.client
            .post(&format!("/learning-paths/{}/courses", path_id), &body)
            .await
    }

    pub async fn remove_course(&self, path_id: &str, course_id: &str) -> Result<Ack> {
        self.client
            .delete(&format!("/learning-paths/{}/courses/{}", path_id, course_id))
            .await
    }

    pub async fn reorder_courses(&self, path_id: &str, orders: &[CourseOrder]) -> Result<Ack> {
        self.client
            .put(
                &format!("/learning-paths/{}/courses/reorder", path_id),
                &serde_json::json!({ "courseOrders": orders }),
            )
            .await
    }
}
