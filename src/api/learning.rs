//! Lesson progress and quiz operations for enrolled courses

use crate::api::models::{Ack, CompletionStatus, Course, QuizAttempt, Section, UserProgress};
use crate::client::ApiClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressData {
    pub lesson_id: String,
    pub completion_status: CompletionStatus,
    /// Seconds spent on the lesson since the last update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u32>,
}

/// Quiz answers keyed by question index
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizAnswers {
    pub answers: HashMap<String, u32>,
}

/// An enrolled course with the caller's progress attached
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithProgress {
    #[serde(flatten)]
    pub course: Course,
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub completed_lessons: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct LearningService {
    client: Arc<ApiClient>,
}

impl LearningService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Progress across all enrolled courses
    pub async fn progress(&self) -> Result<Vec<UserProgress>> {
        self.client.get("/learn/progress").await
    }

    pub async fn update_progress(&self, data: &UpdateProgressData) -> Result<Ack> {
        self.client.post("/learn/progress", data).await
    }

    pub async fn course_with_progress(&self, course_id: &str) -> Result<CourseWithProgress> {
        self.client
            .get(&format!("/learn/courses/{}", course_id))
            .await
    }

    pub async fn submit_quiz(&self, quiz_id: &str, answers: &QuizAnswers) -> Result<QuizAttempt> {
        self.client
            .post(&format!("/learn/quiz/{}/attempt", quiz_id), answers)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_update_wire_shape() {
        let data = UpdateProgressData {
            lesson_id: "l1".to_string(),
            completion_status: CompletionStatus::Completed,
            time_spent: None,
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"lessonId":"l1","completionStatus":"COMPLETED"}"#);
    }

    #[test]
    fn test_quiz_answers_wire_shape() {
        let mut answers = QuizAnswers::default();
        answers.answers.insert("0".to_string(), 2);
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["answers"]["0"], 2);
    }
}
