//! Contact inquiry intake and triage

use crate::api::models::{Ack, ContactInquiry, ContactInquiryStats, InquiryStatus, InquirySubmitted};
use crate::client::ApiClient;
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct SubmitContactData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone)]
pub struct ContactService {
    client: Arc<ApiClient>,
}

impl ContactService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Submit an inquiry; works unauthenticated
    pub async fn submit(&self, data: &SubmitContactData) -> Result<InquirySubmitted> {
        self.client.post("/contact", data).await
    }

    /// List inquiries, optionally filtered by status (admin)
    pub async fn list(&self, status: Option<InquiryStatus>) -> Result<Vec<ContactInquiry>> {
        match status {
            Some(status) => {
                self.client
                    .get_query("/contact", &[("status", status.to_string())])
                    .await
            }
            None => self.client.get("/contact").await,
        }
    }

    pub async fn stats(&self) -> Result<ContactInquiryStats> {
        self.client.get("/contact/stats").await
    }

    pub async fn get(&self, inquiry_id: &str) -> Result<ContactInquiry> {
        self.client.get(&format!("/contact/{}", inquiry_id)).await
    }

    pub async fn update_status(
        &self,
        inquiry_id: &str,
        status: InquiryStatus,
    ) -> Result<ContactInquiry> {
        self.client
            .put(
                &format!("/contact/{}", inquiry_id),
                &serde_json::json!({ "status": status }),
            )
            .await
    }

    pub async fn delete(&self, inquiry_id: &str) -> Result<Ack> {
        self.client.delete(&format!("/contact/{}", inquiry_id)).await
    }
}
