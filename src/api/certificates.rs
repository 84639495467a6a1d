//! Certificate issuance, lookup and verification

use crate::api::models::{Certificate, CertificateVerification};
use crate::client::ApiClient;
use crate::error::{Error, Result};
use std::sync::Arc;

#[derive(Clone)]
pub struct CertificateService {
    client: Arc<ApiClient>,
}

impl CertificateService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Issue a certificate for a completed course
    pub async fn issue(&self, course_id: &str) -> Result<Certificate> {
        self.client
            .post_empty(&format!("/certificates/issue/{}", course_id))
            .await
    }

    pub async fn list(&self) -> Result<Vec<Certificate>> {
        self.client.get("/certificates").await
    }

    pub async fn get(&self, certificate_id: &str) -> Result<Certificate> {
        self.client
            .get(&format!("/certificates/{}", certificate_id))
            .await
    }

    pub async fn by_course(&self, course_id: &str) -> Result<Certificate> {
        self.client
            .get(&format!("/certificates/course/{}", course_id))
            .await
    }

    /// Public verification by certificate code, no authentication needed
    pub async fn verify(&self, code: &str) -> Result<CertificateVerification> {
        self.client
            .get(&format!("/certificates/verify/{}", code))
            .await
    }

    /// Direct download URL carrying the bearer token as a query parameter.
    /// The backend contract requires the token in the URL for direct links;
    /// treat the result as a secret.
    pub fn download_url(&self, certificate_id: &str) -> Result<String> {
        self.direct_url(certificate_id, "download")
    }

    /// Direct preview URL, same contract as [`download_url`](Self::download_url)
    pub fn preview_url(&self, certificate_id: &str) -> Result<String> {
        self.direct_url(certificate_id, "preview")
    }

    fn direct_url(&self, certificate_id: &str, action: &str) -> Result<String> {
        let token = self.client.token().ok_or(Error::NotAuthenticated)?;
        Ok(format!(
            "{}/certificates/{}/{}?token={}",
            self.client.base_url(),
            certificate_id,
            action,
            token
        ))
    }
}
