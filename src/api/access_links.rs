//! Invite-link redemption and revocation
//!
//! An access link is a backend-issued limited-use token granting course
//! enrollment without payment.

use crate::api::models::{AccessLinkInfo, Ack, RedeemResult};
use crate::client::ApiClient;
use crate::error::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct AccessLinkService {
    client: Arc<ApiClient>,
}

impl AccessLinkService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// What a link grants and whether it is still valid, public
    pub async fn info(&self, token: &str) -> Result<AccessLinkInfo> {
        self.client.get(&format!("/access-links/{}", token)).await
    }

    /// Redeem a link and enroll the caller (authenticated)
    pub async fn redeem(&self, token: &str) -> Result<RedeemResult> {
        self.client
            .post_empty(&format!("/access-links/redeem/{}", token))
            .await
    }

    /// Revoke a link (instructor: own courses, admin: any)
    pub async fn revoke(&self, link_id: &str) -> Result<Ack> {
        self.client.delete(&format!("/access-links/{}", link_id)).await
    }
}
