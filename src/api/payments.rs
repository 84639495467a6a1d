//! Payment checkout and capture lifecycle

use crate::api::models::{PaymentCapture, PaymentCheckout, PaymentVerification, SubscriptionCheckout};
use crate::client::ApiClient;
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum PlanType {
    Basic,
    Pro,
    Lifetime,
}

#[derive(Clone)]
pub struct PaymentService {
    client: Arc<ApiClient>,
}

impl PaymentService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Open a checkout session for a course purchase. The returned approval
    /// URL is where the buyer completes payment.
    pub async fn checkout(&self, course_id: &str) -> Result<PaymentCheckout> {
        self.client
            .post(
                "/payments/checkout",
                &serde_json::json!({ "courseId": course_id }),
            )
            .await
    }

    /// Capture an approved order; enrollment happens server-side on success
    pub async fn capture(&self, order_id: &str) -> Result<PaymentCapture> {
        self.client
            .post_empty(&format!("/payments/capture/{}", order_id))
            .await
    }

    pub async fn verify(&self, payment_id: &str) -> Result<PaymentVerification> {
        self.client
            .get(&format!("/payments/verify/{}", payment_id))
            .await
    }

    pub async fn subscriptions(&self) -> Result<Vec<serde_json::Value>> {
        self.client.get("/payments/subscriptions").await
    }

    pub async fn create_subscription(&self, plan: PlanType) -> Result<SubscriptionCheckout> {
        self.client
            .post(
                "/payments/subscriptions",
                &serde_json::json!({ "planType": plan }),
            )
            .await
    }
}
