//! Typed service modules, one per backend resource
//!
//! Each service is thin composition over the shared [`ApiClient`]: named
//! async operations mapping 1:1 to backend endpoints. The auth service is
//! the only one with a side effect (token persistence).

pub mod access_links;
pub mod auth;
pub mod certificates;
pub mod contact;
pub mod courses;
pub mod learning;
pub mod learning_paths;
pub mod mentoring;
pub mod models;
pub mod payments;
pub mod products;

pub use access_links::AccessLinkService;
pub use auth::AuthService;
pub use certificates::CertificateService;
pub use contact::ContactService;
pub use courses::CourseService;
pub use learning::LearningService;
pub use learning_paths::LearningPathService;
pub use mentoring::MentoringService;
pub use payments::PaymentService;
pub use products::ProductService;

use crate::client::ApiClient;
use std::sync::Arc;

/// All resource services over one shared client
#[derive(Clone)]
pub struct Api {
    client: Arc<ApiClient>,
}

impl Api {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }

    pub fn courses(&self) -> CourseService {
        CourseService::new(self.client.clone())
    }

    pub fn learning(&self) -> LearningService {
        LearningService::new(self.client.clone())
    }

    pub fn payments(&self) -> PaymentService {
        PaymentService::new(self.client.clone())
    }

    pub fn certificates(&self) -> CertificateService {
        CertificateService::new(self.client.clone())
    }

    pub fn learning_paths(&self) -> LearningPathService {
        LearningPathService::new(self.client.clone())
    }

    pub fn products(&self) -> ProductService {
        ProductService::new(self.client.clone())
    }

    pub fn contact(&self) -> ContactService {
        ContactService::new(self.client.clone())
    }

    pub fn mentoring(&self) -> MentoringService {
        MentoringService::new(self.client.clone())
    }

    pub fn access_links(&self) -> AccessLinkService {
        AccessLinkService::new(self.client.clone())
    }
}
