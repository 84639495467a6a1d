//! Account, profile and credential operations
//!
//! Login and register persist the received token into the token store;
//! logout and account deletion remove it. Everything else is stateless.

use crate::api::models::{AccountDeleted, Ack, AuthResponse, User};
use crate::client::ApiClient;
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordData {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Create an account and persist the returned token
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post("/auth/register", data).await?;
        self.client.tokens().set(&response.token)?;
        Ok(response)
    }

    /// Authenticate and persist the returned token
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post("/auth/login", credentials).await?;
        self.client.tokens().set(&response.token)?;
        Ok(response)
    }

    /// Invalidate the server session. The local token is removed whether or
    /// not the server call succeeds.
    pub async fn logout(&self) -> Result<()> {
        let result: Result<Ack> = self.client.post_empty("/auth/logout").await;
        self.client.tokens().remove()?;
        result.map(|_| ())
    }

    /// Fetch the current identity
    pub async fn profile(&self) -> Result<User> {
        self.client.get("/users/profile").await
    }

    pub async fn update_profile(&self, data: &UpdateProfileData) -> Result<User> {
        self.client.put("/users/profile", data).await
    }

    pub async fn update_password(&self, data: &UpdatePasswordData) -> Result<Ack> {
        self.client.put("/users/password", data).await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<Ack> {
        self.client
            .post("/auth/password-reset/request", &serde_json::json!({ "email": email }))
            .await
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<Ack> {
        self.client
            .post(
                "/auth/password-reset",
                &serde_json::json!({ "token": token, "password": password }),
            )
            .await
    }

    /// Delete the current account and drop the now-useless token
    pub async fn delete_account(&self) -> Result<AccountDeleted> {
        let response: AccountDeleted = self.client.delete("/users/me").await?;
        self.client.tokens().remove()?;
        Ok(response)
    }
}
