//! Login, logout and password reset.

use clinic_dash_core::models::AuthenticatedUser;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiClient, ApiResult};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub user: Option<AuthenticatedUser>,
}

#[derive(Debug, Serialize)]
struct ResetRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetConfirmation<'a> {
    token: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    /// Sign in and start a session.
    ///
    /// The returned token is persisted and attached to every later request.
    /// The user summary is `None` when the backend omits it.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Option<AuthenticatedUser>> {
        let response: LoginResponse = self
            .post("/api/auth/login", &LoginRequest { email, password })
            .await?;

        if let Some(user) = &response.user {
            tracing::info!(user_id = %user.id, role = %user.role, "Logged in");
        }
        let user = response.user.clone();
        self.session().begin(response.token, response.user).await?;
        Ok(user)
    }

    /// End the session and delete the persisted token.
    pub async fn logout(&self) -> ApiResult<()> {
        self.session().end().await?;
        Ok(())
    }

    /// Ask the backend to e-mail a password reset token.
    pub async fn request_password_reset(&self, email: &str) -> ApiResult<()> {
        let _: Value = self
            .post("/api/auth/reset-password", &ResetRequest { email })
            .await?;
        Ok(())
    }

    /// Set a new password using a reset token.
    pub async fn confirm_password_reset(&self, token: &str, new_password: &str) -> ApiResult<()> {
        let _: Value = self
            .put(
                "/api/auth/reset-password",
                &ResetConfirmation {
                    token,
                    new_password,
                },
            )
            .await?;
        Ok(())
    }
}
