use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::database::store::UserStore;
use crate::error::{Error, Result};
use crate::models::user::{NewSession, User, UserSession};
use crate::utils::credentials::{basic_credentials, bearer_token};
use crate::utils::crypto::verify_password;
use crate::utils::token::TokenIssuer;

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Resolves the session behind `authorization` and its user.
    ///
    /// Unknown tokens fail with ATHR-001. Sessions that were signed out (or
    /// outlived their expiry) fail with ATHR-002 carrying `signed_out_message`.
    pub async fn validate(
        &self,
        authorization: &str,
        signed_out_message: &str,
    ) -> Result<(User, UserSession)> {
        let token = bearer_token(authorization);
        if token.is_empty() {
            return Err(Error::not_signed_in());
        }

        let session = self
            .users
            .find_session_by_token(token)
            .await?
            .ok_or_else(Error::not_signed_in)?;

        if session.has_ended(Utc::now()) {
            return Err(Error::signed_out(signed_out_message));
        }

        // A session row outliving its user is treated like an unknown token.
        let user = self
            .users
            .find_user_by_id(session.user_id)
            .await?
            .ok_or_else(Error::not_signed_in)?;

        Ok((user, session))
    }

    /// Verifies Basic credentials and opens a new session.
    pub async fn signin(&self, authorization: &str) -> Result<(User, UserSession)> {
        let (username, password) = basic_credentials(authorization)?;

        let user = self
            .users
            .find_user_by_username(&username)
            .await?
            .ok_or_else(|| Error::AuthenticationFailed {
                code: "ATH-001",
                message: "This username does not exist".to_string(),
            })?;

        if !verify_password(&password, &user.password_hash) {
            tracing::warn!(user_uuid = %user.uuid, "signin rejected: wrong password");
            return Err(Error::AuthenticationFailed {
                code: "ATH-002",
                message: "Password failed".to_string(),
            });
        }

        let issued = self.tokens.issue(&user.uuid, Utc::now())?;
        let session = self
            .users
            .create_session(NewSession {
                uuid: Uuid::new_v4().to_string(),
                user_id: user.id,
                access_token: issued.token,
                login_at: issued.issued_at,
                expires_at: issued.expires_at,
            })
            .await?;

        tracing::info!(user_uuid = %user.uuid, session_uuid = %session.uuid, "user signed in");
        Ok((user, session))
    }

    pub async fn signout(&self, authorization: &str) -> Result<User> {
        let not_signed_in = || Error::SignOutRestricted {
            code: "SGR-001",
            message: "User is not Signed in".to_string(),
        };

        let session = self
            .users
            .find_session_by_token(bearer_token(authorization))
            .await?
            .ok_or_else(not_signed_in)?;

        let user = self
            .users
            .find_user_by_id(session.user_id)
            .await?
            .ok_or_else(not_signed_in)?;

        if session.logout_at.is_none() {
            self.users.end_session(session.id, Utc::now()).await?;
        }

        tracing::info!(user_uuid = %user.uuid, "user signed out");
        Ok(user)
    }
}
