use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    NonAdmin,
}

/// Actions that bypass ownership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    DeleteAnyPost,
    DeleteUser,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::NonAdmin => "nonadmin",
        }
    }

    pub fn grants(self, capability: Capability) -> bool {
        match capability {
            Capability::DeleteAnyPost | Capability::DeleteUser => self == Role::Admin,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("admin") {
            Ok(Role::Admin)
        } else if value.eq_ignore_ascii_case("nonadmin") {
            Ok(Role::NonAdmin)
        } else {
            Err(UnknownRole(value))
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub contact_number: Option<String>,
}

impl User {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.grants(capability)
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<String>,
    pub role: Role,
    pub contact_number: Option<String>,
}

/// A login session keyed by its access token.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSession {
    pub id: i64,
    pub uuid: String,
    pub user_id: i64,
    #[serde(skip_serializing)]
    pub access_token: String,
    pub login_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub logout_at: Option<DateTime<Utc>>,
}

impl UserSession {
    /// True once the user signed out or the token lifetime elapsed.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.logout_at.is_some() || self.expires_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub uuid: String,
    pub user_id: i64,
    pub access_token: String,
    pub login_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
