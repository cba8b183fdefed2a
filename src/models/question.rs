use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub uuid: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub user_id: i64,
}

impl Question {
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user_id == user.id
    }
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub uuid: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub user_id: i64,
}
