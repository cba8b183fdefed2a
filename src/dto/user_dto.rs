use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupUserRequest {
    #[validate(length(min = 1, max = 30))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30))]
    pub last_name: String,
    #[validate(length(min = 1, max = 30))]
    pub user_name: String,
    #[validate(email, length(max = 50))]
    pub email_address: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(max = 30))]
    pub country: Option<String>,
    #[validate(length(max = 50))]
    pub about_me: Option<String>,
    #[validate(length(max = 30))]
    pub dob: Option<String>,
    #[validate(length(max = 30))]
    pub contact_number: Option<String>,
}

/// `{id, message}` body for signin and signout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetailsResponse {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email_address: String,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<String>,
    pub contact_number: Option<String>,
}

impl From<User> for UserDetailsResponse {
    fn from(value: User) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            user_name: value.username,
            email_address: value.email,
            country: value.country,
            about_me: value.about_me,
            dob: value.dob,
            contact_number: value.contact_number,
        }
    }
}
