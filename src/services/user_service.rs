use std::sync::Arc;

use uuid::Uuid;

use crate::database::store::UserStore;
use crate::dto::user_dto::SignupUserRequest;
use crate::error::{Error, Result};
use crate::models::user::{Capability, NewUser, Role, User};
use crate::services::auth_service::AuthService;
use crate::utils::crypto::hash_password;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    auth: AuthService,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, auth: AuthService) -> Self {
        Self { users, auth }
    }

    /// Registers a non-admin user. Username and email must both be unused.
    pub async fn signup(&self, request: SignupUserRequest) -> Result<User> {
        if self
            .users
            .find_user_by_username(&request.user_name)
            .await?
            .is_some()
        {
            return Err(Error::username_taken());
        }
        if self
            .users
            .find_user_by_email(&request.email_address)
            .await?
            .is_some()
        {
            return Err(Error::email_taken());
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .users
            .create_user(NewUser {
                uuid: Uuid::new_v4().to_string(),
                first_name: request.first_name,
                last_name: request.last_name,
                username: request.user_name,
                email: request.email_address,
                password_hash,
                country: request.country,
                about_me: request.about_me,
                dob: request.dob,
                role: Role::NonAdmin,
                contact_number: request.contact_number,
            })
            .await?;

        tracing::info!(user_uuid = %user.uuid, "user registered");
        Ok(user)
    }

    pub async fn user_profile(&self, user_uuid: &str, authorization: &str) -> Result<User> {
        self.auth
            .validate(
                authorization,
                "User is signed out.Sign in first to get user details",
            )
            .await?;

        self.users
            .find_user_by_uuid(user_uuid)
            .await?
            .ok_or_else(|| Error::user_not_found("User with entered uuid does not exist"))
    }

    /// Admin-only removal of a user and everything they posted.
    pub async fn delete_user(&self, user_uuid: &str, authorization: &str) -> Result<String> {
        let (caller, _) = self
            .auth
            .validate(authorization, "User is signed out")
            .await?;

        if !caller.can(Capability::DeleteUser) {
            tracing::warn!(caller = %caller.uuid, target = %user_uuid, "non-admin tried to delete a user");
            return Err(Error::forbidden(
                "Unauthorized Access, Entered user is not an admin",
            ));
        }

        let target = self
            .users
            .find_user_by_uuid(user_uuid)
            .await?
            .ok_or_else(|| {
                Error::user_not_found("User with entered uuid to be deleted does not exist")
            })?;

        self.users.delete_user(target.id).await?;
        tracing::info!(admin = %caller.uuid, deleted = %target.uuid, "user deleted");
        Ok(target.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::MockUserStore;
    use crate::models::user::UserSession;
    use crate::utils::token::TokenIssuer;
    use chrono::{Duration, Utc};

    fn user(id: i64, role: Role) -> User {
        User {
            id,
            uuid: format!("user-{}", id),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            username: format!("grace{}", id),
            email: format!("grace{}@example.com", id),
            password_hash: "hash".into(),
            country: Some("US".into()),
            about_me: None,
            dob: None,
            role,
            contact_number: None,
        }
    }

    fn active_session(user_id: i64) -> UserSession {
        let now = Utc::now();
        UserSession {
            id: user_id,
            uuid: format!("session-{}", user_id),
            user_id,
            access_token: format!("token-{}", user_id),
            login_at: now,
            expires_at: now + Duration::hours(8),
            logout_at: None,
        }
    }

    /// Both the auth validator and the service read from the same mock.
    fn service(store: MockUserStore) -> UserService {
        let store: Arc<dyn UserStore> = Arc::new(store);
        let auth = AuthService::new(store.clone(), TokenIssuer::new("secret", 8));
        UserService::new(store, auth)
    }

    fn signup_request() -> SignupUserRequest {
        SignupUserRequest {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            user_name: "grace".into(),
            email_address: "grace@example.com".into(),
            password: "cobol-forever".into(),
            country: None,
            about_me: None,
            dob: None,
            contact_number: None,
        }
    }

    #[tokio::test]
    async fn signup_rejects_taken_username() {
        let mut store = MockUserStore::new();
        store
            .expect_find_user_by_username()
            .returning(|_| Ok(Some(user(1, Role::NonAdmin))));
        store.expect_create_user().never();

        let err = service(store).signup(signup_request()).await.unwrap_err();
        assert_eq!(err.code(), "SGR-001");
    }

    #[tokio::test]
    async fn signup_rejects_taken_email() {
        let mut store = MockUserStore::new();
        store.expect_find_user_by_username().returning(|_| Ok(None));
        store
            .expect_find_user_by_email()
            .returning(|_| Ok(Some(user(1, Role::NonAdmin))));
        store.expect_create_user().never();

        let err = service(store).signup(signup_request()).await.unwrap_err();
        assert_eq!(err.code(), "SGR-002");
    }

    #[tokio::test]
    async fn signup_hashes_password_and_assigns_nonadmin() {
        let mut store = MockUserStore::new();
        store.expect_find_user_by_username().returning(|_| Ok(None));
        store.expect_find_user_by_email().returning(|_| Ok(None));
        store.expect_create_user().times(1).returning(|new| {
            assert_ne!(new.password_hash, "cobol-forever");
            assert_eq!(new.role, Role::NonAdmin);
            Ok(User {
                id: 1,
                uuid: new.uuid,
                first_name: new.first_name,
                last_name: new.last_name,
                username: new.username,
                email: new.email,
                password_hash: new.password_hash,
                country: new.country,
                about_me: new.about_me,
                dob: new.dob,
                role: new.role,
                contact_number: new.contact_number,
            })
        });

        let created = service(store).signup(signup_request()).await.unwrap();
        assert_eq!(created.username, "grace");
        assert!(!created.uuid.is_empty());
    }

    #[tokio::test]
    async fn profile_of_unknown_user_is_usr_001() {
        let mut store = MockUserStore::new();
        store
            .expect_find_session_by_token()
            .returning(|_| Ok(Some(active_session(1))));
        store
            .expect_find_user_by_id()
            .returning(|id| Ok(Some(user(id, Role::NonAdmin))));
        store.expect_find_user_by_uuid().returning(|_| Ok(None));

        let err = service(store).user_profile("ghost", "token-1").await.unwrap_err();
        assert_eq!(err.code(), "USR-001");
    }

    #[tokio::test]
    async fn non_admin_cannot_delete_users() {
        let mut store = MockUserStore::new();
        store
            .expect_find_session_by_token()
            .returning(|_| Ok(Some(active_session(2))));
        store
            .expect_find_user_by_id()
            .returning(|id| Ok(Some(user(id, Role::NonAdmin))));
        store.expect_delete_user().never();

        let err = service(store).delete_user("user-1", "token-2").await.unwrap_err();
        assert_eq!(err.code(), "ATHR-003");
    }

    #[tokio::test]
    async fn admin_deletes_existing_user() {
        let mut store = MockUserStore::new();
        store
            .expect_find_session_by_token()
            .returning(|_| Ok(Some(active_session(9))));
        store
            .expect_find_user_by_id()
            .returning(|id| Ok(Some(user(id, Role::Admin))));
        store
            .expect_find_user_by_uuid()
            .returning(|_| Ok(Some(user(4, Role::NonAdmin))));
        store.expect_delete_user().times(1).returning(|_| Ok(()));

        let deleted = service(store).delete_user("user-4", "token-9").await.unwrap();
        assert_eq!(deleted, "user-4");
    }
}
