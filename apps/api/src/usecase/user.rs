//! Back-office users.
//!
//! Passwords are hashed with argon2 before they reach the repository and
//! are never returned.

use std::sync::Arc;

use tracing::{debug, info};

use laundry_core::validation::{validate_password, validate_username};
use laundry_core::{CoreError, NewUser, PageRequest, Paging, User};
use laundry_db::UserRepository;

use super::new_id;
use crate::auth::{hash_password, verify_password};
use crate::error::AppResult;

/// Role given to users registered without one.
pub const DEFAULT_ROLE: &str = "admin";

#[derive(Clone)]
pub struct UserUseCase {
    repo: Arc<dyn UserRepository>,
    default_rows: i64,
}

impl UserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, default_rows: i64) -> Self {
        UserUseCase { repo, default_rows }
    }

    pub async fn register_new_user(&self, payload: NewUser) -> AppResult<User> {
        let username = payload.username.trim().to_string();
        validate_username(&username)?;
        validate_password(&payload.password)?;

        if self.repo.get_by_username(&username).await?.is_some() {
            return Err(CoreError::conflict("user", "username", &username).into());
        }

        let role = payload
            .role
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        let user = User {
            id: new_id(),
            username,
            role,
        };
        let password_hash = hash_password(&payload.password)?;
        self.repo.create(&user, &password_hash).await?;

        info!(id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Checks a username/password pair.
    ///
    /// Unknown users and wrong passwords both yield
    /// [`CoreError::InvalidCredentials`].
    pub async fn find_by_username_password(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<User> {
        let credentials = self
            .repo
            .get_by_username(username.trim())
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash) {
            debug!(username = %credentials.username, "Password mismatch");
            return Err(CoreError::InvalidCredentials.into());
        }

        Ok(credentials.into_user())
    }

    pub async fn find_by_id_user(&self, id: &str) -> AppResult<User> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("user", id).into())
    }

    pub async fn find_all_user(&self, request: PageRequest) -> AppResult<(Vec<User>, Paging)> {
        let query = request.resolve(self.default_rows);
        Ok(self.repo.paging(query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::usecase::memory::MemoryStore;

    fn usecase() -> UserUseCase {
        UserUseCase::new(Arc::new(MemoryStore::new()), 10)
    }

    fn new_user(username: &str, password: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: password.to_string(),
            role: None,
        }
    }

    #[tokio::test]
    async fn test_register_defaults_role() {
        let uc = usecase();
        let user = uc.register_new_user(new_user("kasir", "secret1")).await.unwrap();

        assert_eq!(user.role, DEFAULT_ROLE);
        assert_eq!(uc.find_by_id_user(&user.id).await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let uc = usecase();
        uc.register_new_user(new_user("kasir", "secret1")).await.unwrap();

        let err = uc.register_new_user(new_user("kasir", "other12")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_weak_input_is_rejected() {
        let uc = usecase();
        assert!(matches!(
            uc.register_new_user(new_user("ab", "secret1")).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            uc.register_new_user(new_user("kasir", "123")).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_credentials_check() {
        let uc = usecase();
        let user = uc.register_new_user(new_user("kasir", "secret1")).await.unwrap();

        let found = uc.find_by_username_password("kasir", "secret1").await.unwrap();
        assert_eq!(found.id, user.id);

        for (username, password) in [("kasir", "wrong!!"), ("nobody", "secret1")] {
            let err = uc
                .find_by_username_password(username, password)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Unauthorized(_)));
        }
    }
}
