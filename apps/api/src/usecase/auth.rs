//! Login.

use std::sync::Arc;

use tracing::{info, warn};

use laundry_core::validation::validate_required;
use laundry_core::{LoginRequest, TokenResponse};

use super::UserUseCase;
use crate::auth::JwtManager;
use crate::error::{AppError, AppResult};

const INVALID_LOGIN: &str = "invalid username or password";

#[derive(Clone)]
pub struct AuthUseCase {
    user_uc: UserUseCase,
    jwt: Arc<JwtManager>,
}

impl AuthUseCase {
    pub fn new(user_uc: UserUseCase, jwt: Arc<JwtManager>) -> Self {
        AuthUseCase { user_uc, jwt }
    }

    /// Exchanges a username/password pair for a bearer token.
    ///
    /// Missing fields, unknown users and wrong passwords all answer 401 with
    /// the same message. Storage failures still surface as 500.
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        if validate_required("username", &request.username).is_err()
            || validate_required("password", &request.password).is_err()
        {
            return Err(AppError::Unauthorized(INVALID_LOGIN.to_string()));
        }

        let user = match self
            .user_uc
            .find_by_username_password(&request.username, &request.password)
            .await
        {
            Ok(user) => user,
            Err(AppError::Unauthorized(_)) => {
                warn!(username = %request.username, "Login rejected");
                return Err(AppError::Unauthorized(INVALID_LOGIN.to_string()));
            }
            Err(e) => return Err(e),
        };

        let access_token = self.jwt.generate_access_token(&user)?;
        info!(user_id = %user.id, "Login succeeded");

        Ok(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.access_lifetime_secs(),
        })
    }
}
