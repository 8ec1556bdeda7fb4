use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use super::{
    dto::{AuthData, LoginRequest, PublicUser, RegisterRequest},
    extractors::AuthUser,
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo,
    repo_types::{User, UserCredentials},
};
use crate::{error::ApiError, response::ApiResponse, state::AppState};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    let email = payload.email.as_deref().map(str::trim).unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");
    let name = payload.name.as_deref().map(str::trim).unwrap_or("");

    // Cheap validations first, uniqueness last.
    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err(ApiError::Validation(
            "email, password and name are required".into(),
        ));
    }
    if password.len() < 6 {
        return Err(ApiError::Validation(
            "password must be at least 6 characters".into(),
        ));
    }
    if !is_valid_email(email) {
        return Err(ApiError::Validation("invalid email".into()));
    }

    if UserCredentials::find_by_email(&state.db, email).await?.is_some() {
        warn!(email, "email already registered");
        return Err(ApiError::Conflict("email already in use".into()));
    }

    let hash = hash_password(password)?;

    // Two concurrent registrations can pass the lookup above; the unique
    // constraint settles the race.
    let user = match User::create(&state.db, email, &hash, name).await {
        Ok(u) => u,
        Err(e) if repo::is_unique_violation(&e) => {
            warn!(email, "email already registered (constraint)");
            return Err(ApiError::Conflict("email already in use".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    info!(user_id = user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "user registered successfully",
            AuthData {
                user: PublicUser {
                    id: user.id,
                    email: user.email,
                    name: user.name,
                },
                token,
            },
        )),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, ApiError> {
    let email = payload.email.as_deref().map(str::trim).unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation("email and password are required".into()));
    }

    // Unknown email and bad password collapse into one answer.
    let user = match UserCredentials::find_by_email(&state.db, email).await? {
        Some(u) => u,
        None => {
            warn!(email, "login with unknown email");
            return Err(ApiError::Unauthorized("invalid credentials".into()));
        }
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(user_id = user.id, "login with invalid password");
        return Err(ApiError::Unauthorized("invalid credentials".into()));
    }

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(ApiResponse::success_with_message(
        "login successful",
        AuthData {
            user: PublicUser {
                id: user.id,
                email: user.email,
                name: user.name,
            },
            token,
        },
    )))
}

#[instrument(skip(state, _user))]
pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = User::find_all(&state.db).await?;
    Ok(Json(ApiResponse::success(users)))
}

#[instrument(skip(state, _user))]
pub async fn get_user(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".into()))?;
    Ok(Json(ApiResponse::success(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }
}
