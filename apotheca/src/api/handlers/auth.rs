use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    api::models::{
        auth::{CurrentUser, LoginRequest, RefreshRequest, RegisterRequest, TokenResponse},
        clients::ClientResponse,
    },
    auth::{password, permissions::CLIENT_ROLE, token},
    db::{
        handlers::{Clients, Employees, Repository},
        models::clients::ClientCreateDBRequest,
    },
    errors::Error,
};

/// Resolve an email against the client table first, then the employee table.
///
/// Returns the token identity and the stored password hash. Clients carry
/// the fixed "client" role; employees carry their role name.
async fn resolve_identity(state: &AppState, email: &str) -> Result<Option<(CurrentUser, String)>, Error> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let mut clients = Clients::new(&mut conn);
    if let Some(client) = clients.get_by_email(email).await? {
        let user = CurrentUser {
            id: client.id,
            email: client.email,
            role: CLIENT_ROLE.to_string(),
        };
        return Ok(Some((user, client.password_hash)));
    }

    let mut employees = Employees::new(&mut conn);
    if let Some(employee) = employees.get_by_email(email).await? {
        let user = CurrentUser {
            id: employee.id,
            email: employee.email,
            role: employee.role.name,
        };
        return Ok(Some((user, employee.password_hash)));
    }

    Ok(None)
}

/// Exchange email/password credentials for a token pair
#[utoipa::path(
    post,
    path = "/users/token",
    tag = "authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Result<Json<TokenResponse>, Error> {
    if !state.config.auth.native.enabled {
        return Err(Error::BadRequest {
            message: "Native authentication is disabled".to_string(),
        });
    }

    let (user, password_hash) = resolve_identity(&state, &request.email)
        .await?
        .ok_or_else(|| Error::Unauthenticated {
            message: Some("Incorrect email or password".to_string()),
        })?;

    // Verify password on a blocking thread to avoid blocking the async runtime
    let password = request.password.clone();
    let is_valid = tokio::task::spawn_blocking(move || password::verify_string(&password, &password_hash))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password verification task: {e}"),
        })??;

    if !is_valid {
        return Err(Error::Unauthenticated {
            message: Some("Incorrect email or password".to_string()),
        });
    }

    let pair = token::issue_token_pair(&user, &state.config)?;

    Ok(Json(TokenResponse::from(pair)))
}

/// Rotate an access token from a refresh token
#[utoipa::path(
    post,
    path = "/users/refresh",
    tag = "authentication",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "Access token rotated", body = TokenResponse),
        (status = 401, description = "Invalid or expired refresh token"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn refresh(State(state): State<AppState>, Json(request): Json<RefreshRequest>) -> Result<Json<TokenResponse>, Error> {
    let claims_user = token::verify_token(&request.refresh_token, &state.config)?;

    // Re-resolve the subject so the new access token carries the current role
    let (user, _) = resolve_identity(&state, &claims_user.email)
        .await?
        .ok_or_else(|| Error::Unauthenticated {
            message: Some("User not found".to_string()),
        })?;

    let access_token = token::create_access_token(&user, &state.config)?;

    Ok(Json(TokenResponse {
        access_token,
        refresh_token: request.refresh_token,
        token_type: "bearer".to_string(),
    }))
}

/// Register a new client account
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Client registered successfully", body = ClientResponse),
        (status = 400, description = "Invalid input or duplicate email"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), Error> {
    if !state.config.auth.native.enabled {
        return Err(Error::BadRequest {
            message: "Native authentication is disabled".to_string(),
        });
    }

    if !state.config.auth.native.allow_registration {
        return Err(Error::BadRequest {
            message: "Client registration is disabled".to_string(),
        });
    }

    // Validate password length
    let password_config = &state.config.auth.native.password;
    if request.password.len() < password_config.min_length {
        return Err(Error::BadRequest {
            message: format!("Password must be at least {} characters", password_config.min_length),
        });
    }
    if request.password.len() > password_config.max_length {
        return Err(Error::BadRequest {
            message: format!("Password must be no more than {} characters", password_config.max_length),
        });
    }

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;

    // Check if a client with this email already exists
    let mut clients = Clients::new(&mut tx);
    if clients.get_by_email(&request.email).await?.is_some() {
        return Err(Error::BadRequest {
            message: "An account with this email address already exists".to_string(),
        });
    }

    // Hash the password on a blocking thread to avoid blocking the async runtime
    let password = request.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || password::hash_string(&password))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password hashing task: {e}"),
        })??;

    let create_request = ClientCreateDBRequest {
        first_name: request.first_name,
        last_name: request.last_name,
        date_of_birth: request.date_of_birth,
        phone: request.phone,
        email: request.email,
        password_hash,
    };

    let created_client = clients.create(&create_request).await?;

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok((StatusCode::CREATED, Json(ClientResponse::from(created_client))))
}
