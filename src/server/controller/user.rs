use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, InsertResultDto, UpdateResultDto},
        user::{AdminStatusDto, CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{EnsureUserOutcome, EnsureUserParam, SetRoleParam, ROLE_ADMIN, ROLE_USER},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a user record on first sign-in.
///
/// Create-if-absent: when the email is already registered the submitted
/// payload is echoed back unchanged rather than the stored record - the
/// contract the web client was built against.
///
/// # Returns
/// - `200 OK` - Insert acknowledgement, or the echoed payload for a repeat
///   sign-in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created or payload echoed", body = InsertResultDto),
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<Response, AppError> {
    let outcome = UserService::new(&state.db)
        .ensure_user(EnsureUserParam {
            email: payload.email.clone(),
            name: payload.name.clone(),
        })
        .await?;

    Ok(match outcome {
        EnsureUserOutcome::Inserted(user) => (
            StatusCode::OK,
            Json(InsertResultDto {
                acknowledged: true,
                inserted_id: user.id,
            }),
        )
            .into_response(),
        EnsureUserOutcome::AlreadyExists => (StatusCode::OK, Json(payload)).into_response(),
    })
}

/// List all users.
///
/// # Returns
/// - `200 OK` - All users
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Check whether an email belongs to an administrator.
///
/// Open lookup used by the client to decide which views to render; the actual
/// gate on admin routes never trusts it.
///
/// # Returns
/// - `200 OK` - Admin status (false for unknown emails or non-admin roles)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email to check")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatusDto),
    ),
)]
pub async fn check_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let is_admin = UserService::new(&state.db).is_admin(&email).await?;

    Ok((StatusCode::OK, Json(AdminStatusDto { is_admin })))
}

/// Promote a user to administrator.
///
/// # Access Control
/// - `Admin` - The *acting* user's role is checked, not the target's
///
/// # Returns
/// - `200 OK` - Update acknowledgement with the modified-row count
/// - `401 Unauthorized` - Missing credentials
/// - `403 Forbidden` - Invalid token or acting user is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/admin/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Id of the user to promote")
    ),
    responses(
        (status = 200, description = "Role updated", body = UpdateResultDto),
        (status = 401, description = "Missing credentials", body = ErrorDto),
        (status = 403, description = "Invalid token or not an admin", body = ErrorDto),
    ),
)]
pub async fn make_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    set_role(&state, id, ROLE_ADMIN).await
}

/// Demote an administrator back to a regular user.
///
/// # Access Control
/// - `Admin` - The *acting* user's role is checked, not the target's
///
/// # Returns
/// - `200 OK` - Update acknowledgement with the modified-row count
/// - `401 Unauthorized` - Missing credentials
/// - `403 Forbidden` - Invalid token or acting user is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Id of the user to demote")
    ),
    responses(
        (status = 200, description = "Role updated", body = UpdateResultDto),
        (status = 401, description = "Missing credentials", body = ErrorDto),
        (status = 403, description = "Invalid token or not an admin", body = ErrorDto),
    ),
)]
pub async fn make_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    set_role(&state, id, ROLE_USER).await
}

async fn set_role(
    state: &AppState,
    user_id: i32,
    role: &str,
) -> Result<(StatusCode, Json<UpdateResultDto>), AppError> {
    let modified_count = UserService::new(&state.db)
        .set_role(SetRoleParam {
            user_id,
            role: role.to_string(),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdateResultDto {
            acknowledged: true,
            modified_count,
        }),
    ))
}
