use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, InsertResultDto},
        lawyer::{CreateLawyerDto, LawyerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::lawyer::CreateLawyerParam,
        service::lawyer::LawyerService,
        state::AppState,
    },
};

/// Tag for grouping lawyer endpoints in OpenAPI documentation
pub static LAWYER_TAG: &str = "lawyer";

/// List all lawyer profiles.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - All lawyer profiles
/// - `401 Unauthorized` - Missing credentials
/// - `403 Forbidden` - Invalid token or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/lawyers",
    tag = LAWYER_TAG,
    responses(
        (status = 200, description = "All lawyer profiles", body = Vec<LawyerDto>),
        (status = 401, description = "Missing credentials", body = ErrorDto),
        (status = 403, description = "Invalid token or not an admin", body = ErrorDto),
    ),
)]
pub async fn get_lawyers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let lawyers = LawyerService::new(&state.db).get_all().await?;

    let lawyers_dto: Vec<_> = lawyers.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(lawyers_dto)))
}

/// Create a lawyer profile.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Insert acknowledgement
/// - `401 Unauthorized` - Missing credentials
/// - `403 Forbidden` - Invalid token or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/lawyers",
    tag = LAWYER_TAG,
    request_body = CreateLawyerDto,
    responses(
        (status = 200, description = "Lawyer profile created", body = InsertResultDto),
        (status = 401, description = "Missing credentials", body = ErrorDto),
        (status = 403, description = "Invalid token or not an admin", body = ErrorDto),
    ),
)]
pub async fn create_lawyer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLawyerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let lawyer = LawyerService::new(&state.db)
        .create(CreateLawyerParam {
            name: payload.name,
            specialty: payload.specialty,
            email: payload.email,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(InsertResultDto {
            acknowledged: true,
            inserted_id: lawyer.id,
        }),
    ))
}

/// Delete a lawyer profile.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Delete acknowledgement (count 0 when the id does not exist)
/// - `401 Unauthorized` - Missing credentials
/// - `403 Forbidden` - Invalid token or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/lawyers/{id}",
    tag = LAWYER_TAG,
    params(
        ("id" = i32, Path, description = "Id of the lawyer profile to delete")
    ),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteResultDto),
        (status = 401, description = "Missing credentials", body = ErrorDto),
        (status = 403, description = "Invalid token or not an admin", body = ErrorDto),
    ),
)]
pub async fn delete_lawyer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted_count = LawyerService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResultDto {
            acknowledged: true,
            deleted_count,
        }),
    ))
}
