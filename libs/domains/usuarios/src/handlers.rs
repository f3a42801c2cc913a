use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, Role, RoleAssignment, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Mount point of every route in this module
pub const URL: &str = "/usuarios";
pub const TAG: &str = "usuarios";

#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, delete_user, hola),
    components(
        schemas(User, Role, CreateUser),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User account endpoints")
    )
)]
pub struct ApiDoc;

/// Routes carry the full `/usuarios` prefix so `POST /usuarios/` keeps its
/// trailing slash when merged at the root.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(&format!("{URL}/"), post(create_user::<R>))
        .route(&format!("{URL}/hola/"), get(hola))
        .route(
            &format!("{URL}/{{username}}"),
            get(get_user::<R>).delete(delete_user::<R>),
        )
        .with_state(shared_service)
}

/// Create a user with the NORMAL role
#[utoipa::path(
    post,
    path = "/usuarios/",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service
        .create_user(input, vec![RoleAssignment::normal()])
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by username; `null` when absent
#[utoipa::path(
    get,
    path = "/usuarios/{username}",
    tag = TAG,
    params(
        ("username" = String, Path, description = "Exact username")
    ),
    responses(
        (status = 200, description = "The user, or null", body = Option<User>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(username): Path<String>,
) -> UserResult<Json<Option<User>>> {
    let user = service.get_user(&username).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/usuarios/{username}",
    tag = TAG,
    params(
        ("username" = String, Path, description = "Exact username")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(username): Path<String>,
) -> UserResult<StatusCode> {
    service.delete_user(&username).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/usuarios/hola/",
    tag = TAG,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
async fn hola() -> &'static str {
    "hola"
}
