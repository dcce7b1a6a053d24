//! Users API handlers.
//!
//! ```text
//! POST /api/users {"username":"ada"}
//! GET /api/users
//! ```

use actix_web::{HttpRequest, get, post, web};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{BodyExtract, CreateUserBody, read_body};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Response for `POST /api/users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedUserResponse {
    /// Name as submitted.
    #[schema(example = "ada")]
    pub username: String,
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

impl From<User> for CreatedUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
        }
    }
}

/// One entry of `GET /api/users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummary {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Registered name.
    #[schema(example = "ada")]
    pub username: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
        }
    }
}

/// Register a user.
///
/// Usernames are neither trimmed nor required to be unique. A missing or
/// empty name is a rejected write and yields 500; a JSON or form body that
/// cannot be parsed yields 400.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content = CreateUserBody, content_type = "application/json"),
    responses(
        (status = 200, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "Body could not be parsed", body = ErrorSchema),
        (status = 500, description = "User could not be created", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/api/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: BodyExtract<CreateUserBody>,
) -> ApiResult<web::Json<CreatedUserResponse>> {
    let CreateUserBody { username } = read_body(&req, body)?;
    let user = state.users_command.create_user(username).await?;
    info!(user_id = %user.id(), username = %user.username(), "user created");
    Ok(web::Json(user.into()))
}

/// List every registered user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users in registration order", body = [UserSummary]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/api/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserSummary>>> {
    let users = state.users_query.list_users().await?;
    info!(count = users.len(), "users listed");
    Ok(web::Json(users.into_iter().map(UserSummary::from).collect()))
}
