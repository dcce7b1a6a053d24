//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request, response and error schemas. The document backs Swagger
//! UI in debug builds and is exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::exercises::{
    ExerciseLogResponse, ExerciseResponse, LogEntryResponse, UserNotFoundBody,
};
use crate::inbound::http::payload::{AddExerciseBody, CreateUserBody, NumericField};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreatedUserResponse, UserSummary};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Register users, record exercises and read filtered exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::exercises::exercise_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserBody,
        CreatedUserResponse,
        UserSummary,
        AddExerciseBody,
        NumericField,
        ExerciseResponse,
        LogEntryResponse,
        ExerciseLogResponse,
        UserNotFoundBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Register and list users"),
        (name = "exercises", description = "Record exercises and read logs"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "pages", description = "Static pages")
    )
)]
pub struct ApiDoc;
