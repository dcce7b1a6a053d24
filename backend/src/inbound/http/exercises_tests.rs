//! Tests for exercise API handlers.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{in_memory_state, test_app};

async fn register<S>(app: &S, username: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": username }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(app, request).await;
    body.get("_id")
        .and_then(Value::as_str)
        .expect("user id")
        .to_owned()
}

async fn post_exercise<S>(app: &S, user_id: &str, payload: Value) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    (status, actix_test::read_body_json(response).await)
}

async fn get_log<S>(app: &S, user_id: &str, query: &str) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/users/{user_id}/logs{query}"))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    (status, actix_test::read_body_json(response).await)
}

#[rstest]
#[actix_web::test]
async fn add_exercise_without_date_uses_today() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = register(&app, "ada").await;

    let (status, body) =
        post_exercise(&app, &user_id, json!({"description": "run", "duration": 30})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "_id": user_id,
            "username": "ada",
            "date": "Thu Feb 29 2024",
            "duration": 30,
            "description": "run",
        })
    );
}

#[rstest]
#[actix_web::test]
async fn add_exercise_accepts_form_bodies_with_string_numbers() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = register(&app, "ada").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_form([
            ("description", "swim"),
            ("duration", "45"),
            ("date", "2023-01-15"),
        ])
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body.get("date"), Some(&json!("Sun Jan 15 2023")));
    assert_eq!(body.get("duration"), Some(&json!(45)));
}

#[rstest]
#[case::well_formed_but_unknown("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
#[case::malformed("not-an-id")]
#[actix_web::test]
async fn unknown_users_get_a_legacy_200(#[case] user_id: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let (status, body) =
        post_exercise(&app, user_id, json!({"description": "run", "duration": 30})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "User not found"}));

    let (status, body) = get_log(&app, user_id, "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[rstest]
#[case::missing_duration(json!({"description": "run"}), "duration", "missing_field")]
#[case::text_duration(json!({"description": "run", "duration": "thirty"}), "duration", "invalid_integer")]
#[case::fractional_duration(json!({"description": "run", "duration": 2.5}), "duration", "invalid_integer")]
#[case::bad_date(json!({"description": "run", "duration": 30, "date": "soon"}), "date", "invalid_date")]
#[actix_web::test]
async fn invalid_exercise_input_is_a_400(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = register(&app, "ada").await;

    let (status, body) = post_exercise(&app, &user_id, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    let details = body.get("details").expect("details present");
    assert_eq!(details.get("field"), Some(&json!(field)));
    assert_eq!(details.get("code"), Some(&json!(code)));
}

#[rstest]
#[actix_web::test]
async fn description_may_be_omitted() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = register(&app, "ada").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_form([("duration", "30")])
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("description"), Some(&json!("")));
    assert_eq!(body.get("duration"), Some(&json!(30)));

    let (_, log) = get_log(&app, &user_id, "").await;
    assert_eq!(log.pointer("/log/0/description"), Some(&json!("")));
}

#[rstest]
#[case::truncated_json(ContentType::json(), "{bad")]
#[case::json_string(ContentType::json(), r#""run""#)]
#[actix_web::test]
async fn unparseable_bodies_are_reported_as_such(
    #[case] content_type: ContentType,
    #[case] payload: &'static str,
) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = register(&app, "ada").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .insert_header(content_type)
        .set_payload(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.pointer("/details/field"), Some(&json!("body")));
    assert_eq!(body.pointer("/details/code"), Some(&json!("malformed_body")));
}

#[rstest]
#[actix_web::test]
async fn duplicated_query_parameters_are_a_json_400() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = register(&app, "ada").await;

    let (status, body) = get_log(&app, &user_id, "?limit=1&limit=2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    assert_eq!(body.pointer("/details/code"), Some(&json!("invalid_query")));
}

#[rstest]
#[actix_web::test]
async fn log_counts_filters_and_limits() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = register(&app, "ada").await;
    for (description, date) in [("a", "2024-01-01"), ("b", "2024-01-15"), ("c", "2024-02-01")] {
        let (status, _) = post_exercise(
            &app,
            &user_id,
            json!({"description": description, "duration": 10, "date": date}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, all) = get_log(&app, &user_id, "").await;
    assert_eq!(all.get("count"), Some(&json!(3)));
    assert_eq!(all.get("username"), Some(&json!("ada")));
    assert_eq!(
        all.pointer("/log/0"),
        Some(&json!({"description": "a", "duration": 10, "date": "Mon Jan 01 2024"}))
    );

    let (_, limited) = get_log(&app, &user_id, "?limit=1").await;
    assert_eq!(limited.get("count"), Some(&json!(1)));
    assert_eq!(limited.pointer("/log/0/description"), Some(&json!("a")));

    let (_, bounded) = get_log(&app, &user_id, "?from=2024-01-10&to=2024-01-31").await;
    assert_eq!(bounded.get("count"), Some(&json!(1)));
    assert_eq!(bounded.pointer("/log/0/description"), Some(&json!("b")));

    let (_, empty) = get_log(&app, &user_id, "?from=2025-01-01").await;
    assert_eq!(empty.get("count"), Some(&json!(0)));
    assert_eq!(empty.get("log"), Some(&json!([])));

    let (_, blank) = get_log(&app, &user_id, "?from=&to=&limit=").await;
    assert_eq!(blank.get("count"), Some(&json!(3)));
}

#[rstest]
#[case::zero_limit("?limit=0", "limit")]
#[case::word_limit("?limit=many", "limit")]
#[case::bad_from("?from=whenever", "from")]
#[case::bad_to("?to=2024-13-01", "to")]
#[actix_web::test]
async fn invalid_log_queries_are_a_400(#[case] query: &str, #[case] field: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = register(&app, "ada").await;

    let (status, body) = get_log(&app, &user_id, query).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.pointer("/details/field"), Some(&json!(field)));
}
