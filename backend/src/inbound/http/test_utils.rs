//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, TimeZone, Utc};
use mockable::{Clock, MockClock};

use crate::domain::ExerciseTrackerService;
use crate::inbound::http::exercises::{add_exercise, exercise_log};
use crate::inbound::http::payload::query_config;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, list_users};
use crate::outbound::memory::InMemoryStore;

/// Instant returned as "now" by [`fixed_clock`]: Thu Feb 29 2024.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Clock pinned to [`fixed_now`].
pub fn fixed_clock() -> Arc<dyn Clock> {
    let mut clock = MockClock::new();
    clock.expect_utc().returning(fixed_now);
    Arc::new(clock)
}

/// Handler state over a fresh in-memory store.
pub fn in_memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::default());
    HttpState::from_service(Arc::new(ExerciseTrackerService::new(
        store.clone(),
        store,
        fixed_clock(),
    )))
}

/// App exposing the user and exercise routes over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(query_config())
        .service(create_user)
        .service(list_users)
        .service(add_exercise)
        .service(exercise_log)
}
