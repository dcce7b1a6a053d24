//! Build the HTTP state from the configured store.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use exercise_tracker::domain::ExerciseTrackerService;
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::InMemoryStore;
use exercise_tracker::outbound::persistence::{DieselExerciseRepository, DieselUserRepository};

use super::ServerConfig;

/// Wire the tracker service over PostgreSQL when a pool is configured,
/// otherwise over a fresh in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "using persistent store");
            let service = ExerciseTrackerService::new(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselExerciseRepository::new(pool.clone())),
                Arc::new(DefaultClock),
            );
            HttpState::from_service(Arc::new(service))
        }
        None => {
            info!(store = "memory", "no database configured; data will not persist");
            let store = Arc::new(InMemoryStore::default());
            let service =
                ExerciseTrackerService::new(store.clone(), store, Arc::new(DefaultClock));
            HttpState::from_service(Arc::new(service))
        }
    }
}
