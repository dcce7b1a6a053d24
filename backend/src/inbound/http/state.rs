//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExerciseCommand, ExerciseLogQuery, UsersCommand, UsersQuery};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users_command: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExerciseCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_command: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExerciseCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users_command,
            users_query,
            exercises,
            exercise_log,
        } = ports;
        Self {
            users_command,
            users_query,
            exercises,
            exercise_log,
        }
    }

    /// Route every port to one service implementing all of them.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use exercise_tracker::domain::ExerciseTrackerService;
    /// use exercise_tracker::inbound::http::state::HttpState;
    /// use exercise_tracker::outbound::memory::InMemoryStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let service = ExerciseTrackerService::new(store.clone(), store, Arc::new(DefaultClock));
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _users = state.users_query.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersCommand + UsersQuery + ExerciseCommand + ExerciseLogQuery + 'static,
    {
        Self::new(HttpStatePorts {
            users_command: service.clone(),
            users_query: service.clone(),
            exercises: service.clone(),
            exercise_log: service,
        })
    }
}
