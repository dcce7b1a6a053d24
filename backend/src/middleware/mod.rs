//! Actix middleware shared by every route.

pub mod cors;
pub mod trace;

pub use cors::cors;
pub use trace::Trace;
