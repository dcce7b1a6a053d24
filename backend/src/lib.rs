//! Exercise tracker backend library.
//!
//! Hexagonal layout: `domain` holds entities, ports and the tracker service;
//! `inbound::http` adapts Actix requests onto the driving ports;
//! `outbound` implements the driven ports for PostgreSQL and in-process
//! storage.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
