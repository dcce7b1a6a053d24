//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users.
    users (id) {
        id -> Uuid,
        /// Name exactly as submitted; never empty.
        username -> Varchar,
        /// Insertion order.
        seq -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Exercises logged against users.
    ///
    /// `user_id` has no foreign key; the service resolves the owner first.
    exercises (id) {
        id -> Uuid,
        user_id -> Uuid,
        description -> Text,
        duration_minutes -> Int4,
        /// Occurrence date supplied by the client or defaulted to "now".
        performed_at -> Timestamptz,
        /// Insertion order.
        seq -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, exercises);
