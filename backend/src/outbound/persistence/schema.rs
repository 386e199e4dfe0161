//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` when a migration changes the table.

diesel::table! {
    /// Registered users.
    ///
    /// `name` carries the `users_name_key` UNIQUE constraint that the store
    /// relies on for conflict detection.
    users (id) {
        /// Primary key assigned from a `BIGSERIAL` sequence.
        id -> Int8,
        /// Unique, case-sensitive user name.
        #[max_length = 255]
        name -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last rename timestamp.
        updated_at -> Timestamptz,
    }
}
