//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly; regenerate them with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. `email` carries a unique index.
    users (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        /// PHC-encoded Argon2 hash; never the plaintext.
        password_hash -> Text,
        age -> Int4,
        city -> Text,
        contact -> Text,
        created_at -> Timestamptz,
    }
}
