//! PostgreSQL persistence adapters using Diesel.
//!
//! The user store lives in a single `users` table whose schema is managed by
//! the embedded migrations in `backend/migrations/`.

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::run_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
