//! In-process adapters for development and tests.

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
