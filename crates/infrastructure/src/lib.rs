//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod in_memory_account_repository;
mod in_memory_preference_store;
mod redis_preference_store;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use in_memory_account_repository::InMemoryAccountRepository;
pub use in_memory_preference_store::InMemoryPreferenceStore;
pub use redis_preference_store::RedisPreferenceStore;
