use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, SessionStore};

use crate::redis_session_store::RedisSessionStore;

pub fn build_memory_session_layer(
    cookie_secure: bool,
    idle_minutes: i64,
) -> SessionManagerLayer<MemoryStore> {
    configure(MemoryStore::default(), cookie_secure, idle_minutes)
}

pub fn build_redis_session_layer(
    redis_client: redis::Client,
    cookie_secure: bool,
    idle_minutes: i64,
) -> SessionManagerLayer<RedisSessionStore> {
    configure(
        RedisSessionStore::new(redis_client, "hearth:session"),
        cookie_secure,
        idle_minutes,
    )
}

fn configure<Store: SessionStore + Clone>(
    store: Store,
    cookie_secure: bool,
    idle_minutes: i64,
) -> SessionManagerLayer<Store> {
    SessionManagerLayer::new(store)
        .with_secure(cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(idle_minutes)))
}
