//! Session store adapters

pub mod memory_session_store;
pub mod redis_session_store;

pub use memory_session_store::MemorySessionStore;
pub use redis_session_store::RedisSessionStore;
