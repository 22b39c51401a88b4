//! Storage abstractions for the weather image services.
//!
//! Provides a key-value [`RecordStore`] interface with:
//! - Redis for durable record storage
//! - An in-memory map for tests and local development

pub mod memory_store;
pub mod pattern;
pub mod record_store;
pub mod redis_store;

pub use memory_store::MemoryRecordStore;
pub use pattern::glob_match;
pub use record_store::RecordStore;
pub use redis_store::RedisRecordStore;
