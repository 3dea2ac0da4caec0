pub mod db;
pub mod models;
pub mod repos;
pub mod store;

pub use sqlx;

pub use store::{EntityStore, MemoryStore, PgStore, SharedStore, StoreError};
