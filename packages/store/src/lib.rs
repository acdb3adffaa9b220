pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;

mod http;
pub use http::HttpStore;

mod memory;
pub use memory::MemoryStore;

pub use client::{ListPage, RecordStore};
pub use config::StoreConfig;
pub use error::StoreError;
pub use filter::Filter;
pub use models::{DraftError, Guest, GuestDraft, GuestField, GuestFields};
