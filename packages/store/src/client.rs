//! # RecordStore — the collection client abstraction
//!
//! [`RecordStore`] is the async interface the view controllers consume:
//! list-with-filter, get-by-id, create, update, delete against one named
//! collection. Implementations live in sibling modules — [`crate::http`] for
//! the remote records API and [`crate::memory`] for tests. The trait uses
//! return-position `impl Future` so callers stay generic without boxing.

use serde::Deserialize;

use crate::error::StoreError;
use crate::filter::Filter;
use crate::models::{Guest, GuestFields};

/// One page of list results, as the store's list envelope reports it.
#[derive(Clone, Debug, Deserialize)]
pub struct ListPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default, rename = "perPage")]
    pub per_page: u32,
    #[serde(default, rename = "totalItems")]
    pub total_items: u64,
    pub items: Vec<Guest>,
}

/// Async client for the guest record collection.
pub trait RecordStore {
    /// Fetch one page of records, optionally filtered. May fail with
    /// [`StoreError::Superseded`] when a newer list request replaced this one.
    fn list(
        &self,
        filter: Option<Filter>,
        page: u32,
        per_page: u32,
    ) -> impl std::future::Future<Output = Result<ListPage, StoreError>>;

    fn get_one(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Guest, StoreError>>;

    fn create(
        &self,
        fields: GuestFields,
    ) -> impl std::future::Future<Output = Result<Guest, StoreError>>;

    fn update(
        &self,
        id: &str,
        fields: GuestFields,
    ) -> impl std::future::Future<Output = Result<Guest, StoreError>>;

    fn delete(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
