//! # HttpStore — remote records API backend
//!
//! Talks to a PocketBase-style records endpoint
//! (`{base}/api/collections/{collection}/records`). Works on both wasm
//! (browser fetch) and native through reqwest.
//!
//! Read operations carry a generation counter per logical operation: issuing
//! a new list (or get) bumps the counter, and a response that comes back
//! after a newer request of the same kind was issued is classified
//! [`StoreError::Superseded`]. The I/O itself is never aborted — the stale
//! result is computed in full and discarded at classification, which is what
//! the controllers expect.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::client::{ListPage, RecordStore};
use crate::error::StoreError;
use crate::filter::Filter;
use crate::models::{Guest, GuestFields};

#[derive(Debug, Default)]
struct Generations {
    list: AtomicU64,
    fetch: AtomicU64,
}

/// HTTP client for one record collection.
#[derive(Clone, Debug)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
    collection: String,
    generations: Arc<Generations>,
}

impl HttpStore {
    pub fn new(endpoint: &str, collection: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: endpoint.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
            generations: Arc::new(Generations::default()),
        }
    }

    fn records_url(&self) -> String {
        format!("{}/api/collections/{}/records", self.base_url, self.collection)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.records_url(), id)
    }
}

impl RecordStore for HttpStore {
    async fn list(
        &self,
        filter: Option<Filter>,
        page: u32,
        per_page: u32,
    ) -> Result<ListPage, StoreError> {
        let generation = self.generations.list.fetch_add(1, Ordering::SeqCst) + 1;

        let mut request = self.client.get(self.records_url()).query(&[
            ("page", page.to_string()),
            ("perPage", per_page.to_string()),
        ]);
        if let Some(filter) = &filter {
            request = request.query(&[("filter", filter.render())]);
        }

        let response = check_status(request.send().await.map_err(transport)?).await?;
        let mut envelope: ListPage = response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;

        if self.generations.list.load(Ordering::SeqCst) != generation {
            return Err(StoreError::Superseded);
        }

        envelope.items = envelope.items.into_iter().map(Guest::normalized).collect();
        Ok(envelope)
    }

    async fn get_one(&self, id: &str) -> Result<Guest, StoreError> {
        let generation = self.generations.fetch.fetch_add(1, Ordering::SeqCst) + 1;

        let response = self
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(transport)?;
        let guest: Guest = check_status(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;

        if self.generations.fetch.load(Ordering::SeqCst) != generation {
            return Err(StoreError::Superseded);
        }

        Ok(guest.normalized())
    }

    async fn create(&self, fields: GuestFields) -> Result<Guest, StoreError> {
        let response = self
            .client
            .post(self.records_url())
            .json(&fields)
            .send()
            .await
            .map_err(transport)?;
        let guest: Guest = check_status(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        Ok(guest.normalized())
    }

    async fn update(&self, id: &str, fields: GuestFields) -> Result<Guest, StoreError> {
        let response = self
            .client
            .patch(self.record_url(id))
            .json(&fields)
            .send()
            .await
            .map_err(transport)?;
        let guest: Guest = check_status(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        Ok(guest.normalized())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(match status.as_u16() {
        404 => StoreError::NotFound,
        400 => StoreError::Invalid(body),
        _ => StoreError::Http(format!("{status}: {body}")),
    })
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Http(err.to_string())
}
