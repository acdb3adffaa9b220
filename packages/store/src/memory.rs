//! In-memory [`RecordStore`] for tests and native tooling.
//!
//! Behaves like the remote collection from the client's point of view:
//! assigns opaque ids and a created stamp, validates required fields and
//! email shape on writes, evaluates filters with [`Filter::matches`], and
//! reports `NotFound` for missing ids.

use std::sync::{Arc, Mutex};

use crate::client::{ListPage, RecordStore};
use crate::error::StoreError;
use crate::filter::Filter;
use crate::models::{self, Guest, GuestFields};

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<Guest>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(&self) -> u64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

impl RecordStore for MemoryStore {
    async fn list(
        &self,
        filter: Option<Filter>,
        page: u32,
        per_page: u32,
    ) -> Result<ListPage, StoreError> {
        let records = self.records.lock().unwrap();
        let matched: Vec<Guest> = records
            .iter()
            .filter(|guest| filter.as_ref().is_none_or(|f| f.matches(guest)))
            .cloned()
            .collect();
        let total_items = matched.len() as u64;
        let skip = (page.max(1) - 1) as usize * per_page as usize;
        let items = matched
            .into_iter()
            .skip(skip)
            .take(per_page as usize)
            .collect();
        Ok(ListPage {
            page: page.max(1),
            per_page,
            total_items,
            items,
        })
    }

    async fn get_one(&self, id: &str) -> Result<Guest, StoreError> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|guest| guest.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, fields: GuestFields) -> Result<Guest, StoreError> {
        validate(&fields)?;
        let seq = self.assign_id();
        let guest = Guest {
            id: format!("rec{seq:012}"),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            date_of_birth: fields.date_of_birth,
            // Monotonic stand-in for the server clock.
            created: format!("{seq:010}"),
        }
        .normalized();
        self.records.lock().unwrap().push(guest.clone());
        Ok(guest)
    }

    async fn update(&self, id: &str, fields: GuestFields) -> Result<Guest, StoreError> {
        validate(&fields)?;
        let mut records = self.records.lock().unwrap();
        let guest = records
            .iter_mut()
            .find(|guest| guest.id == id)
            .ok_or(StoreError::NotFound)?;
        guest.first_name = fields.first_name;
        guest.last_name = fields.last_name;
        guest.email = fields.email;
        guest.phone = fields.phone;
        guest.address = fields.address;
        guest.date_of_birth = fields.date_of_birth;
        let updated = guest.clone().normalized();
        *guest = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|guest| guest.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

fn validate(fields: &GuestFields) -> Result<(), StoreError> {
    for (name, value) in [
        ("first_name", &fields.first_name),
        ("last_name", &fields.last_name),
        ("email", &fields.email),
    ] {
        if value.trim().is_empty() {
            return Err(StoreError::Invalid(format!("{name} is required")));
        }
    }
    if !models::is_email_shaped(fields.email.trim()) {
        return Err(StoreError::Invalid("email is malformed".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str, email: &str) -> GuestFields {
        GuestFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: None,
            address: None,
            date_of_birth: None,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_required_fields() {
        let store = MemoryStore::new();
        let created = store
            .create(fields("Ana", "Lee", "ana@x.com"))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert!(!created.created.is_empty());

        let loaded = store.get_one(&created.id).await.unwrap();
        assert_eq!(loaded.first_name, "Ana");
        assert_eq!(loaded.last_name, "Lee");
        assert_eq!(loaded.email, "ana@x.com");
        assert_eq!(loaded.phone, None);
        assert_eq!(loaded.address, None);
        assert_eq!(loaded.date_of_birth, None);
    }

    #[tokio::test]
    async fn create_rejects_missing_and_malformed_fields() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.create(fields("", "Lee", "ana@x.com")).await,
            Err(StoreError::Invalid(_))
        ));
        assert!(matches!(
            store.create(fields("Ana", "Lee", "not-an-email")).await,
            Err(StoreError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn list_pages_and_counts() {
        let store = MemoryStore::new();
        for i in 0..3 {
            store
                .create(fields(&format!("G{i}"), "Lee", "g@x.com"))
                .await
                .unwrap();
        }
        let page = store.list(None, 1, 2).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_items, 3);
        let page = store.list(None, 2, 2).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn filtered_list_matches_quoted_names() {
        let store = MemoryStore::new();
        store
            .create(fields("Ana", "O'Brien", "ana@x.com"))
            .await
            .unwrap();
        store
            .create(fields("Bo", "Lee", "bo@x.com"))
            .await
            .unwrap();

        let page = store
            .list(Filter::search("O'Brien"), 1, 50)
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].last_name, "O'Brien");

        let page = store.list(Filter::search("x.com"), 1, 50).await.unwrap();
        assert_eq!(page.total_items, 2);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_identity() {
        let store = MemoryStore::new();
        let created = store
            .create(fields("Ana", "Lee", "ana@x.com"))
            .await
            .unwrap();

        let mut next = fields("Ana", "Lee", "ana@x.com");
        next.phone = Some("555-0100".to_string());
        let updated = store.update(&created.id, next).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created, created.created);
        assert_eq!(updated.phone, Some("555-0100".to_string()));
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let store = MemoryStore::new();
        assert_eq!(store.get_one("nope").await, Err(StoreError::NotFound));
        assert_eq!(
            store.update("nope", fields("A", "B", "a@x.com")).await,
            Err(StoreError::NotFound)
        );
        assert_eq!(store.delete("nope").await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = MemoryStore::new();
        let created = store
            .create(fields("Ana", "Lee", "ana@x.com"))
            .await
            .unwrap();
        store.delete(&created.id).await.unwrap();
        assert_eq!(store.get_one(&created.id).await, Err(StoreError::NotFound));
        assert_eq!(store.list(None, 1, 50).await.unwrap().total_items, 0);
    }
}
