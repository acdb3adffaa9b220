//! # Domain model for the guest collection
//!
//! Defines the record shape exchanged with the remote store and the local
//! edit buffer the detail/create views work on. These types are
//! `Serialize + Deserialize` so they can cross the HTTP boundary directly.
//!
//! The store is loosely typed: text fields it has never been given come back
//! as empty strings, and optional fields may be missing entirely. Everything
//! is normalized at this boundary — [`Guest::normalized`] turns blank
//! optionals into `None` on ingress, and [`GuestDraft::to_fields`] does the
//! inverse before a write, so an absent optional is never sent as `""`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One record in the guest collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Opaque identifier assigned by the store. Never mutated.
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Calendar date as the store formats it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Creation timestamp assigned by the store. Display only.
    #[serde(default)]
    pub created: String,
}

impl Guest {
    /// Collapse blank optional fields to `None`. The store returns empty
    /// strings for text fields that were never set.
    pub fn normalized(mut self) -> Self {
        for slot in [
            &mut self.phone,
            &mut self.address,
            &mut self.date_of_birth,
        ] {
            if slot.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *slot = None;
            }
        }
        self
    }

    /// Look up a text field by its collection field name. Used by filter
    /// evaluation in the in-memory backend.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "first_name" => Some(&self.first_name),
            "last_name" => Some(&self.last_name),
            "email" => Some(&self.email),
            "phone" => self.phone.as_deref(),
            "address" => self.address.as_deref(),
            "date_of_birth" => self.date_of_birth.as_deref(),
            _ => None,
        }
    }
}

/// An editable field of a guest record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    DateOfBirth,
}

/// Client-side validation failure for a [`GuestDraft`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("First name is required")]
    MissingFirstName,
    #[error("Last name is required")]
    MissingLastName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Email does not look like an email address")]
    BadEmail,
}

/// Write payload for create/update. Optional fields that are `None` are left
/// off the wire entirely — the store distinguishes empty from unset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GuestFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

/// Field-level edit buffer for the detail and create forms.
///
/// Every field is a plain `String` so inputs always have a value to bind to;
/// optionals are flattened to empty strings when seeding from a fetched
/// record and restored to absent on the way out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GuestDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
}

impl GuestDraft {
    /// Seed an edit buffer from a successfully fetched record.
    pub fn from_guest(guest: &Guest) -> Self {
        Self {
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone().unwrap_or_default(),
            address: guest.address.clone().unwrap_or_default(),
            date_of_birth: guest.date_of_birth.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: GuestField, value: String) {
        match field {
            GuestField::FirstName => self.first_name = value,
            GuestField::LastName => self.last_name = value,
            GuestField::Email => self.email = value,
            GuestField::Phone => self.phone = value,
            GuestField::Address => self.address = value,
            GuestField::DateOfBirth => self.date_of_birth = value,
        }
    }

    /// Trim, validate required fields and email shape, and build the write
    /// payload. Blank optionals become absent. The buffer itself is left
    /// untouched so the user can keep editing after a validation failure.
    pub fn to_fields(&self) -> Result<GuestFields, DraftError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();

        if first_name.is_empty() {
            return Err(DraftError::MissingFirstName);
        }
        if last_name.is_empty() {
            return Err(DraftError::MissingLastName);
        }
        if email.is_empty() {
            return Err(DraftError::MissingEmail);
        }
        if !is_email_shaped(email) {
            return Err(DraftError::BadEmail);
        }

        Ok(GuestFields {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: optional(&self.phone),
            address: optional(&self.address),
            date_of_birth: optional(&self.date_of_birth),
        })
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Basic email shape: one `@`, non-empty local part, dotted domain with
/// non-empty labels, no whitespace. Deliberately not RFC 5322.
pub(crate) fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest() -> Guest {
        Guest {
            id: "rec000000000001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            email: "ana@x.com".to_string(),
            phone: Some("555-0100".to_string()),
            address: None,
            date_of_birth: None,
            created: "2026-01-01 10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn normalized_collapses_blank_optionals() {
        let raw = Guest {
            phone: Some(String::new()),
            address: Some("  ".to_string()),
            date_of_birth: Some("1990-04-01".to_string()),
            ..guest()
        };
        let g = raw.normalized();
        assert_eq!(g.phone, None);
        assert_eq!(g.address, None);
        assert_eq!(g.date_of_birth, Some("1990-04-01".to_string()));
    }

    #[test]
    fn deserializes_sparse_store_response() {
        let g: Guest = serde_json::from_str(
            r#"{"id":"abc","first_name":"Ana","collectionName":"guests"}"#,
        )
        .unwrap();
        assert_eq!(g.id, "abc");
        assert_eq!(g.first_name, "Ana");
        assert_eq!(g.last_name, "");
        assert_eq!(g.phone, None);
    }

    #[test]
    fn draft_seeds_from_guest_with_flattened_optionals() {
        let draft = GuestDraft::from_guest(&guest());
        assert_eq!(draft.phone, "555-0100");
        assert_eq!(draft.address, "");
        assert_eq!(draft.date_of_birth, "");
    }

    #[test]
    fn to_fields_requires_each_required_field() {
        let mut draft = GuestDraft::from_guest(&guest());
        draft.first_name = "  ".to_string();
        assert_eq!(draft.to_fields(), Err(DraftError::MissingFirstName));

        let mut draft = GuestDraft::from_guest(&guest());
        draft.last_name = String::new();
        assert_eq!(draft.to_fields(), Err(DraftError::MissingLastName));

        let mut draft = GuestDraft::from_guest(&guest());
        draft.email = String::new();
        assert_eq!(draft.to_fields(), Err(DraftError::MissingEmail));
    }

    #[test]
    fn to_fields_rejects_malformed_email() {
        for bad in ["ana", "ana@", "@x.com", "ana@x", "ana@x .com", "ana@x..com"] {
            let mut draft = GuestDraft::from_guest(&guest());
            draft.email = bad.to_string();
            assert_eq!(draft.to_fields(), Err(DraftError::BadEmail), "{bad}");
        }
    }

    #[test]
    fn to_fields_trims_and_drops_blank_optionals() {
        let draft = GuestDraft {
            first_name: " Ana ".to_string(),
            last_name: "Lee".to_string(),
            email: " ana@x.com ".to_string(),
            phone: "   ".to_string(),
            address: " 12 Main St ".to_string(),
            date_of_birth: String::new(),
        };
        let fields = draft.to_fields().unwrap();
        assert_eq!(fields.first_name, "Ana");
        assert_eq!(fields.email, "ana@x.com");
        assert_eq!(fields.phone, None);
        assert_eq!(fields.address, Some("12 Main St".to_string()));
        assert_eq!(fields.date_of_birth, None);
    }

    #[test]
    fn absent_optionals_stay_off_the_wire() {
        let fields = GuestFields {
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            email: "ana@x.com".to_string(),
            phone: None,
            address: None,
            date_of_birth: None,
        };
        let json = serde_json::to_string(&fields).unwrap();
        assert!(!json.contains("phone"));
        assert!(!json.contains("date_of_birth"));
    }

    #[test]
    fn edit_field_routes_to_the_right_slot() {
        let mut draft = GuestDraft::default();
        draft.set(GuestField::Email, "ana@x.com".to_string());
        draft.set(GuestField::DateOfBirth, "1990-04-01".to_string());
        assert_eq!(draft.email, "ana@x.com");
        assert_eq!(draft.date_of_birth, "1990-04-01");
    }
}
