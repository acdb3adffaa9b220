//! # Search filter expressions
//!
//! A [`Filter`] is a contains-any match of a single needle over a set of
//! collection fields. It is the only place user input meets the store's
//! filter syntax, so escaping lives here: embedded single quotes are doubled
//! when rendering, which is how the store's expression language takes a
//! literal quote. The same filter can also be evaluated locally against a
//! [`Guest`], so the in-memory backend agrees with what the rendered
//! expression would match remotely.

use crate::models::Guest;

/// A contains-any filter over named text fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    fields: Vec<String>,
    needle: String,
}

impl Filter {
    /// The fields the guest list search matches against.
    pub const SEARCH_FIELDS: [&'static str; 3] = ["first_name", "last_name", "email"];

    /// Build the guest search filter from raw input. Returns `None` for a
    /// blank query, which means "list unfiltered".
    pub fn search(query: &str) -> Option<Self> {
        Self::contains_any(&Self::SEARCH_FIELDS, query)
    }

    /// Match records where any of `fields` contains the trimmed `needle`.
    pub fn contains_any(fields: &[&str], needle: &str) -> Option<Self> {
        let trimmed = needle.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            needle: trimmed.to_string(),
        })
    }

    /// The trimmed needle this filter matches on.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Render the store's boolean filter expression, e.g.
    /// `first_name ~ 'ana' || last_name ~ 'ana' || email ~ 'ana'`.
    pub fn render(&self) -> String {
        let safe = escape_value(&self.needle);
        self.fields
            .iter()
            .map(|field| format!("{field} ~ '{safe}'"))
            .collect::<Vec<_>>()
            .join(" || ")
    }

    /// Evaluate the filter locally: case-insensitive substring match over the
    /// same fields the rendered expression names.
    pub fn matches(&self, guest: &Guest) -> bool {
        let needle = self.needle.to_lowercase();
        self.fields.iter().any(|field| {
            guest
                .text_field(field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
    }
}

/// Double embedded single quotes so a literal quote in user input cannot
/// terminate the quoted value and alter the expression structure.
fn escape_value(raw: &str) -> String {
    raw.replace('\'', "''")
}
