//! Controller for the searchable guest list.

use std::time::Duration;

use store::{Filter, Guest, ListPage, StoreError};

use super::{ErrorKind, Phase};

/// Identifies one armed debounce window. A token is only honoured if no newer
/// keystroke has been recorded since it was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Describes one list fetch to run against the store.
#[derive(Clone, Debug)]
pub struct FetchTicket {
    generation: u64,
    pub filter: Option<Filter>,
    pub page: u32,
    pub per_page: u32,
}

/// State machine for the guest collection view: current query, current
/// result set, in-flight guard, debounce bookkeeping, liveness.
#[derive(Debug)]
pub struct GuestListController {
    query: String,
    guests: Vec<Guest>,
    loading: bool,
    loaded: bool,
    error: Option<ErrorKind>,
    in_flight: bool,
    alive: bool,
    fetch_generation: u64,
    debounce_generation: u64,
}

impl Default for GuestListController {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestListController {
    /// Quiet interval before a keystroke turns into a fetch.
    pub const DEBOUNCE: Duration = Duration::from_millis(300);
    /// Fixed page size; pagination beyond one page is out of scope.
    pub const PAGE_SIZE: u32 = 50;

    pub fn new() -> Self {
        Self {
            query: String::new(),
            guests: Vec::new(),
            loading: false,
            loaded: false,
            error: None,
            in_flight: false,
            alive: true,
            fetch_generation: 0,
            debounce_generation: 0,
        }
    }

    /// Record a keystroke immediately and re-arm the debounce window. The
    /// returned token must be handed back via [`debounce_elapsed`] once the
    /// delay has passed.
    ///
    /// [`debounce_elapsed`]: Self::debounce_elapsed
    pub fn set_query(&mut self, query: impl Into<String>) -> DebounceToken {
        self.query = query.into();
        self.debounce_generation += 1;
        DebounceToken(self.debounce_generation)
    }

    /// Called when a debounce timer fires. Stale tokens — a newer keystroke
    /// re-armed the window, or the view was torn down — are no-ops, so rapid
    /// typing collapses to a single trailing fetch.
    pub fn debounce_elapsed(&mut self, token: DebounceToken) -> Option<FetchTicket> {
        if token.0 != self.debounce_generation {
            return None;
        }
        self.begin_refresh()
    }

    /// Start a fetch for the current query. A no-op while another fetch is in
    /// flight (the next debounce window retries naturally) or after teardown.
    pub fn begin_refresh(&mut self) -> Option<FetchTicket> {
        if !self.alive || self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.loading = true;
        self.error = None;
        self.fetch_generation += 1;
        Some(FetchTicket {
            generation: self.fetch_generation,
            filter: Filter::search(&self.query),
            page: 1,
            per_page: Self::PAGE_SIZE,
        })
    }

    /// Reconcile a fetch outcome against the controller's lifetime.
    ///
    /// Results from a stale generation are dropped entirely. For the current
    /// generation the in-flight guard always clears, but visible state is
    /// only touched while the view is alive. A superseded outcome is silent;
    /// an operational failure records the error and leaves the previous
    /// results on screen.
    pub fn apply(&mut self, ticket: &FetchTicket, outcome: Result<ListPage, StoreError>) {
        if ticket.generation != self.fetch_generation {
            return;
        }
        self.in_flight = false;
        if !self.alive {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.guests = page.items;
                self.loaded = true;
            }
            Err(err) if err.is_superseded() => {}
            Err(_) => self.error = Some(ErrorKind::LoadFailed),
        }
    }

    /// Mark the view dead and disarm any pending debounce window. Outcomes
    /// arriving afterwards have no observable effect.
    pub fn teardown(&mut self) {
        self.alive = false;
        self.debounce_generation += 1;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ErrorKind> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.loaded {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use store::{GuestFields, MemoryStore, RecordStore};

    use super::*;

    fn guest(id: &str, first: &str, last: &str, email: &str) -> Guest {
        Guest {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: None,
            address: None,
            date_of_birth: None,
            created: String::new(),
        }
    }

    fn page_of(items: Vec<Guest>) -> ListPage {
        ListPage {
            page: 1,
            per_page: GuestListController::PAGE_SIZE,
            total_items: items.len() as u64,
            items,
        }
    }

    fn operational() -> StoreError {
        StoreError::Http("500 Internal Server Error".to_string())
    }

    #[test]
    fn rapid_typing_collapses_to_one_trailing_fetch() {
        let mut ctl = GuestListController::new();
        let t1 = ctl.set_query("a");
        let t2 = ctl.set_query("an");
        let t3 = ctl.set_query("ana");

        assert!(ctl.debounce_elapsed(t1).is_none());
        assert!(ctl.debounce_elapsed(t2).is_none());
        let ticket = ctl.debounce_elapsed(t3).expect("last token fires");
        assert_eq!(
            ticket.filter.as_ref().map(|f| f.needle().to_string()),
            Some("ana".to_string())
        );
    }

    #[test]
    fn at_most_one_fetch_in_flight() {
        let mut ctl = GuestListController::new();
        assert!(ctl.begin_refresh().is_some());
        assert!(ctl.begin_refresh().is_none());

        // Debounce firing during the fetch is dropped too.
        let token = ctl.set_query("ana");
        assert!(ctl.debounce_elapsed(token).is_none());
    }

    #[test]
    fn blank_query_fetches_unfiltered() {
        let mut ctl = GuestListController::new();
        let ticket = ctl.begin_refresh().unwrap();
        assert!(ticket.filter.is_none());
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.per_page, GuestListController::PAGE_SIZE);
    }

    #[test]
    fn success_replaces_results_and_clears_loading() {
        let mut ctl = GuestListController::new();
        let ticket = ctl.begin_refresh().unwrap();
        assert!(ctl.is_loading());
        assert_eq!(ctl.phase(), Phase::Loading);

        ctl.apply(&ticket, Ok(page_of(vec![guest("g1", "Ana", "Lee", "ana@x.com")])));
        assert!(!ctl.is_loading());
        assert_eq!(ctl.phase(), Phase::Ready);
        assert_eq!(ctl.guests().len(), 1);
    }

    #[test]
    fn superseded_outcome_is_never_an_error() {
        let mut ctl = GuestListController::new();
        let ticket = ctl.begin_refresh().unwrap();
        ctl.apply(&ticket, Err(StoreError::Superseded));
        assert!(ctl.error().is_none());

        let ticket = ctl.begin_refresh().unwrap();
        ctl.apply(&ticket, Err(operational()));
        assert_eq!(ctl.error(), Some(&ErrorKind::LoadFailed));
    }

    #[test]
    fn failure_keeps_previous_results_on_screen() {
        let mut ctl = GuestListController::new();
        let ticket = ctl.begin_refresh().unwrap();
        ctl.apply(&ticket, Ok(page_of(vec![guest("g1", "Ana", "Lee", "ana@x.com")])));

        let ticket = ctl.begin_refresh().unwrap();
        ctl.apply(&ticket, Err(operational()));
        assert_eq!(ctl.guests().len(), 1);
        assert_eq!(ctl.phase(), Phase::Error);
    }

    #[test]
    fn next_refresh_clears_a_previous_error() {
        let mut ctl = GuestListController::new();
        let ticket = ctl.begin_refresh().unwrap();
        ctl.apply(&ticket, Err(operational()));
        assert!(ctl.error().is_some());

        let ticket = ctl.begin_refresh().unwrap();
        assert!(ctl.error().is_none());
        ctl.apply(&ticket, Ok(page_of(Vec::new())));
        assert_eq!(ctl.phase(), Phase::Ready);
    }

    #[test]
    fn stale_generation_results_are_dropped() {
        let mut ctl = GuestListController::new();
        let stale = ctl.begin_refresh().unwrap();
        ctl.apply(&stale, Err(StoreError::Superseded));
        let current = ctl.begin_refresh().unwrap();

        // The stale ticket's late success must not clobber anything, and must
        // not release the guard held by the current fetch.
        ctl.apply(&stale, Ok(page_of(vec![guest("old", "Old", "Row", "o@x.com")])));
        assert!(ctl.guests().is_empty());
        assert!(ctl.begin_refresh().is_none());

        ctl.apply(&current, Ok(page_of(vec![guest("new", "New", "Row", "n@x.com")])));
        assert_eq!(ctl.guests()[0].id, "new");
    }

    #[test]
    fn teardown_freezes_visible_state() {
        let mut ctl = GuestListController::new();
        let ticket = ctl.begin_refresh().unwrap();
        ctl.teardown();

        ctl.apply(&ticket, Ok(page_of(vec![guest("g1", "Ana", "Lee", "ana@x.com")])));
        assert!(ctl.guests().is_empty());
        assert!(ctl.is_loading(), "state is frozen, not rolled back");
        assert!(ctl.error().is_none());

        assert!(ctl.begin_refresh().is_none());
        let token = ctl.set_query("ana");
        assert!(ctl.debounce_elapsed(token).is_none());
    }

    #[tokio::test]
    async fn refresh_round_trip_through_the_memory_store() {
        let store = MemoryStore::new();
        store
            .create(GuestFields {
                first_name: "Ana".to_string(),
                last_name: "O'Brien".to_string(),
                email: "ana@x.com".to_string(),
                phone: None,
                address: None,
                date_of_birth: None,
            })
            .await
            .unwrap();

        let mut ctl = GuestListController::new();
        ctl.set_query("O'Brien");
        let ticket = ctl.begin_refresh().unwrap();
        let outcome = store
            .list(ticket.filter.clone(), ticket.page, ticket.per_page)
            .await;
        ctl.apply(&ticket, outcome);

        assert_eq!(ctl.phase(), Phase::Ready);
        assert_eq!(ctl.guests().len(), 1);
        assert_eq!(ctl.guests()[0].last_name, "O'Brien");
    }
}
