//! Controller for a single guest's detail view.

use store::{Guest, GuestDraft, GuestField, GuestFields, StoreError};

use super::{AfterWrite, ErrorKind, Phase};

/// Describes one load of the record by id.
#[derive(Clone, Debug)]
pub struct LoadTicket {
    generation: u64,
    pub id: String,
}

/// Describes one update dispatch, payload already validated and normalized.
#[derive(Clone, Debug)]
pub struct SaveTicket {
    generation: u64,
    pub id: String,
    pub fields: GuestFields,
}

/// Describes one delete dispatch. Only issued after explicit confirmation.
#[derive(Clone, Debug)]
pub struct RemoveTicket {
    generation: u64,
    pub id: String,
}

/// State machine for the guest detail view: load-on-mount, a field-level
/// edit buffer, save and delete, with the same guard/alive/generation
/// discipline as the list controller. Loads and writes are guarded
/// separately since they are different logical operations.
#[derive(Debug)]
pub struct GuestDetailController {
    id: String,
    draft: Option<GuestDraft>,
    created: String,
    loading: bool,
    saving: bool,
    error: Option<ErrorKind>,
    load_in_flight: bool,
    write_in_flight: bool,
    alive: bool,
    load_generation: u64,
    write_generation: u64,
}

impl GuestDetailController {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            draft: None,
            created: String::new(),
            loading: false,
            saving: false,
            error: None,
            load_in_flight: false,
            write_in_flight: false,
            alive: true,
            load_generation: 0,
            write_generation: 0,
        }
    }

    /// Start loading the record. One load at a time per controller instance.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if !self.alive || self.load_in_flight {
            return None;
        }
        self.load_in_flight = true;
        self.loading = true;
        self.error = None;
        self.load_generation += 1;
        Some(LoadTicket {
            generation: self.load_generation,
            id: self.id.clone(),
        })
    }

    /// Seed the edit buffer from a successful fetch; the buffer is never
    /// fabricated. Superseded outcomes are silent; other failures leave the
    /// draft absent so the view renders its not-found state.
    pub fn apply_load(&mut self, ticket: &LoadTicket, outcome: Result<Guest, StoreError>) {
        if ticket.generation != self.load_generation {
            return;
        }
        self.load_in_flight = false;
        if !self.alive {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(guest) => {
                self.created = guest.created.clone();
                self.draft = Some(GuestDraft::from_guest(&guest));
            }
            Err(err) if err.is_superseded() => {}
            Err(_) => self.error = Some(ErrorKind::LoadFailed),
        }
    }

    /// Pure local mutation of the edit buffer. No effect before a record is
    /// loaded, no validation until save.
    pub fn edit_field(&mut self, field: GuestField, value: String) {
        if let Some(draft) = &mut self.draft {
            draft.set(field, value);
        }
    }

    /// Validate the draft and start an update. Validation failures surface
    /// inline and dispatch nothing; the buffer is kept as typed.
    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        if !self.alive || self.write_in_flight {
            return None;
        }
        let draft = self.draft.as_ref()?;
        let fields = match draft.to_fields() {
            Ok(fields) => fields,
            Err(err) => {
                self.error = Some(ErrorKind::Invalid(err));
                return None;
            }
        };
        self.write_in_flight = true;
        self.saving = true;
        self.error = None;
        self.write_generation += 1;
        Some(SaveTicket {
            generation: self.write_generation,
            id: self.id.clone(),
            fields,
        })
    }

    /// On success the caller navigates back to the list; a failed save keeps
    /// the buffer intact so the user can retry without re-entering data.
    pub fn apply_save(
        &mut self,
        ticket: &SaveTicket,
        outcome: Result<Guest, StoreError>,
    ) -> AfterWrite {
        if ticket.generation != self.write_generation {
            return AfterWrite::Stay;
        }
        self.write_in_flight = false;
        if !self.alive {
            return AfterWrite::Stay;
        }
        self.saving = false;
        match outcome {
            Ok(_) => AfterWrite::NavigateBack,
            Err(err) if err.is_superseded() => AfterWrite::Stay,
            Err(_) => {
                self.error = Some(ErrorKind::SaveFailed);
                AfterWrite::Stay
            }
        }
    }

    /// Start a delete. The caller must have obtained explicit confirmation
    /// before calling this; no network request exists until it does.
    pub fn begin_remove(&mut self) -> Option<RemoveTicket> {
        if !self.alive || self.write_in_flight {
            return None;
        }
        self.write_in_flight = true;
        self.error = None;
        self.write_generation += 1;
        Some(RemoveTicket {
            generation: self.write_generation,
            id: self.id.clone(),
        })
    }

    /// A failed delete means the guest is assumed to still exist — the view
    /// stays put and shows the error rather than navigating away silently.
    pub fn apply_remove(
        &mut self,
        ticket: &RemoveTicket,
        outcome: Result<(), StoreError>,
    ) -> AfterWrite {
        if ticket.generation != self.write_generation {
            return AfterWrite::Stay;
        }
        self.write_in_flight = false;
        if !self.alive {
            return AfterWrite::Stay;
        }
        match outcome {
            Ok(()) => AfterWrite::NavigateBack,
            Err(err) if err.is_superseded() => AfterWrite::Stay,
            Err(_) => {
                self.error = Some(ErrorKind::DeleteFailed);
                AfterWrite::Stay
            }
        }
    }

    pub fn teardown(&mut self) {
        self.alive = false;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn draft(&self) -> Option<&GuestDraft> {
        self.draft.as_ref()
    }

    /// Store-assigned creation stamp, empty until a record is loaded.
    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&ErrorKind> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.draft.is_some() {
            Phase::Ready
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Idle
        }
    }
}
