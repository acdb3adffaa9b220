//! # View controllers for the guest screens
//!
//! Each view owns one controller: an explicit state machine that holds the
//! visible state and makes every transition a named, synchronous operation.
//! The controllers never perform I/O themselves. A `begin_*` transition hands
//! back a ticket describing the request to run; the caller performs the store
//! call and feeds the outcome to the matching `apply_*` transition. The
//! ticket carries the generation number that was current at dispatch, so a
//! result arriving after a newer request was issued is recognised as
//! superseded and dropped instead of applied out of order.
//!
//! This split keeps the fetch discipline — at most one in-flight request per
//! guard, debounced search, no mutation after teardown, superseded outcomes
//! never surfacing as errors — fully testable without a UI runtime. The
//! Dioxus wiring lives in [`crate::hooks`].

use std::fmt;

use store::DraftError;

mod list;
pub use list::{DebounceToken, FetchTicket, GuestListController};

mod detail;
pub use detail::{GuestDetailController, LoadTicket, RemoveTicket, SaveTicket};

/// Named rendering states shared by both controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Error,
}

/// What a view does after a write completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterWrite {
    NavigateBack,
    Stay,
}

/// User-facing failure kinds. Raw transport errors never reach a view; every
/// failure is converted to one of these at the controller boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    LoadFailed,
    SaveFailed,
    DeleteFailed,
    Invalid(DraftError),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadFailed => write!(f, "Failed to load guest data"),
            Self::SaveFailed => write!(f, "Failed to save guest"),
            Self::DeleteFailed => write!(f, "Failed to delete guest"),
            Self::Invalid(err) => err.fmt(f),
        }
    }
}
