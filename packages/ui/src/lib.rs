//! This crate contains the shared UI core for the workspace: the guest view
//! controllers and the Dioxus hooks that drive them.

pub mod controllers;
pub use controllers::{
    AfterWrite, ErrorKind, GuestDetailController, GuestListController, Phase,
};

mod hooks;
pub use hooks::{confirm, use_guest_detail, use_guest_list, GuestDetailHandle, GuestListHandle};
