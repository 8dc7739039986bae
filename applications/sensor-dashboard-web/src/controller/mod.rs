//! Fetch/validate/poll logic shared by every page

mod hook;
mod state;

pub use hook::use_fetch_controller;
